//! CLI argument validators.

use crate::calendar::{GregorianDate, JalaaliDate};

/// Parse and validate a Gregorian `YYYY-MM-DD` argument.
pub fn parse_gregorian_date(s: &str) -> Result<GregorianDate, String> {
    s.parse().map_err(|e: crate::Error| e.to_string())
}

/// Parse and validate a Jalaali `YYYY-MM-DD` argument.
pub fn parse_jalaali_date(s: &str) -> Result<JalaaliDate, String> {
    s.parse().map_err(|e: crate::Error| e.to_string())
}
