//! Proleptic Gregorian calendar dates.

use crate::calendar::{JalaaliDate, gregorian_to_jalaali};
use crate::constants::gregorian::DAYS_IN_MONTH;
use crate::error::Error;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Whether `year` is a leap year in the proleptic Gregorian calendar.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`.
///
/// Returns 0 for a month outside 1-12.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        1..=12 => DAYS_IN_MONTH[(month - 1) as usize],
        _ => 0,
    }
}

/// A calendar date in the proleptic Gregorian calendar.
///
/// Ordering follows the calendar: `(year, month, day)` lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct GregorianDate {
    pub(crate) year: i32,
    pub(crate) month: u32,
    pub(crate) day: u32,
}

impl GregorianDate {
    /// Create a date, returning `None` if the month or day is out of range.
    pub const fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        if day == 0 || day > days_in_month(year, month) {
            return None;
        }
        Some(Self { year, month, day })
    }

    /// Calendar year.
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month of the year (1-12).
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Day of the month (1-31).
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Convert to the Jalaali calendar.
    #[allow(clippy::cast_possible_wrap)]
    pub fn to_jalaali(&self) -> JalaaliDate {
        // month <= 12 and day <= 31 always fit in i32
        gregorian_to_jalaali(self.year, self.month as i32, self.day as i32)
    }
}

impl From<NaiveDate> for GregorianDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl FromStr for GregorianDate {
    type Err = Error;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self::from)
            .map_err(|_| Error::InvalidDate {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_is_leap_year() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(1600));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2025));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn test_is_leap_year_negative() {
        // Proleptic year -4 (5 BCE) follows the same rule
        assert!(is_leap_year(-4));
        assert!(is_leap_year(-400));
        assert!(!is_leap_year(-100));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 12), 31);
        assert_eq!(days_in_month(2025, 0), 0);
        assert_eq!(days_in_month(2025, 13), 0);
    }

    #[test]
    fn test_new_rejects_invalid_dates() {
        assert!(GregorianDate::new(2025, 2, 29).is_none());
        assert!(GregorianDate::new(2025, 4, 31).is_none());
        assert!(GregorianDate::new(2025, 13, 1).is_none());
        assert!(GregorianDate::new(2025, 1, 0).is_none());
        assert!(GregorianDate::new(2024, 2, 29).is_some());
    }

    #[test]
    fn test_from_naive_date() {
        let naive = NaiveDate::from_ymd_opt(2025, 11, 4).unwrap();
        let date = GregorianDate::from(naive);
        assert_eq!((date.year(), date.month(), date.day()), (2025, 11, 4));
    }

    #[test]
    fn test_from_str() {
        let date: GregorianDate = "2024-02-29".parse().unwrap();
        assert_eq!(date, GregorianDate::new(2024, 2, 29).unwrap());
        assert!("2025-02-29".parse::<GregorianDate>().is_err());
        assert!("29/02/2024".parse::<GregorianDate>().is_err());
        assert!("".parse::<GregorianDate>().is_err());
    }

    #[test]
    fn test_display_pads_fields() {
        let date = GregorianDate::new(622, 3, 9).unwrap();
        assert_eq!(date.to_string(), "0622-03-09");
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a = GregorianDate::new(2024, 12, 31).unwrap();
        let b = GregorianDate::new(2025, 1, 1).unwrap();
        assert!(a < b);
    }
}
