//! Configuration validation.

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.batch.column.trim().is_empty() {
        return Err(Error::ConfigValidation {
            message: "batch.column must not be empty".to_string(),
        });
    }

    Ok(())
}
