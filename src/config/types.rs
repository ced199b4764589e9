//! Configuration type definitions.

use crate::constants::DEFAULT_TIMESTAMP_COLUMN;
use serde::{Deserialize, Serialize};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display settings.
    #[serde(default)]
    pub format: FormatConfig,

    /// Batch annotation settings.
    #[serde(default)]
    pub batch: BatchConfig,
}

/// Display settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Omit the time of day from formatted timestamps.
    pub date_only: bool,
}

/// Batch annotation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// CSV column holding the timestamps to convert.
    pub column: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            column: DEFAULT_TIMESTAMP_COLUMN.to_string(),
        }
    }
}
