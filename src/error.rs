//! Error types for shamsi.
//!
//! Conversion and formatting never fail; these cover the CLI, configuration
//! and batch layers.

/// Result type alias for shamsi operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for shamsi.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// A date argument was not `YYYY-MM-DD` or not a real Gregorian date.
    #[error("invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input.
        value: String,
    },

    /// A Jalaali date argument does not exist in the Jalaali calendar.
    #[error("invalid Jalaali date '{value}'")]
    InvalidJalaaliDate {
        /// The rejected input.
        value: String,
    },

    /// The Gregorian equivalent of a Jalaali date is out of range.
    #[error("Jalaali date '{value}' has no representable Gregorian equivalent")]
    GregorianOutOfRange {
        /// The Jalaali date.
        value: String,
    },

    /// Failed to read the input CSV.
    #[error("failed to read CSV input")]
    CsvRead {
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// Failed to write the output CSV.
    #[error("failed to write CSV output")]
    CsvWrite {
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// Timestamp column missing from the CSV header.
    #[error("column '{column}' not found in CSV header")]
    ColumnNotFound {
        /// Requested column name.
        column: String,
    },

    /// Failed to open a file.
    #[error("failed to open '{path}'")]
    FileOpen {
        /// Path to the file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize JSON output.
    #[error("failed to serialize JSON output")]
    JsonSerialize {
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}
