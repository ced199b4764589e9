//! CLI argument definitions.

use crate::calendar::{GregorianDate, JalaaliDate};
use crate::cli::validators::{parse_gregorian_date, parse_jalaali_date};
use clap::builder::BoolishValueParser;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Convert Gregorian dates and trip departure times to the Solar Hijri (Jalaali) calendar.
#[derive(Debug, Parser)]
#[command(name = "shamsi")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Only log warnings and errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a Gregorian date (YYYY-MM-DD) to the Jalaali calendar.
    Convert {
        /// Gregorian date, e.g. 2025-03-21.
        #[arg(value_parser = parse_gregorian_date, allow_hyphen_values = true)]
        date: GregorianDate,

        /// Print both dates as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Convert a Jalaali date (YYYY-MM-DD) to the Gregorian calendar.
    ToGregorian {
        /// Jalaali date, e.g. 1404-01-01.
        #[arg(value_parser = parse_jalaali_date, allow_hyphen_values = true)]
        date: JalaaliDate,

        /// Print both dates as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Format timestamps as a Jalaali date with 12-hour time.
    Format {
        /// Timestamps such as 2025-11-04T23:45 or full ISO 8601.
        #[arg(required = true)]
        timestamps: Vec<String>,

        /// Omit the time of day (`--date-only=false` overrides the config file).
        #[arg(
            long,
            env = "SHAMSI_DATE_ONLY",
            value_name = "BOOL",
            num_args = 0..=1,
            require_equals = true,
            default_missing_value = "true",
            value_parser = BoolishValueParser::new()
        )]
        date_only: Option<bool>,
    },
    /// Append a Jalaali column to a CSV trip listing.
    Batch(BatchArgs),
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for the batch command.
#[derive(Debug, Args)]
pub struct BatchArgs {
    /// CSV file to annotate ("-" reads standard input).
    pub input: PathBuf,

    /// Column holding departure timestamps (default from config: departure_time).
    #[arg(short, long, env = "SHAMSI_COLUMN")]
    pub column: Option<String>,

    /// Omit the time of day (`--date-only=false` overrides the config file).
    #[arg(
        long,
        env = "SHAMSI_DATE_ONLY",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub date_only: Option<bool>,

    /// Write to this file instead of standard output.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
