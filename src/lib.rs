//! Shamsi - Gregorian to Solar Hijri (Jalaali) date conversion.
//!
//! The library converts proleptic Gregorian dates to the Jalaali calendar and
//! formats trip departure timestamps for display. The conversion functions
//! are pure and can be called from any thread.
//!
//! ```
//! use shamsi::{format_jalaali_from_iso, gregorian_to_jalaali};
//!
//! assert_eq!(gregorian_to_jalaali(2025, 3, 21).to_string(), "1404-01-01");
//! assert_eq!(format_jalaali_from_iso("2025-11-04T23:45"), "1404-08-13 11:45 PM");
//! ```

pub mod batch;
pub mod calendar;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;

use clap::Parser;
use cli::{Cli, Command, commands};
use config::load_default_config;
use tracing::debug;

pub use calendar::{GregorianDate, JalaaliDate, gregorian_to_jalaali, jalaali_to_gregorian};
pub use error::{Error, Result};
pub use format::{format_jalaali_date_only_from_iso, format_jalaali_from_iso};

/// Main entry point for the shamsi CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Command::Convert { date, json } => commands::convert(date, json),
        Command::ToGregorian { date, json } => commands::to_gregorian(date, json),
        Command::Format {
            timestamps,
            date_only,
        } => {
            let config = load_default_config()?;
            // Explicit flag or env value beats the config file
            let date_only = date_only.unwrap_or(config.format.date_only);
            commands::format_timestamps(&timestamps, date_only);
            Ok(())
        }
        Command::Batch(args) => {
            let config = load_default_config()?;
            debug!("Batch config: {:?}", config.batch);
            commands::batch(&args, &config)
        }
        Command::Config { action } => commands::config(action),
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    // stdout carries converted dates, so logs go to stderr
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
