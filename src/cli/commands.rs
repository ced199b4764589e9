//! Subcommand handlers.

use crate::batch::TripListing;
use crate::calendar::{GregorianDate, JalaaliDate};
use crate::cli::{BatchArgs, ConfigAction};
use crate::config::{Config, config_file_path, load_default_config, save_default_config};
use crate::error::{Error, Result};
use crate::format::{format_jalaali_date_only_from_iso, format_jalaali_from_iso};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Path argument meaning standard input.
const STDIN_PATH: &str = "-";

/// A date in both calendars, as printed by `--json`.
#[derive(Debug, Serialize)]
pub struct ConversionOutput {
    /// Gregorian side.
    pub gregorian: GregorianDate,
    /// Jalaali side.
    pub jalaali: JalaaliDate,
}

/// Print the Jalaali equivalent of a Gregorian date.
pub fn convert(date: GregorianDate, json: bool) -> Result<()> {
    let jalaali = date.to_jalaali();
    debug!("{date} -> {jalaali}");

    if json {
        print_json(&ConversionOutput {
            gregorian: date,
            jalaali,
        })
    } else {
        println!("{jalaali}");
        Ok(())
    }
}

/// Print the Gregorian equivalent of a Jalaali date.
pub fn to_gregorian(date: JalaaliDate, json: bool) -> Result<()> {
    let gregorian = date
        .to_gregorian()
        .ok_or_else(|| Error::GregorianOutOfRange {
            value: date.to_string(),
        })?;
    debug!("{date} -> {gregorian}");

    if json {
        print_json(&ConversionOutput {
            gregorian,
            jalaali: date,
        })
    } else {
        println!("{gregorian}");
        Ok(())
    }
}

/// Print one formatted line per timestamp.
///
/// Unparsable timestamps print an empty line so output stays aligned with input.
pub fn format_timestamps(timestamps: &[String], date_only: bool) {
    for timestamp in timestamps {
        let formatted = if date_only {
            format_jalaali_date_only_from_iso(timestamp)
        } else {
            format_jalaali_from_iso(timestamp)
        };

        if formatted.is_empty() {
            warn!("Could not parse timestamp: '{timestamp}'");
        }
        println!("{formatted}");
    }
}

/// Annotate a CSV trip listing with a Jalaali column.
pub fn batch(args: &BatchArgs, config: &Config) -> Result<()> {
    let column = args.column.as_deref().unwrap_or(&config.batch.column);
    let date_only = args.date_only.unwrap_or(config.format.date_only);

    let input: Box<dyn Read> = if args.input.as_os_str() == STDIN_PATH {
        Box::new(io::stdin().lock())
    } else {
        Box::new(BufReader::new(open(&args.input)?))
    };

    info!("Annotating {} (column '{column}')", args.input.display());
    // Header is checked before the output file is created or truncated
    let listing = TripListing::open(input, column)?;

    let output: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).map_err(|e| {
            Error::FileOpen {
                path: path.clone(),
                source: e,
            }
        })?)),
        None => Box::new(io::stdout().lock()),
    };

    let summary = listing.annotate(output, date_only)?;
    info!(
        "Complete: {} rows, {} converted, {} without a date",
        summary.rows(),
        summary.converted,
        summary.empty
    );

    if summary.empty > 0 {
        warn!("{} row(s) had no parsable timestamp", summary.empty);
    }

    Ok(())
}

/// Handle `config` subcommands.
pub fn config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let saved_path = save_default_config(&Config::default())?;
                println!("Created configuration file: {}", saved_path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_default_config()?;
            let contents =
                toml::to_string_pretty(&config).map_err(|e| Error::ConfigSerialize { source: e })?;
            print!("{contents}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| Error::FileOpen {
        path: path.to_path_buf(),
        source: e,
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json =
        serde_json::to_string_pretty(value).map_err(|e| Error::JsonSerialize { source: e })?;
    println!("{json}");
    Ok(())
}
