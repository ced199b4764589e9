//! Bulk annotation of trip listings exported as CSV.
//!
//! Every row gets a trailing `jalaali` column holding the Solar Hijri form of
//! its departure timestamp. Rows whose timestamp does not parse keep an empty
//! cell, the same sentinel the single-value formatters return.

use crate::constants::JALAALI_COLUMN;
use crate::error::{Error, Result};
use crate::format::{format_jalaali_date_only_from_iso, format_jalaali_from_iso};
use csv::StringRecord;
use std::io::{Read, Write};
use tracing::{debug, warn};

/// Row counts from one annotation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Rows with a formatted Jalaali value.
    pub converted: usize,
    /// Rows whose timestamp was empty or unparsable.
    pub empty: usize,
}

impl BatchSummary {
    /// Total data rows seen.
    pub const fn rows(&self) -> usize {
        self.converted + self.empty
    }
}

/// A CSV trip listing whose header has been read and whose timestamp column
/// has been located.
///
/// Opening checks the header before any output exists, so a missing column
/// never leaves a truncated output file behind.
#[derive(Debug)]
pub struct TripListing<R: Read> {
    reader: csv::Reader<R>,
    headers: StringRecord,
    index: usize,
}

impl<R: Read> TripListing<R> {
    /// Read the header from `input` and find `column`.
    ///
    /// Handles a UTF-8 BOM on the header. Header names are matched after
    /// trimming surrounding whitespace.
    pub fn open(input: R, column: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(input);

        let headers = reader
            .headers()
            .map_err(|e| Error::CsvRead { source: e })?
            .clone();

        let index = headers
            .iter()
            .position(|name| name.trim() == column)
            .ok_or_else(|| Error::ColumnNotFound {
                column: column.to_string(),
            })?;
        debug!("Timestamp column '{column}' at index {index}");

        Ok(Self {
            reader,
            headers,
            index,
        })
    }

    /// Write every row to `output` with a trailing `jalaali` column.
    pub fn annotate<W: Write>(mut self, output: W, date_only: bool) -> Result<BatchSummary> {
        let mut writer = csv::Writer::from_writer(output);
        self.headers.push_field(JALAALI_COLUMN);
        writer
            .write_record(&self.headers)
            .map_err(|e| Error::CsvWrite { source: e })?;

        let format: fn(&str) -> String = if date_only {
            format_jalaali_date_only_from_iso
        } else {
            format_jalaali_from_iso
        };

        let mut summary = BatchSummary::default();

        for (row, result) in self.reader.records().enumerate() {
            let mut record = result.map_err(|e| Error::CsvRead { source: e })?;
            let value = record.get(self.index).unwrap_or_default();
            let formatted = format(value);

            if formatted.is_empty() {
                if !value.trim().is_empty() {
                    // Header is line 1
                    warn!("Line {}: unparsable timestamp '{value}'", row + 2);
                }
                summary.empty += 1;
            } else {
                summary.converted += 1;
            }

            record.push_field(&formatted);
            writer
                .write_record(&record)
                .map_err(|e| Error::CsvWrite { source: e })?;
        }

        writer.flush()?;
        Ok(summary)
    }
}

/// Copy CSV from `input` to `output`, appending a `jalaali` column computed
/// from `column`.
///
/// # Errors
///
/// Returns an error if:
/// - The CSV cannot be read or a row has the wrong number of fields
/// - `column` is not in the header
/// - The output cannot be written
pub fn annotate_csv<R: Read, W: Write>(
    input: R,
    output: W,
    column: &str,
    date_only: bool,
) -> Result<BatchSummary> {
    TripListing::open(input, column)?.annotate(output, date_only)
}
