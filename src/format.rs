//! Display strings for trip departure timestamps.
//!
//! The calendar date comes from the timestamp as written, and a literal
//! `THH:MM` in the input always wins over whatever the parser derived, so a
//! departure entered as `23:45` is shown as `11:45 PM` in every host timezone.

use crate::calendar::{GregorianDate, JalaaliDate};
use crate::constants::display::HOURS_PER_HALF_DAY;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static LITERAL_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"T(\d{2}):(\d{2})").expect("valid regex"));

/// Naive date-time layouts accepted in addition to RFC 3339 and RFC 2822.
const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%MZ",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// ISO 8601 offset layouts RFC 3339 rejects: basic `+0330` offsets and
/// times without seconds. `%z` takes the offset with or without the colon.
const OFFSET_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%z"];

/// Morning or afternoon on a 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    /// Before noon.
    Am,
    /// Noon and after.
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Am => write!(f, "AM"),
            Self::Pm => write!(f, "PM"),
        }
    }
}

/// Hour and minute as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallClockTime {
    /// Hour of the day (0-23).
    pub hour: u32,
    /// Minute of the hour (0-59).
    pub minute: u32,
}

impl WallClockTime {
    /// Hour on a 12-hour clock face (1-12).
    pub const fn hour12(&self) -> u32 {
        match self.hour % HOURS_PER_HALF_DAY {
            0 => HOURS_PER_HALF_DAY,
            hour => hour,
        }
    }

    /// AM before noon, PM from noon on.
    pub const fn meridiem(&self) -> Meridiem {
        if self.hour >= HOURS_PER_HALF_DAY {
            Meridiem::Pm
        } else {
            Meridiem::Am
        }
    }
}

impl fmt::Display for WallClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02} {}",
            self.hour12(),
            self.minute,
            self.meridiem()
        )
    }
}

impl From<NaiveTime> for WallClockTime {
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
        }
    }
}

/// A timestamp split into its Gregorian date and displayed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedTimestamp {
    /// Calendar date.
    pub date: GregorianDate,
    /// Time of day, with any literal `THH:MM` already applied.
    pub time: WallClockTime,
}

impl ParsedTimestamp {
    /// The date in the Jalaali calendar.
    pub fn jalaali(&self) -> JalaaliDate {
        self.date.to_jalaali()
    }
}

/// Parse a timestamp into a Gregorian date and wall-clock time.
///
/// Accepted, in order:
/// - RFC 3339 / ISO 8601 with an offset (`+03:30` or `+0330`, seconds
///   optional): the date and time as written, the offset is not applied
/// - `YYYY-MM-DDTHH:MM[:SS[.fff]]`, `YYYY-MM-DDTHH:MMZ`, or with a space
///   instead of `T`
/// - `YYYY-MM-DD` (midnight)
/// - RFC 2822: converted to the host's local timezone
///
/// Returns `None` for empty or unparsable input.
pub fn parse_timestamp(input: &str) -> Option<ParsedTimestamp> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let naive = parse_naive(input)?;
    let time = literal_time(input).unwrap_or_else(|| WallClockTime::from(naive.time()));

    Some(ParsedTimestamp {
        date: GregorianDate::from(naive.date()),
        time,
    })
}

fn parse_naive(input: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.naive_local());
    }
    if let Some(dt) = OFFSET_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(input, format).ok())
    {
        return Some(dt.naive_local());
    }
    if let Some(dt) = NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
    {
        return Some(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN));
    }
    // No literal wall-clock to honor here, so fall back to host local time.
    DateTime::parse_from_rfc2822(input)
        .ok()
        .map(|dt| dt.with_timezone(&Local).naive_local())
}

/// Hour and minute from the first literal `THH:MM` in the input.
fn literal_time(input: &str) -> Option<WallClockTime> {
    let captures = LITERAL_TIME.captures(input)?;
    let hour = captures.get(1)?.as_str().parse().ok()?;
    let minute = captures.get(2)?.as_str().parse().ok()?;
    Some(WallClockTime { hour, minute })
}

/// Format a timestamp as `YYYY-MM-DD hh:mm AM|PM` in the Jalaali calendar.
///
/// Returns an empty string when the input does not parse.
///
/// # Examples
///
/// ```
/// use shamsi::format::format_jalaali_from_iso;
///
/// assert_eq!(format_jalaali_from_iso("2025-11-04T23:45"), "1404-08-13 11:45 PM");
/// assert_eq!(format_jalaali_from_iso("not-a-date"), "");
/// ```
pub fn format_jalaali_from_iso(input: &str) -> String {
    parse_timestamp(input).map_or_else(String::new, |parsed| {
        format!("{} {}", parsed.jalaali(), parsed.time)
    })
}

/// Format a timestamp as `YYYY-MM-DD` in the Jalaali calendar.
///
/// Returns an empty string when the input does not parse.
pub fn format_jalaali_date_only_from_iso(input: &str) -> String {
    parse_timestamp(input).map_or_else(String::new, |parsed| parsed.jalaali().to_string())
}
