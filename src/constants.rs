//! Application-wide constants.
//!
//! Calendar arithmetic constants live here alongside the CLI defaults so the
//! conversion code reads as plain arithmetic.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "shamsi";

/// Default CSV column holding trip departure timestamps.
pub const DEFAULT_TIMESTAMP_COLUMN: &str = "departure_time";

/// Name of the column appended by batch annotation.
pub const JALAALI_COLUMN: &str = "jalaali";

/// Gregorian calendar constants.
pub mod gregorian {
    /// Reference year of the day count. Day 0 is January 1st of this year.
    pub const EPOCH_YEAR: i64 = 1600;

    /// Days in each month (common year).
    pub const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

    /// Days in a 400-year cycle.
    pub const DAYS_PER_400_YEARS: i64 = 146_097;

    /// Days in a 4-year block whose first year is leap.
    pub const DAYS_PER_4_YEARS: i64 = 1_461;

    /// Days in a common year.
    pub const DAYS_PER_YEAR: i64 = 365;

    /// Days in a century that does not start a 400-year cycle.
    pub const DAYS_PER_CENTURY: i64 = 36_524;

    /// Days in the first century of a 400-year cycle (its first year is leap).
    pub const DAYS_PER_LEAP_CENTURY: i64 = DAYS_PER_CENTURY + 1;
}

/// Jalaali (Solar Hijri) calendar constants.
pub mod jalaali {
    /// Jalaali year that starts on day [`EPOCH_OFFSET_DAYS`] of the Gregorian count.
    pub const EPOCH_YEAR: i64 = 979;

    /// Days between 1600-01-01 and 979-01-01 (1600-03-20).
    pub const EPOCH_OFFSET_DAYS: i64 = 79;

    /// Days in a 33-year sub-cycle (33 * 365 + 8).
    pub const DAYS_PER_33_YEARS: i64 = 12_053;

    /// Days in a 4-year block whose first year is leap (4 * 365 + 1).
    pub const DAYS_PER_4_YEARS: i64 = 1_461;

    /// Days in a common year.
    pub const DAYS_PER_YEAR: i64 = 365;

    /// Leap days per 33-year sub-cycle.
    pub const LEAP_DAYS_PER_33_YEARS: i64 = 8;

    /// Days in each month (common year).
    pub const DAYS_IN_MONTH: [u32; 12] = [31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 29];
}

/// Display format constants.
pub mod display {
    /// Hours on a 12-hour clock face.
    pub const HOURS_PER_HALF_DAY: u32 = 12;
}
