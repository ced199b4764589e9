//! Jalaali (Solar Hijri) dates and conversion to and from the Gregorian calendar.
//!
//! Both directions count days from 1600-01-01. Jalaali year 979 starts on
//! day 79 of that count, and from there the calendar repeats in 33-year
//! sub-cycles of 12053 days, each made of eight 4-year blocks (first year
//! leap) followed by one common year.

use crate::calendar::{GregorianDate, days_in_month};
use crate::constants::{gregorian, jalaali};
use crate::error::Error;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static JALAALI_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-?\d{1,9})-(\d{1,2})-(\d{1,2})$").expect("valid regex"));

/// Whether `year` is a leap year in the 33-year arithmetic Jalaali calendar.
///
/// Leap years fall on positions 0, 4, 8, ..., 28 of each 33-year sub-cycle
/// counted from year 979, which is what `(25 * year + 11) mod 33 < 8` selects.
pub const fn is_leap_jalaali_year(year: i64) -> bool {
    // Reduce first so the multiplication cannot overflow.
    (year.rem_euclid(33) * 25 + 11).rem_euclid(33) < 8
}

/// Number of days in Jalaali `month` (1-12) of `year`.
///
/// Returns 0 for a month outside 1-12.
pub const fn jalaali_month_length(year: i64, month: u32) -> u32 {
    match month {
        12 if is_leap_jalaali_year(year) => 30,
        1..=12 => jalaali::DAYS_IN_MONTH[(month - 1) as usize],
        _ => 0,
    }
}

/// A calendar date in the Jalaali (Solar Hijri) calendar.
///
/// Months 1-6 have 31 days, months 7-11 have 30, and month 12 has 29 or 30
/// depending on [`is_leap_jalaali_year`]. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct JalaaliDate {
    pub(crate) year: i64,
    pub(crate) month: u32,
    pub(crate) day: u32,
}

impl JalaaliDate {
    /// Create a date, returning `None` if the month or day is out of range.
    pub const fn new(year: i64, month: u32, day: u32) -> Option<Self> {
        if day == 0 || day > jalaali_month_length(year, month) {
            return None;
        }
        Some(Self { year, month, day })
    }

    /// Jalaali year.
    pub const fn year(&self) -> i64 {
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

    /// Convert back to the Gregorian calendar.
    ///
    /// Returns `None` when the Gregorian year does not fit in an `i32`.
    pub fn to_gregorian(&self) -> Option<GregorianDate> {
        jalaali_to_gregorian(*self)
    }
}

impl fmt::Display for JalaaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for JalaaliDate {
    type Err = Error;

    /// Parse `YYYY-MM-DD`, rejecting days past the end of the Jalaali month.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidJalaaliDate {
            value: s.to_string(),
        };

        let captures = JALAALI_DATE.captures(s.trim()).ok_or_else(invalid)?;
        let field = |i: usize| captures.get(i).map(|m| m.as_str());
        let year = field(1).and_then(|v| v.parse().ok()).ok_or_else(invalid)?;
        let month = field(2).and_then(|v| v.parse().ok()).ok_or_else(invalid)?;
        let day = field(3).and_then(|v| v.parse().ok()).ok_or_else(invalid)?;

        Self::new(year, month, day).ok_or_else(invalid)
    }
}

/// Convert a proleptic Gregorian date to the Jalaali calendar.
///
/// Total over all inputs: nothing is validated. A month below 1 contributes
/// no month days, a month above 12 contributes the whole year, and the day is
/// taken as an offset from the first of the month.
///
/// # Examples
///
/// ```
/// use shamsi::calendar::gregorian_to_jalaali;
///
/// let nowruz = gregorian_to_jalaali(1979, 3, 21);
/// assert_eq!((nowruz.year(), nowruz.month(), nowruz.day()), (1358, 1, 1));
/// ```
pub fn gregorian_to_jalaali(year: i32, month: i32, day: i32) -> JalaaliDate {
    let gy = i64::from(year) - gregorian::EPOCH_YEAR;

    // Days from 1600-01-01 to January 1st of `year`.
    let mut g_day_no = gregorian::DAYS_PER_YEAR * gy + (gy + 3).div_euclid(4)
        - (gy + 99).div_euclid(100)
        + (gy + 399).div_euclid(400);

    let elapsed_months = usize::try_from(i64::from(month) - 1).unwrap_or(0);
    g_day_no += (1..=12)
        .take(elapsed_months)
        .map(|m| i64::from(days_in_month(year, m)))
        .sum::<i64>();
    g_day_no += i64::from(day) - 1;

    let mut j_day_no = g_day_no - jalaali::EPOCH_OFFSET_DAYS;

    let cycles = j_day_no.div_euclid(jalaali::DAYS_PER_33_YEARS);
    j_day_no = j_day_no.rem_euclid(jalaali::DAYS_PER_33_YEARS);

    // Non-negative from here on.
    let mut jy = jalaali::EPOCH_YEAR + 33 * cycles + 4 * (j_day_no / jalaali::DAYS_PER_4_YEARS);
    j_day_no %= jalaali::DAYS_PER_4_YEARS;

    if j_day_no > jalaali::DAYS_PER_YEAR {
        jy += (j_day_no - 1) / jalaali::DAYS_PER_YEAR;
        j_day_no = (j_day_no - 1) % jalaali::DAYS_PER_YEAR;
    }

    let (month, day) = split_day_of_year(j_day_no);
    JalaaliDate {
        year: jy,
        month,
        day,
    }
}

/// Split a zero-based Jalaali day of year (0-365) into month and day.
fn split_day_of_year(mut remaining: i64) -> (u32, u32) {
    let mut month = 1;
    // The last month takes whatever is left, so the leap day lands on Esfand 30.
    for &length in &jalaali::DAYS_IN_MONTH[..11] {
        let length = i64::from(length);
        if remaining < length {
            break;
        }
        remaining -= length;
        month += 1;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let day = remaining as u32 + 1;
    (month, day)
}

/// Convert a Jalaali date to the proleptic Gregorian calendar.
///
/// Inverse of [`gregorian_to_jalaali`] for every valid date. Returns `None`
/// when the Jalaali year (and therefore the Gregorian year) is outside the
/// `i32` range.
pub fn jalaali_to_gregorian(date: JalaaliDate) -> Option<GregorianDate> {
    if !(i64::from(i32::MIN)..=i64::from(i32::MAX)).contains(&date.year) {
        return None;
    }

    let jy = date.year - jalaali::EPOCH_YEAR;
    let mut j_day_no = jalaali::DAYS_PER_YEAR * jy
        + jy.div_euclid(33) * jalaali::LEAP_DAYS_PER_33_YEARS
        + (jy.rem_euclid(33) + 3) / 4;
    j_day_no += jalaali::DAYS_IN_MONTH
        .iter()
        .take(date.month as usize - 1)
        .map(|&length| i64::from(length))
        .sum::<i64>();
    j_day_no += i64::from(date.day) - 1;

    let mut g_day_no = j_day_no + jalaali::EPOCH_OFFSET_DAYS;

    let mut gy = gregorian::EPOCH_YEAR + 400 * g_day_no.div_euclid(gregorian::DAYS_PER_400_YEARS);
    g_day_no = g_day_no.rem_euclid(gregorian::DAYS_PER_400_YEARS);

    // The first century of a 400-year cycle has the extra leap day.
    if g_day_no >= gregorian::DAYS_PER_LEAP_CENTURY {
        g_day_no -= 1;
        gy += 100 * (g_day_no / gregorian::DAYS_PER_CENTURY);
        g_day_no %= gregorian::DAYS_PER_CENTURY;
        if g_day_no >= gregorian::DAYS_PER_YEAR {
            g_day_no += 1;
        }
    }

    gy += 4 * (g_day_no / gregorian::DAYS_PER_4_YEARS);
    g_day_no %= gregorian::DAYS_PER_4_YEARS;

    if g_day_no > gregorian::DAYS_PER_YEAR {
        g_day_no -= 1;
        gy += g_day_no / gregorian::DAYS_PER_YEAR;
        g_day_no %= gregorian::DAYS_PER_YEAR;
    }

    let year = i32::try_from(gy).ok()?;
    let mut month = 1;
    while month < 12 {
        let length = i64::from(days_in_month(year, month));
        if g_day_no < length {
            break;
        }
        g_day_no -= length;
        month += 1;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let day = g_day_no as u32 + 1;
    Some(GregorianDate { year, month, day })
}
