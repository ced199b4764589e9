//! Gregorian and Jalaali (Solar Hijri) calendar dates and conversion.
//!
//! All arithmetic uses floor division (`div_euclid` / `rem_euclid`) so dates
//! before the 1600 reference point convert the same way as later ones.

mod gregorian;
mod jalaali;

pub use gregorian::{GregorianDate, days_in_month, is_leap_year};
pub use jalaali::{
    JalaaliDate, gregorian_to_jalaali, is_leap_jalaali_year, jalaali_month_length,
    jalaali_to_gregorian,
};
