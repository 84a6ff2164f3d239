//! Offset tables for the congruence method.

use crate::month::Month;

/// Returns the century key for `year`, or `None` outside 1800..=2199.
///
/// | Years     | Key |
/// |-----------|-----|
/// | 1800–1899 | 2   |
/// | 1900–1999 | 0   |
/// | 2000–2099 | 6   |
/// | 2100–2199 | 4   |
pub fn century_key(year: i32) -> Option<u32> {
    match year {
        1800..=1899 => Some(2),
        1900..=1999 => Some(0),
        2000..=2099 => Some(6),
        2100..=2199 => Some(4),
        _ => None,
    }
}

/// Gregorian leap-year rule.
pub fn is_leap(year: i32) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

/// Returns the month key. Only January and February depend on `leap`.
pub fn month_key(month: Month, leap: bool) -> u32 {
    match month {
        Month::January if leap => 0,
        Month::January => 1,
        Month::February if leap => 3,
        Month::February => 4,
        Month::March => 4,
        Month::April => 0,
        Month::May => 2,
        Month::June => 5,
        Month::July => 0,
        Month::August => 3,
        Month::September => 6,
        Month::October => 1,
        Month::November => 4,
        Month::December => 6,
    }
}

/// Splits a year into `(yy, yy / 4)` where `yy` is the year within its
/// century.
pub(crate) fn year_terms(year: i32) -> (u32, u32) {
    let yy = year.rem_euclid(100) as u32;
    (yy, yy / 4)
}
