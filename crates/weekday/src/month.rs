//! Calendar months and Gregorian month lengths.

use crate::error::ValidationError;
use crate::keys::is_leap;

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

/// Number of days in each month of a common year (index 0 unused,
/// index 1 = January, ..., index 12 = December).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

impl Month {
    /// All twelve months, January first.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Creates a `Month` from its number.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MonthOutOfRange`] if `month` is not in 1..=12.
    pub fn new(month: i32) -> Result<Self, ValidationError> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::MonthOutOfRange(month));
        }
        Ok(Self::ALL[(month - 1) as usize])
    }

    /// Returns the month number (1..=12).
    pub fn number(self) -> u8 {
        self as u8
    }
}

impl TryFrom<i32> for Month {
    type Error = ValidationError;

    fn try_from(month: i32) -> Result<Self, Self::Error> {
        Self::new(month)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> u8 {
        month.number()
    }
}

/// Returns the length of `month` in `year` under the Gregorian rule
/// (February has 29 days in leap years).
pub fn days_in_month(year: i32, month: Month) -> u8 {
    match month {
        Month::February if is_leap(year) => 29,
        _ => DAYS_PER_MONTH[month.number() as usize],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        assert_eq!(Month::new(1).unwrap(), Month::January);
        assert_eq!(Month::new(12).unwrap(), Month::December);
    }

    #[test]
    fn new_invalid_zero() {
        assert_eq!(
            Month::new(0).unwrap_err(),
            ValidationError::MonthOutOfRange(0)
        );
    }

    #[test]
    fn new_invalid_13() {
        assert_eq!(
            Month::new(13).unwrap_err(),
            ValidationError::MonthOutOfRange(13)
        );
    }

    #[test]
    fn number_roundtrip() {
        for m in 1..=12i32 {
            assert_eq!(i32::from(Month::new(m).unwrap().number()), m);
        }
    }

    #[test]
    fn try_from_matches_new() {
        assert_eq!(Month::try_from(7), Month::new(7));
        assert_eq!(Month::try_from(-1), Month::new(-1));
    }

    #[test]
    fn february_length_follows_leap_rule() {
        assert_eq!(days_in_month(2000, Month::February), 29);
        assert_eq!(days_in_month(1900, Month::February), 28);
        assert_eq!(days_in_month(2004, Month::February), 29);
        assert_eq!(days_in_month(2100, Month::February), 28);
    }

    #[test]
    fn thirty_day_months() {
        for m in [Month::April, Month::June, Month::September, Month::November] {
            assert_eq!(days_in_month(2023, m), 30, "{m:?}");
        }
    }

    #[test]
    fn table_integrity_days_per_month() {
        let total: u16 = DAYS_PER_MONTH[1..=12].iter().copied().map(u16::from).sum();
        assert_eq!(total, 365);
    }

    #[test]
    fn leap_year_has_366_days() {
        let total: u16 = Month::ALL
            .iter()
            .map(|&m| u16::from(days_in_month(2024, m)))
            .sum();
        assert_eq!(total, 366);
    }
}
