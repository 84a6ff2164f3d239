//! Validated Gregorian date within 1800..=2199.

use tracing::trace;

use crate::calculator::{validate_day, validate_month};
use crate::error::ValidationError;
use crate::keys::{century_key, is_leap, month_key, year_terms};
use crate::month::Month;
use crate::weekday::Weekday;

/// A date whose year, month and day have passed range validation.
///
/// The day is only checked against 1..=31 here; month-length checks are
/// applied by [`WeekdayCalculator`](crate::WeekdayCalculator) under
/// [`DayPolicy::Strict`](crate::DayPolicy::Strict).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    year: i32,
    month: Month,
    day: u8,
    century_key: u32,
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl Date {
    /// Creates a new `Date` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns the first failing check, in the order year, month, day.
    pub fn new(year: i32, month: i32, day: i32) -> Result<Self, ValidationError> {
        let century = century_key(year).ok_or(ValidationError::YearOutOfRange(year))?;
        let month = validate_month(month)?;
        let day = validate_day(day)?;
        Ok(Self {
            year,
            month,
            day,
            century_key: century,
        })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month.
    pub fn month(self) -> Month {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `true` if the date's year is a Gregorian leap year.
    pub fn is_leap_year(self) -> bool {
        is_leap(self.year)
    }

    /// Computes the day of the week with the century/year/month congruence.
    pub fn weekday(self) -> Weekday {
        let (yy, yy4) = year_terms(self.year);
        let month_key = month_key(self.month, is_leap(self.year));
        let sum = (yy + yy4 + month_key + self.century_key + u32::from(self.day)) % 7;
        trace!(
            year = self.year,
            month = self.month.number(),
            day = self.day,
            century_key = self.century_key,
            yy,
            yy4,
            month_key,
            sum,
            "congruence terms"
        );
        Weekday::ALL[sum as usize]
    }
}
