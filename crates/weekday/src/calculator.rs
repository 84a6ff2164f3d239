//! Input validation and the weekday calculator.

use tracing::debug;

use crate::date::Date;
use crate::error::ValidationError;
use crate::keys::century_key;
use crate::month::{Month, days_in_month};
use crate::weekday::Weekday;

/// How the day of the month is validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DayPolicy {
    /// Accept any day in 1..=31 regardless of month (April 31 is allowed).
    #[default]
    Permissive,
    /// Additionally reject days past the end of the month, honouring
    /// February 29 in leap years.
    Strict,
}

/// Checks that `year` lies in 1800..=2199.
///
/// # Errors
///
/// Returns [`ValidationError::YearOutOfRange`] otherwise.
pub fn validate_year(year: i32) -> Result<i32, ValidationError> {
    century_key(year)
        .map(|_| year)
        .ok_or(ValidationError::YearOutOfRange(year))
}

/// Checks that `month` lies in 1..=12.
///
/// # Errors
///
/// Returns [`ValidationError::MonthOutOfRange`] otherwise.
pub fn validate_month(month: i32) -> Result<Month, ValidationError> {
    Month::new(month)
}

/// Checks that `day` lies in 1..=31.
///
/// # Errors
///
/// Returns [`ValidationError::DayOutOfRange`] otherwise.
pub fn validate_day(day: i32) -> Result<u8, ValidationError> {
    if !(1..=31).contains(&day) {
        return Err(ValidationError::DayOutOfRange(day));
    }
    Ok(day as u8)
}

/// Computes the weekday of a date with the default permissive policy.
///
/// # Errors
///
/// Returns the first failing range check, in the order year, month, day.
///
/// # Example
///
/// ```
/// use semana_weekday::{Weekday, compute};
///
/// assert_eq!(compute(2000, 1, 1).unwrap(), Weekday::Saturday);
/// ```
pub fn compute(year: i32, month: i32, day: i32) -> Result<Weekday, ValidationError> {
    WeekdayCalculator::new().compute(year, month, day)
}

/// Weekday calculator for Gregorian dates in 1800..=2199.
///
/// Use the builder methods to customise validation.
///
/// # Example
///
/// ```
/// use semana_weekday::{DayPolicy, ValidationError, WeekdayCalculator};
///
/// let strict = WeekdayCalculator::new().with_day_policy(DayPolicy::Strict);
/// assert!(matches!(
///     strict.compute(2023, 4, 31),
///     Err(ValidationError::DayExceedsMonth { .. })
/// ));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekdayCalculator {
    day_policy: DayPolicy,
}

impl WeekdayCalculator {
    /// Creates a calculator with [`DayPolicy::Permissive`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the day validation policy.
    pub fn with_day_policy(mut self, day_policy: DayPolicy) -> Self {
        self.day_policy = day_policy;
        self
    }

    /// Returns the day validation policy.
    pub fn day_policy(&self) -> DayPolicy {
        self.day_policy
    }

    /// Validates the inputs under this calculator's policy.
    ///
    /// # Errors
    ///
    /// Returns the first failing check, in the order year, month, day.
    /// Under [`DayPolicy::Strict`] a day beyond the month's length yields
    /// [`ValidationError::DayExceedsMonth`] once the range checks pass.
    pub fn date(&self, year: i32, month: i32, day: i32) -> Result<Date, ValidationError> {
        let date = Date::new(year, month, day)?;
        if self.day_policy == DayPolicy::Strict {
            let max_day = days_in_month(year, date.month());
            if date.day() > max_day {
                return Err(ValidationError::DayExceedsMonth {
                    day: date.day(),
                    month: date.month().number(),
                    max_day,
                });
            }
        }
        Ok(date)
    }

    /// Computes the weekday of the given date.
    ///
    /// # Errors
    ///
    /// See [`WeekdayCalculator::date`].
    pub fn compute(&self, year: i32, month: i32, day: i32) -> Result<Weekday, ValidationError> {
        let weekday = self.date(year, month, day)?.weekday();
        debug!(year, month, day, %weekday, "weekday computed");
        Ok(weekday)
    }
}
