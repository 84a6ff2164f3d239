//! Error types for the semana-weekday crate.

/// Error type for all fallible operations in the semana-weekday crate.
///
/// Each variant carries the rejected input so the caller can echo it back
/// to the user. Validation stops at the first failure, checked in the
/// order year, month, day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Returned when the year is outside the supported range 1800..=2199.
    #[error("year out of range: {0} (must be 1800..=2199)")]
    YearOutOfRange(i32),

    /// Returned when the month number is outside 1..=12.
    #[error("month out of range: {0} (must be 1..=12)")]
    MonthOutOfRange(i32),

    /// Returned when the day number is outside 1..=31.
    #[error("day out of range: {0} (must be 1..=31)")]
    DayOutOfRange(i32),

    /// Returned under [`DayPolicy::Strict`](crate::DayPolicy::Strict) when
    /// the day is past the end of the given month.
    #[error("day {day} does not exist in month {month} (max {max_day})")]
    DayExceedsMonth {
        /// The rejected day number.
        day: u8,
        /// The month the day was checked against.
        month: u8,
        /// The length of that month in the given year.
        max_day: u8,
    },
}
