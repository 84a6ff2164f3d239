//! # semana-weekday
//!
//! Day of the week for Gregorian dates in 1800..=2199, computed with a
//! table-based congruence instead of date arithmetic.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day)"] -->|"validate_year/month/day"| B["Date"]
//!     B -->|"century_key()"| C["century key"]
//!     B -->|"year % 100, / 4"| D["yy, yy4"]
//!     B -->|"month_key(month, is_leap())"| E["month key"]
//!     C --> F["sum mod 7"]
//!     D --> F
//!     E --> F
//!     F -->|"Weekday::ALL[sum]"| G["Weekday"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use semana_weekday::{DayPolicy, ValidationError, Weekday, WeekdayCalculator, compute};
//!
//! assert_eq!(compute(1999, 12, 31).unwrap(), Weekday::Friday);
//! assert_eq!(compute(1799, 1, 1), Err(ValidationError::YearOutOfRange(1799)));
//!
//! // April 31 is accepted unless the strict policy is requested.
//! assert!(compute(2023, 4, 31).is_ok());
//! let strict = WeekdayCalculator::new().with_day_policy(DayPolicy::Strict);
//! assert!(strict.compute(2023, 4, 31).is_err());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `calculator` | Input validation, day policy and the calculator |
//! | `keys` | Century and month key tables, leap-year rule |
//! | `date` | Validated date and the congruence itself |
//! | `month` | Month enum and Gregorian month lengths |
//! | `weekday` | Weekday enum in congruence order |
//! | `error` | Error types |

mod calculator;
mod date;
mod error;
mod keys;
mod month;
mod weekday;

pub use calculator::{
    DayPolicy, WeekdayCalculator, compute, validate_day, validate_month, validate_year,
};
pub use date::Date;
pub use error::ValidationError;
pub use keys::{century_key, is_leap, month_key};
pub use month::{Month, days_in_month};
pub use weekday::{ParseWeekdayError, Weekday};
