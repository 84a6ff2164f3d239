//! Day of the week in congruence order.

use std::fmt;
use std::str::FromStr;

/// Day of the week.
///
/// Discriminants follow the congruence encoding: the value of
/// `sum mod 7` maps directly to a variant, with Saturday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    /// Encoded as 0.
    Saturday = 0,
    /// Encoded as 1.
    Sunday = 1,
    /// Encoded as 2.
    Monday = 2,
    /// Encoded as 3.
    Tuesday = 3,
    /// Encoded as 4.
    Wednesday = 4,
    /// Encoded as 5.
    Thursday = 5,
    /// Encoded as 6.
    Friday = 6,
}

impl Weekday {
    /// All seven weekdays in encoding order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Saturday,
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Returns the weekday for a congruence residue, or `None` if
    /// `index >= 7`.
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Returns the congruence residue (0..=6).
    pub fn index(self) -> u32 {
        self as u32
    }

    /// The following day, wrapping Friday to Saturday.
    pub fn succ(self) -> Self {
        Self::ALL[(self.index() as usize + 1) % 7]
    }

    /// The preceding day, wrapping Saturday to Friday.
    pub fn pred(self) -> Self {
        Self::ALL[(self.index() as usize + 6) % 7]
    }

    /// English name of the day.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing a [`Weekday`] from an unknown name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown weekday name: {0:?}")]
pub struct ParseWeekdayError(String);

impl FromStr for Weekday {
    type Err = ParseWeekdayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|w| w.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseWeekdayError(s.to_string()))
    }
}
