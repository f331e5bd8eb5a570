//! Puzzle coordinates

use crate::error::CoordinateError;
use std::fmt;

/// Days released per event; the all-days mode walks `1..=LAST_DAY`
pub const LAST_DAY: u8 = 25;

/// A (year, day) pair identifying one puzzle input
///
/// Both parts are kept exactly as given: `"01"` and `"1"` are different
/// coordinates with different cache paths and URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    year: String,
    day: String,
}

impl Coordinate {
    pub fn new(year: impl Into<String>, day: impl Into<String>) -> Result<Self, CoordinateError> {
        let (year, day) = (year.into(), day.into());
        if year.is_empty() {
            return Err(CoordinateError::EmptyYear);
        }
        if day.is_empty() {
            return Err(CoordinateError::EmptyDay);
        }
        Ok(Self { year, day })
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn day(&self) -> &str {
        &self.day
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "year {} day {}", self.year, self.day)
    }
}
