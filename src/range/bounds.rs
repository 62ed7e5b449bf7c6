use std::fmt::Debug;
use std::str::FromStr;

use num_traits::PrimInt;

use super::PointRange;
use crate::RangeError;

/// Largest integer a JSON number holds without losing precision
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// Inclusive window of values accepted as range input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueBounds<T> {
    pub min: T,
    pub max: T,
}

/// Question numbers start at 1
impl Default for ValueBounds<i64> {
    fn default() -> Self {
        Self {
            min: 1,
            max: MAX_SAFE_INTEGER,
        }
    }
}

impl<T: PrimInt + Debug> ValueBounds<T> {
    pub fn new(min: T, max: T) -> Result<Self, RangeError<T>> {
        if min > max {
            Err(RangeError::Reversed {
                start: min,
                end: max,
            })
        } else {
            Ok(Self { min, max })
        }
    }

    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn clamp(&self, value: T) -> T {
        value.max(self.min).min(self.max)
    }

    /// Number typed into an input box, clamped into the window.
    /// `None` for empty or non-numeric text.
    pub fn clamp_input(&self, text: &str) -> Option<T>
    where
        T: FromStr,
    {
        text.trim().parse::<T>().ok().map(|value| self.clamp(value))
    }

    pub fn check(&self, value: T) -> Result<T, RangeError<T>> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(RangeError::OutOfBounds {
                value,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Range from the start/end input pair. Equal bounds give a single point.
    pub fn span(&self, start: T, end: T) -> Result<PointRange<T>, RangeError<T>> {
        PointRange::span(self.check(start)?, self.check(end)?)
    }

    /// Values of a comma separated list like `1, 5, 8`.
    /// Entries that are not numbers or fall outside the window are skipped.
    pub fn parse_individual(&self, text: &str) -> Vec<T>
    where
        T: FromStr,
    {
        text.split(',')
            .filter_map(|part| part.trim().parse::<T>().ok())
            .filter(|value| self.contains(*value))
            .collect()
    }
}
