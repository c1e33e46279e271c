//! Error type for time and calendar handling.

use std::fmt;

/// Errors produced while building or converting time values.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Calendar fields do not name a real Gregorian date.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Clock fields out of range (hour > 23, minute > 59, second >= 60).
    InvalidClock { hour: u32, minute: u32, second: f64 },
    /// UTC offset outside the +/-14 h range of real time zones.
    InvalidUtcOffset { hours: f64 },
    /// Weekday index outside 0..=6.
    InvalidVaarIndex { index: usize },
}

impl fmt::Display for TimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeError::InvalidDate { year, month, day } => {
                write!(f, "invalid calendar date {year:04}-{month:02}-{day:02}")
            }
            TimeError::InvalidClock {
                hour,
                minute,
                second,
            } => {
                write!(f, "invalid clock time {hour:02}:{minute:02}:{second:06.3}")
            }
            TimeError::InvalidUtcOffset { hours } => {
                write!(f, "UTC offset {hours} h outside -14..=+14")
            }
            TimeError::InvalidVaarIndex { index } => {
                write!(f, "weekday index {index} outside 0..=6")
            }
        }
    }
}

impl std::error::Error for TimeError {}
