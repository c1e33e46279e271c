//! Error types for Vedic calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use jyoti_ephem::EphemerisError;
use jyoti_time::TimeError;

/// Errors from Vedic core calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// Error from the ephemeris provider.
    Ephemeris(EphemerisError),
    /// Error from time/calendar handling.
    Time(TimeError),
    /// No horizon crossing in the search window (polar day or night).
    HorizonEventNotFound(&'static str),
    /// Divisional chart code not among the supported schemes.
    InvalidDivisionScheme(u16),
    /// Query instant outside the span a calculation covers.
    OutOfRange(&'static str),
    /// Iterative search could not bracket its target.
    NoConvergence(&'static str),
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::HorizonEventNotFound(msg) => write!(f, "horizon event not found: {msg}"),
            Self::InvalidDivisionScheme(code) => {
                write!(f, "D{code} is not a supported divisional chart")
            }
            Self::OutOfRange(msg) => write!(f, "out of range: {msg}"),
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
        }
    }
}

impl Error for VedicError {}

impl From<EphemerisError> for VedicError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}

impl From<TimeError> for VedicError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
