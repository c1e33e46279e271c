//! Error type for ephemeris providers.

use std::fmt;

use crate::provider::Body;

/// Errors produced by an ephemeris provider.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The provider has no model for the requested body.
    UnsupportedBody { body: Body },
    /// The requested instant falls outside the provider's valid span.
    EpochOutOfRange { jd_utc: f64 },
    /// Provider-specific failure (kernel I/O, backend fault, ...).
    Provider { message: String },
}

impl fmt::Display for EphemerisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EphemerisError::UnsupportedBody { body } => {
                write!(f, "ephemeris has no model for {}", body.name())
            }
            EphemerisError::EpochOutOfRange { jd_utc } => {
                write!(f, "JD {jd_utc} outside the ephemeris' valid span")
            }
            EphemerisError::Provider { message } => {
                write!(f, "ephemeris provider error: {message}")
            }
        }
    }
}

impl std::error::Error for EphemerisError {}
