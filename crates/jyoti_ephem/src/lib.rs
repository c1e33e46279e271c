//! Ephemeris access for the jyoti workspace.
//!
//! This crate provides:
//! - The [`EphemerisProvider`] trait: the seam between position sources
//!   and everything downstream
//! - [`EphemerisContext`]: immutable sidereal configuration (ayanamsha)
//! - Ayanamsha values for five sidereal reference systems
//! - [`AnalyticEphemeris`]: a built-in Sun/Moon/node provider so the
//!   workspace runs without external kernel files

pub mod analytic;
pub mod ayanamsha;
pub mod error;
pub mod provider;

pub use analytic::{ecliptic_to_equatorial, mean_obliquity_deg, AnalyticEphemeris};
pub use ayanamsha::{ayanamsha_deg, general_precession_longitude_deg, AyanamshaSystem};
pub use error::EphemerisError;
pub use provider::{Body, Ecliptic, EphemerisContext, EphemerisProvider, Equatorial, ALL_BODIES};
