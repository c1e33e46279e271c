//! Lagna (Ascendant) computation.
//!
//! Standard spherical astronomy formula for the ecliptic longitude of the
//! rising point, from local sidereal time, obliquity, and latitude.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 13.

use std::f64::consts::TAU;

use jyoti_time::{gmst_rad, jd_to_centuries, local_sidereal_time_rad};

use jyoti_ephem::{mean_obliquity_deg, EphemerisContext};

use crate::riseset::GeoLocation;

/// Tropical ecliptic longitude of the Lagna in radians.
///
/// `Asc = atan2(-cos(LST), sin(LST)*cos(eps) + tan(phi)*sin(eps))`
///
/// Returns a value in [0, 2*pi).
pub fn lagna_longitude_rad(location: &GeoLocation, jd_utc: f64) -> f64 {
    let lst = local_sidereal_time_rad(gmst_rad(jd_utc), location.longitude_rad());
    let eps = mean_obliquity_deg(jd_to_centuries(jd_utc)).to_radians();
    let phi = location.latitude_rad();

    let asc = f64::atan2(-lst.cos(), lst.sin() * eps.cos() + phi.tan() * eps.sin());
    asc.rem_euclid(TAU)
}

/// Sidereal ecliptic longitude of the Lagna in degrees, [0, 360).
pub fn lagna_sidereal_deg(location: &GeoLocation, jd_utc: f64, ctx: &EphemerisContext) -> f64 {
    ctx.to_sidereal_deg(lagna_longitude_rad(location, jd_utc).to_degrees(), jd_utc)
}
