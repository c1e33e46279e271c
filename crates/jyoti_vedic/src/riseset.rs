//! Sunrise and sunset by threshold crossing.
//!
//! The finder samples the Sun's altitude hourly across a 28 h span centered
//! on local noon, looks for crossings of the -0.8333 deg horizon threshold
//! (34' refraction + 16' semidiameter), and refines each crossing by
//! bisection with a fixed iteration count. At latitudes where a crossing
//! does not exist (polar day or night) it reports
//! [`VedicError::HorizonEventNotFound`]; there is no substitute window.

use jyoti_time::{calendar_to_jd, gmst_rad, local_sidereal_time_rad};

use jyoti_ephem::{Body, EphemerisProvider};

use crate::error::VedicError;

/// Depression of the Sun's center at rise/set: 50 arcmin.
pub const HORIZON_DEPRESSION_DEG: f64 = 50.0 / 60.0;

/// Bisection iterations; halving 1 h twenty times lands within ~3.4 ms.
const BISECTION_ITERS: u32 = 20;

/// Half-width of the sampling span around local noon, hours.
const SEARCH_HALF_SPAN_H: i32 = 14;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

/// Sunrise and sunset bounding one solar day, both JD UTC.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarDay {
    pub sunrise_jd: f64,
    pub sunset_jd: f64,
}

/// Geocentric altitude of the Sun in degrees.
///
/// `sin(alt) = sin(lat)sin(dec) + cos(lat)cos(dec)cos(HA)`, with the hour
/// angle taken from LST and the provider's RA.
pub fn sun_altitude_deg(
    provider: &impl EphemerisProvider,
    location: &GeoLocation,
    jd_utc: f64,
) -> Result<f64, VedicError> {
    let eq = provider.equatorial(Body::Surya, jd_utc)?;
    let lst = local_sidereal_time_rad(gmst_rad(jd_utc), location.longitude_rad());
    let ha = lst - eq.ra_rad;
    let phi = location.latitude_rad();

    let sin_alt = phi.sin() * eq.dec_rad.sin() + phi.cos() * eq.dec_rad.cos() * ha.cos();
    Ok(sin_alt.asin().to_degrees())
}

/// Sunrise and sunset around a given local-noon instant (JD UTC).
///
/// Sunrise is the rising crossing found before noon, sunset the falling
/// crossing after noon. Either being absent is an error.
pub fn find_rise_set(
    provider: &impl EphemerisProvider,
    location: &GeoLocation,
    jd_utc_noon: f64,
) -> Result<SolarDay, VedicError> {
    let f = |jd: f64| -> Result<f64, VedicError> {
        Ok(sun_altitude_deg(provider, location, jd)? + HORIZON_DEPRESSION_DEG)
    };

    let mut sunrise = None;
    for h in -SEARCH_HALF_SPAN_H..0 {
        let lo = jd_utc_noon + h as f64 / 24.0;
        let hi = lo + 1.0 / 24.0;
        if f(lo)? < 0.0 && f(hi)? >= 0.0 {
            sunrise = Some(bisect_rising(&f, lo, hi)?);
            break;
        }
    }
    let sunrise =
        sunrise.ok_or(VedicError::HorizonEventNotFound("no sunrise before local noon"))?;

    let mut sunset = None;
    for h in 0..SEARCH_HALF_SPAN_H {
        let lo = jd_utc_noon + h as f64 / 24.0;
        let hi = lo + 1.0 / 24.0;
        if f(lo)? >= 0.0 && f(hi)? < 0.0 {
            sunset = Some(bisect_falling(&f, lo, hi)?);
            break;
        }
    }
    let sunset =
        sunset.ok_or(VedicError::HorizonEventNotFound("no sunset after local noon"))?;

    Ok(SolarDay {
        sunrise_jd: sunrise,
        sunset_jd: sunset,
    })
}

/// Sunrise and sunset for a civil date at a location.
///
/// Local noon is taken as 12:00 in the fixed-offset zone; the returned
/// instants are JD UTC.
pub fn solar_day_for_date(
    provider: &impl EphemerisProvider,
    location: &GeoLocation,
    year: i32,
    month: u32,
    day: u32,
    utc_offset_hours: f64,
) -> Result<SolarDay, VedicError> {
    let jd_local_noon = calendar_to_jd(year, month, day as f64 + 0.5);
    find_rise_set(provider, location, jd_local_noon - utc_offset_hours / 24.0)
}

fn bisect_rising<F>(f: &F, mut lo: f64, mut hi: f64) -> Result<f64, VedicError>
where
    F: Fn(f64) -> Result<f64, VedicError>,
{
    // invariant: f(lo) < 0 <= f(hi)
    for _ in 0..BISECTION_ITERS {
        let mid = 0.5 * (lo + hi);
        if f(mid)? < 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Ok(0.5 * (lo + hi))
}

fn bisect_falling<F>(f: &F, mut lo: f64, mut hi: f64) -> Result<f64, VedicError>
where
    F: Fn(f64) -> Result<f64, VedicError>,
{
    // invariant: f(lo) >= 0 > f(hi)
    for _ in 0..BISECTION_ITERS {
        let mid = 0.5 * (lo + hi);
        if f(mid)? >= 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Ok(0.5 * (lo + hi))
}
