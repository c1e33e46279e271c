//! Built-in analytic ephemeris: truncated Meeus series for the Sun and
//! Moon, and the mean lunar node for Rahu/Ketu.
//!
//! Accuracy is roughly 0.01 deg for the Sun and 0.1 deg for the Moon over
//! the modern era, which holds nakshatra and tithi boundaries to within a
//! couple of minutes of time. Bodies without a built-in model return
//! [`EphemerisError::UnsupportedBody`]; plug in a richer provider for the
//! five tara grahas.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapters 22, 25, 47.

use jyoti_time::jd_to_centuries;

use crate::error::EphemerisError;
use crate::provider::{Body, Ecliptic, EphemerisProvider, Equatorial};

/// Mean obliquity of the ecliptic, degrees (IAU linear fit).
pub fn mean_obliquity_deg(t_centuries: f64) -> f64 {
    23.439_291_11 - 0.013_004_2 * t_centuries
}

/// Ecliptic (lon, lat in degrees) to equatorial (RA, Dec in radians).
pub fn ecliptic_to_equatorial(ecl: Ecliptic, obliquity_deg: f64) -> Equatorial {
    let lam = ecl.lon_deg.to_radians();
    let beta = ecl.lat_deg.to_radians();
    let eps = obliquity_deg.to_radians();

    let ra = (lam.sin() * eps.cos() - beta.tan() * eps.sin()).atan2(lam.cos());
    let dec = (beta.sin() * eps.cos() + beta.cos() * eps.sin() * lam.sin()).asin();

    Equatorial {
        ra_rad: ra.rem_euclid(std::f64::consts::TAU),
        dec_rad: dec,
    }
}

/// Apparent geocentric longitude of the Sun, degrees (Meeus Ch. 25).
fn sun_longitude_deg(t: f64) -> f64 {
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let m = (357.52911 + 35999.05029 * t - 0.0001537 * t * t).to_radians();

    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();

    // Aberration and nutation via the low-precision apparent correction
    let omega = (125.04 - 1934.136 * t).to_radians();
    (l0 + c - 0.00569 - 0.00478 * omega.sin()).rem_euclid(360.0)
}

/// Geocentric longitude and latitude of the Moon, degrees (Meeus Ch. 47,
/// truncated to the terms above ~0.01 deg).
fn moon_position_deg(t: f64) -> (f64, f64) {
    let lp = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t * t;
    let d = (297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t * t).to_radians();
    let m = (357.529_109_2 + 35_999.050_290_9 * t).to_radians();
    let mp = (134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t * t).to_radians();
    let f = (93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t * t).to_radians();

    let lon = lp
        + 6.288_774 * mp.sin()
        + 1.274_027 * (2.0 * d - mp).sin()
        + 0.658_314 * (2.0 * d).sin()
        + 0.213_618 * (2.0 * mp).sin()
        - 0.185_116 * m.sin()
        - 0.114_332 * (2.0 * f).sin()
        + 0.058_793 * (2.0 * d - 2.0 * mp).sin()
        + 0.057_066 * (2.0 * d - m - mp).sin()
        + 0.053_322 * (2.0 * d + mp).sin()
        + 0.045_758 * (2.0 * d - m).sin()
        - 0.040_923 * (m - mp).sin()
        - 0.034_720 * d.sin()
        - 0.030_383 * (m + mp).sin()
        + 0.015_327 * (2.0 * d - 2.0 * f).sin()
        - 0.012_528 * (mp + 2.0 * f).sin()
        + 0.010_980 * (mp - 2.0 * f).sin();

    let lat = 5.128_122 * f.sin()
        + 0.280_602 * (mp + f).sin()
        + 0.277_693 * (mp - f).sin()
        + 0.173_237 * (2.0 * d - f).sin()
        + 0.055_413 * (2.0 * d - mp + f).sin()
        + 0.046_271 * (2.0 * d - mp - f).sin();

    (lon.rem_euclid(360.0), lat)
}

/// Mean longitude of the ascending lunar node, degrees.
fn mean_node_deg(t: f64) -> f64 {
    (125.044_547_9 - 1934.136_289_1 * t + 0.002_075_4 * t * t).rem_euclid(360.0)
}

/// The built-in Sun/Moon/node provider. Stateless and `Copy`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    pub const fn new() -> Self {
        Self
    }
}

impl EphemerisProvider for AnalyticEphemeris {
    fn ecliptic(&self, body: Body, jd_utc: f64) -> Result<Ecliptic, EphemerisError> {
        let t = jd_to_centuries(jd_utc);
        match body {
            Body::Surya => Ok(Ecliptic {
                lon_deg: sun_longitude_deg(t),
                lat_deg: 0.0,
            }),
            Body::Chandra => {
                let (lon, lat) = moon_position_deg(t);
                Ok(Ecliptic {
                    lon_deg: lon,
                    lat_deg: lat,
                })
            }
            Body::Rahu => Ok(Ecliptic {
                lon_deg: mean_node_deg(t),
                lat_deg: 0.0,
            }),
            Body::Ketu => Ok(Ecliptic {
                lon_deg: (mean_node_deg(t) + 180.0).rem_euclid(360.0),
                lat_deg: 0.0,
            }),
            _ => Err(EphemerisError::UnsupportedBody { body }),
        }
    }

    fn equatorial(&self, body: Body, jd_utc: f64) -> Result<Equatorial, EphemerisError> {
        let ecl = self.ecliptic(body, jd_utc)?;
        let eps = mean_obliquity_deg(jd_to_centuries(jd_utc));
        Ok(ecliptic_to_equatorial(ecl, eps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyoti_time::{calendar_to_jd, J2000_JD};

    const EPH: AnalyticEphemeris = AnalyticEphemeris::new();

    #[test]
    fn sun_at_j2000() {
        // Tropical solar longitude at J2000.0 is ~280.0 deg
        let ecl = EPH.ecliptic(Body::Surya, J2000_JD).unwrap();
        assert!((ecl.lon_deg - 280.0).abs() < 0.5, "got {}", ecl.lon_deg);
        assert_eq!(ecl.lat_deg, 0.0);
    }

    #[test]
    fn sun_at_equinox() {
        // 2000 Mar 20 07:35 UT was the equinox: longitude ~0
        let jd = calendar_to_jd(2000, 3, 20.0 + 7.583 / 24.0);
        let ecl = EPH.ecliptic(Body::Surya, jd).unwrap();
        let dist = ecl.lon_deg.min(360.0 - ecl.lon_deg);
        assert!(dist < 0.1, "longitude {} deg at equinox", ecl.lon_deg);
    }

    #[test]
    fn moon_meeus_example_47a() {
        // 1992 Apr 12.0 TD: lon 133.162655, lat -3.229126 (full series).
        // The truncated series should land within ~0.01 deg.
        let jd = calendar_to_jd(1992, 4, 12.0);
        let ecl = EPH.ecliptic(Body::Chandra, jd).unwrap();
        assert!((ecl.lon_deg - 133.162).abs() < 0.1, "lon {}", ecl.lon_deg);
        assert!((ecl.lat_deg + 3.229).abs() < 0.1, "lat {}", ecl.lat_deg);
    }

    #[test]
    fn moon_moves_fast() {
        // ~13.2 deg per day
        let jd = calendar_to_jd(2010, 6, 1.0);
        let a = EPH.ecliptic(Body::Chandra, jd).unwrap().lon_deg;
        let b = EPH.ecliptic(Body::Chandra, jd + 1.0).unwrap().lon_deg;
        let step = (b - a).rem_euclid(360.0);
        assert!((11.0..15.5).contains(&step), "daily motion {step}");
    }

    #[test]
    fn nodes_oppose() {
        let jd = calendar_to_jd(2015, 9, 1.0);
        let rahu = EPH.ecliptic(Body::Rahu, jd).unwrap().lon_deg;
        let ketu = EPH.ecliptic(Body::Ketu, jd).unwrap().lon_deg;
        assert!(((rahu - ketu).rem_euclid(360.0) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn node_retrogrades() {
        let jd = calendar_to_jd(2015, 9, 1.0);
        let a = EPH.ecliptic(Body::Rahu, jd).unwrap().lon_deg;
        let b = EPH.ecliptic(Body::Rahu, jd + 10.0).unwrap().lon_deg;
        let motion = (b - a + 180.0).rem_euclid(360.0) - 180.0;
        assert!(motion < 0.0, "node should move backward, got {motion}");
        assert!((motion + 0.53).abs() < 0.05, "10-day motion {motion}");
    }

    #[test]
    fn planets_unsupported() {
        for body in [Body::Mangal, Body::Buddh, Body::Guru, Body::Shukra, Body::Shani] {
            let err = EPH.ecliptic(body, J2000_JD).unwrap_err();
            assert_eq!(err, EphemerisError::UnsupportedBody { body });
        }
    }

    #[test]
    fn equatorial_on_ecliptic_plane() {
        // A body at lon 0, lat 0 sits at RA 0, Dec 0
        let eq = ecliptic_to_equatorial(
            Ecliptic {
                lon_deg: 0.0,
                lat_deg: 0.0,
            },
            23.44,
        );
        assert!(eq.ra_rad.abs() < 1e-12);
        assert!(eq.dec_rad.abs() < 1e-12);
    }

    #[test]
    fn equatorial_at_solstice_point() {
        // lon 90 maps to RA 90, Dec = obliquity
        let eq = ecliptic_to_equatorial(
            Ecliptic {
                lon_deg: 90.0,
                lat_deg: 0.0,
            },
            23.44,
        );
        assert!((eq.ra_rad.to_degrees() - 90.0).abs() < 1e-9);
        assert!((eq.dec_rad.to_degrees() - 23.44).abs() < 1e-9);
    }

    #[test]
    fn obliquity_near_j2000() {
        let eps = mean_obliquity_deg(0.0);
        assert!((eps - 23.4393).abs() < 0.001);
    }
}
