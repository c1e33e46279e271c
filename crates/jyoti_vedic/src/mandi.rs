//! Mandi (Gulika) time and longitude.
//!
//! Mandi is an upagraha: not a body, but an instant within the day or night
//! window of the birth, fixed by a weekday-indexed ghati offset. The birth
//! falls in exactly one of three windows:
//!
//! - day: between the day's sunrise and sunset;
//! - night after sunset: between the day's sunset and the next sunrise;
//! - night before sunrise: between the previous sunset and the day's
//!   sunrise, which astrologically still belongs to the *previous* weekday.
//!
//! The Mandi instant is `window_start + span * ghati / 30`, and the Mandi
//! longitude is the sidereal ascendant at that instant.

use jyoti_time::{jd_to_calendar, vaar_from_jd, LocalMoment, Vaar};

use jyoti_ephem::{EphemerisContext, EphemerisProvider};

use crate::error::VedicError;
use crate::lagna::lagna_sidereal_deg;
use crate::riseset::{solar_day_for_date, GeoLocation};

/// Mandi ghati offsets for a day birth, indexed by [`Vaar`] (Sunday first).
pub const DAY_GHATI: [f64; 7] = [26.0, 22.0, 18.0, 14.0, 10.0, 6.0, 2.0];

/// Mandi ghati offsets for a night birth, indexed by [`Vaar`] (Sunday first).
pub const NIGHT_GHATI: [f64; 7] = [10.0, 6.0, 2.0, 26.0, 22.0, 18.0, 14.0];

/// Ghatis in a full day or night window.
const GHATIS_PER_WINDOW: f64 = 30.0;

/// Which window of the astrological day the birth fell in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BirthPeriod {
    Day,
    NightAfterSunset,
    NightBeforeSunrise,
}

/// Result of the Mandi computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandiResult {
    /// The Mandi instant, JD UTC.
    pub mandi_jd: f64,
    /// Sidereal ascendant longitude at the Mandi instant, degrees [0, 360).
    pub longitude_deg: f64,
    pub birth_period: BirthPeriod,
    /// Weekday whose ghati table applied (the previous day's for a
    /// pre-sunrise birth).
    pub vaar: Vaar,
    /// Window containing the birth, JD UTC.
    pub window_start_jd: f64,
    pub window_end_jd: f64,
}

/// Civil date one day away from a moment, keeping its clock and offset.
fn shifted_date(birth: &LocalMoment, days: f64) -> (i32, u32, u32) {
    let (y, m, d) = jd_to_calendar(birth.to_jd_local() + days);
    (y, m, d.trunc() as u32)
}

/// Compute Mandi for a birth moment at a location.
///
/// Needs the solar day of the birth date and, for night births, of the
/// adjacent date; any horizon-finder failure propagates.
pub fn compute_mandi(
    provider: &impl EphemerisProvider,
    location: &GeoLocation,
    birth: &LocalMoment,
    ctx: &EphemerisContext,
) -> Result<MandiResult, VedicError> {
    let birth_jd = birth.to_jd_utc();
    let offset = birth.utc_offset_hours;
    let today = solar_day_for_date(
        provider, location, birth.year, birth.month, birth.day, offset,
    )?;

    let today_vaar = vaar_from_jd(birth.to_jd_local());

    let (birth_period, vaar, window_start, window_end, ghati_table) =
        if birth_jd >= today.sunrise_jd && birth_jd < today.sunset_jd {
            (
                BirthPeriod::Day,
                today_vaar,
                today.sunrise_jd,
                today.sunset_jd,
                &DAY_GHATI,
            )
        } else if birth_jd >= today.sunset_jd {
            let (y, m, d) = shifted_date(birth, 1.0);
            let tomorrow = solar_day_for_date(provider, location, y, m, d, offset)?;
            (
                BirthPeriod::NightAfterSunset,
                today_vaar,
                today.sunset_jd,
                tomorrow.sunrise_jd,
                &NIGHT_GHATI,
            )
        } else {
            let (y, m, d) = shifted_date(birth, -1.0);
            let yesterday = solar_day_for_date(provider, location, y, m, d, offset)?;
            (
                BirthPeriod::NightBeforeSunrise,
                today_vaar.previous(),
                yesterday.sunset_jd,
                today.sunrise_jd,
                &NIGHT_GHATI,
            )
        };

    let ghati = ghati_table[vaar.index()];
    let mandi_jd = window_start + (window_end - window_start) * ghati / GHATIS_PER_WINDOW;
    let longitude_deg = lagna_sidereal_deg(location, mandi_jd, ctx);

    Ok(MandiResult {
        mandi_jd,
        longitude_deg,
        birth_period,
        vaar,
        window_start_jd: window_start,
        window_end_jd: window_end,
    })
}
