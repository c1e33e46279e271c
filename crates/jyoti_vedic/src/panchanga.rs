//! The five limbs of the day: tithi, vaar, nakshatra, yoga, karana.
//!
//! The element math is pure arithmetic on sidereal longitudes; the combined
//! [`panchanga_at`] queries the Sun and Moon once and derives everything
//! from those two longitudes. The nakshatra's start and end instants come
//! from a bisection on the Moon's longitude.

use jyoti_time::{vaar_from_jd, LocalMoment, Vaar};

use jyoti_ephem::{Body, EphemerisContext, EphemerisProvider};

use crate::error::VedicError;
use crate::nakshatra::{nakshatra_from_longitude, Nakshatra, NAKSHATRA_SPAN_DEG};
use crate::util::{normalize_360, signed_delta_deg};

/// Angular width of one tithi: 12 deg of Moon-Sun elongation.
pub const TITHI_SPAN_DEG: f64 = 12.0;

/// Angular width of one karana: half a tithi.
pub const KARANA_SPAN_DEG: f64 = 6.0;

/// Angular width of one yoga: 13 deg 20 min of the Sun+Moon sum.
pub const YOGA_SPAN_DEG: f64 = 360.0 / 27.0;

/// Search half-window for nakshatra boundaries, days. The Moon covers one
/// mansion in at most ~1.13 days, so 1.2 always brackets both edges.
const BOUNDARY_SEARCH_DAYS: f64 = 1.2;

/// Bisection iterations for boundary refinement.
const BISECTION_ITERS: u32 = 20;

/// Waxing or waning half of the lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    Shukla,
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Paksha::Shukla => "Shukla",
            Paksha::Krishna => "Krishna",
        }
    }
}

/// Names of the 15 tithis within a paksha.
const TITHI_NAMES: [&str; 15] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Purnima", // Amavasya in the Krishna paksha
];

/// Names of the 27 yogas.
const YOGA_NAMES: [&str; 27] = [
    "Vishkambha",
    "Priti",
    "Ayushman",
    "Saubhagya",
    "Shobhana",
    "Atiganda",
    "Sukarman",
    "Dhriti",
    "Shula",
    "Ganda",
    "Vriddhi",
    "Dhruva",
    "Vyaghata",
    "Harshana",
    "Vajra",
    "Siddhi",
    "Vyatipata",
    "Variyan",
    "Parigha",
    "Shiva",
    "Siddha",
    "Sadhya",
    "Shubha",
    "Shukla",
    "Brahma",
    "Indra",
    "Vaidhriti",
];

/// The seven repeating (chara) karanas.
const CHARA_KARANA_NAMES: [&str; 7] = [
    "Bava", "Balava", "Kaulava", "Taitila", "Gara", "Vanija", "Vishti",
];

/// Tithi at an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiInfo {
    /// Index in 0..=29 over the full month.
    pub index: u8,
    pub paksha: Paksha,
    /// Elongation already traversed within this tithi, [0, 1).
    pub fraction: f64,
}

impl TithiInfo {
    pub fn name(&self) -> &'static str {
        if self.index == 29 {
            "Amavasya"
        } else {
            TITHI_NAMES[self.index as usize % 15]
        }
    }
}

/// Yoga at an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YogaInfo {
    /// Index in 0..=26.
    pub index: u8,
    pub fraction: f64,
}

impl YogaInfo {
    pub fn name(&self) -> &'static str {
        YOGA_NAMES[self.index as usize]
    }
}

/// Karana at an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaranaInfo {
    /// Index in 0..=59 over the full month.
    pub index: u8,
    pub fraction: f64,
}

impl KaranaInfo {
    /// The four fixed karanas hold the month's ends; the seven chara
    /// karanas repeat eight times in between.
    pub fn name(&self) -> &'static str {
        match self.index {
            0 => "Kimstughna",
            57 => "Shakuni",
            58 => "Chatushpada",
            59 => "Naga",
            i => CHARA_KARANA_NAMES[(i as usize - 1) % 7],
        }
    }
}

/// Nakshatra at an instant, with its time span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// Quarter of the mansion, 1..=4.
    pub pada: u8,
    /// Longitude fraction of the mansion traversed, [0, 1).
    pub fraction: f64,
    /// Instant the Moon entered the mansion, JD UTC.
    pub start_jd: f64,
    /// Instant the Moon leaves it, JD UTC.
    pub end_jd: f64,
}

/// The combined five-element result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanchangaInfo {
    pub jd_utc: f64,
    pub tithi: TithiInfo,
    pub vaar: Vaar,
    pub nakshatra: NakshatraInfo,
    pub yoga: YogaInfo,
    pub karana: KaranaInfo,
    /// Sidereal longitudes the elements were derived from.
    pub sun_lon_deg: f64,
    pub moon_lon_deg: f64,
}

/// Tithi from the Moon-Sun elongation in degrees.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiInfo {
    let elo = normalize_360(elongation_deg);
    let index = ((elo / TITHI_SPAN_DEG) as u8).min(29);
    let paksha = if index < 15 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    };
    TithiInfo {
        index,
        paksha,
        fraction: elo / TITHI_SPAN_DEG - index as f64,
    }
}

/// Yoga from the sum of the Moon's and Sun's sidereal longitudes.
pub fn yoga_from_sum(sum_deg: f64) -> YogaInfo {
    let sum = normalize_360(sum_deg);
    let index = ((sum / YOGA_SPAN_DEG) as u8).min(26);
    YogaInfo {
        index,
        fraction: sum / YOGA_SPAN_DEG - index as f64,
    }
}

/// Karana from the Moon-Sun elongation in degrees.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaInfo {
    let elo = normalize_360(elongation_deg);
    let index = ((elo / KARANA_SPAN_DEG) as u8).min(59);
    KaranaInfo {
        index,
        fraction: elo / KARANA_SPAN_DEG - index as f64,
    }
}

/// Instant at which the Moon's sidereal longitude crosses `target_deg`,
/// bracketed between `jd_before` (longitude behind the target) and
/// `jd_after` (at or past it).
fn bisect_moon_crossing(
    provider: &impl EphemerisProvider,
    ctx: &EphemerisContext,
    target_deg: f64,
    mut jd_before: f64,
    mut jd_after: f64,
) -> Result<f64, VedicError> {
    for _ in 0..BISECTION_ITERS {
        let mid = 0.5 * (jd_before + jd_after);
        let lon = provider.sidereal_longitude_deg(Body::Chandra, mid, ctx)?;
        if signed_delta_deg(lon, target_deg) < 0.0 {
            jd_before = mid;
        } else {
            jd_after = mid;
        }
    }
    Ok(0.5 * (jd_before + jd_after))
}

/// Start and end instants of the mansion the Moon occupies at `jd_utc`.
///
/// `moon_lon_deg` must be the Moon's sidereal longitude at `jd_utc` (it is
/// passed in so the combined derivation queries the Moon once).
pub fn nakshatra_span(
    provider: &impl EphemerisProvider,
    ctx: &EphemerisContext,
    jd_utc: f64,
    moon_lon_deg: f64,
) -> Result<(f64, f64), VedicError> {
    let (nak, _, _) = nakshatra_from_longitude(moon_lon_deg);
    let start_deg = nak.start_deg();
    let end_deg = normalize_360(start_deg + NAKSHATRA_SPAN_DEG);

    let early = jd_utc - BOUNDARY_SEARCH_DAYS;
    let early_lon = provider.sidereal_longitude_deg(Body::Chandra, early, ctx)?;
    if signed_delta_deg(early_lon, start_deg) >= 0.0 {
        return Err(VedicError::NoConvergence(
            "mansion entry not bracketed in the search window",
        ));
    }
    let start_jd = bisect_moon_crossing(provider, ctx, start_deg, early, jd_utc)?;

    let late = jd_utc + BOUNDARY_SEARCH_DAYS;
    let late_lon = provider.sidereal_longitude_deg(Body::Chandra, late, ctx)?;
    if signed_delta_deg(late_lon, end_deg) < 0.0 {
        return Err(VedicError::NoConvergence(
            "mansion exit not bracketed in the search window",
        ));
    }
    let end_jd = bisect_moon_crossing(provider, ctx, end_deg, jd_utc, late)?;

    Ok((start_jd, end_jd))
}

/// All five elements at a civil moment.
pub fn panchanga_at(
    provider: &impl EphemerisProvider,
    moment: &LocalMoment,
    ctx: &EphemerisContext,
) -> Result<PanchangaInfo, VedicError> {
    let jd_utc = moment.to_jd_utc();
    let sun = provider.sidereal_longitude_deg(Body::Surya, jd_utc, ctx)?;
    let moon = provider.sidereal_longitude_deg(Body::Chandra, jd_utc, ctx)?;

    let elongation = normalize_360(moon - sun);
    let (nakshatra, pada, fraction) = nakshatra_from_longitude(moon);
    let (start_jd, end_jd) = nakshatra_span(provider, ctx, jd_utc, moon)?;

    Ok(PanchangaInfo {
        jd_utc,
        tithi: tithi_from_elongation(elongation),
        vaar: vaar_from_jd(moment.to_jd_local()),
        nakshatra: NakshatraInfo {
            nakshatra,
            pada,
            fraction,
            start_jd,
            end_jd,
        },
        yoga: yoga_from_sum(sun + moon),
        karana: karana_from_elongation(elongation),
        sun_lon_deg: sun,
        moon_lon_deg: moon,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyoti_ephem::AnalyticEphemeris;

    #[test]
    fn tithi_boundaries() {
        assert_eq!(tithi_from_elongation(0.0).index, 0);
        assert_eq!(tithi_from_elongation(11.999).index, 0);
        assert_eq!(tithi_from_elongation(12.0).index, 1);
        assert_eq!(tithi_from_elongation(359.999).index, 29);
        assert_eq!(tithi_from_elongation(360.0).index, 0);
    }

    #[test]
    fn tithi_paksha_split() {
        let shukla = tithi_from_elongation(100.0);
        assert_eq!(shukla.paksha, Paksha::Shukla);
        let krishna = tithi_from_elongation(200.0);
        assert_eq!(krishna.paksha, Paksha::Krishna);
    }

    #[test]
    fn tithi_names_at_month_ends() {
        assert_eq!(tithi_from_elongation(170.0).name(), "Purnima");
        assert_eq!(tithi_from_elongation(350.0).name(), "Amavasya");
        assert_eq!(tithi_from_elongation(1.0).name(), "Pratipada");
        assert_eq!(tithi_from_elongation(181.0).name(), "Pratipada");
    }

    #[test]
    fn yoga_boundaries() {
        assert_eq!(yoga_from_sum(0.0).index, 0);
        assert_eq!(yoga_from_sum(0.0).name(), "Vishkambha");
        assert_eq!(yoga_from_sum(359.9).index, 26);
        assert_eq!(yoga_from_sum(359.9).name(), "Vaidhriti");
    }

    #[test]
    fn karana_fixed_and_repeating() {
        assert_eq!(karana_from_elongation(3.0).name(), "Kimstughna");
        assert_eq!(karana_from_elongation(7.0).name(), "Bava");
        assert_eq!(karana_from_elongation(13.0).name(), "Balava");
        // Vishti recurs every 7 from index 7
        assert_eq!(karana_from_elongation(43.0).index, 7);
        assert_eq!(karana_from_elongation(43.0).name(), "Vishti");
        assert_eq!(karana_from_elongation(343.0).name(), "Shakuni");
        assert_eq!(karana_from_elongation(349.0).name(), "Chatushpada");
        assert_eq!(karana_from_elongation(355.0).name(), "Naga");
    }

    #[test]
    fn karana_pairs_with_tithi() {
        // Two karanas per tithi
        for elo in [5.0, 77.0, 154.0, 271.0, 333.0] {
            let t = tithi_from_elongation(elo);
            let k = karana_from_elongation(elo);
            assert_eq!(k.index / 2, t.index, "elongation {elo}");
        }
    }

    #[test]
    fn span_brackets_instant() {
        let eph = AnalyticEphemeris::new();
        let ctx = EphemerisContext::default();
        let m = LocalMoment::new(2014, 3, 7, 21, 15, 0.0, 5.5).unwrap();
        let jd = m.to_jd_utc();
        let moon = eph
            .sidereal_longitude_deg(Body::Chandra, jd, &ctx)
            .unwrap();
        let (start, end) = nakshatra_span(&eph, &ctx, jd, moon).unwrap();
        assert!(start < jd && jd < end);
        // One mansion takes the Moon roughly a day
        let len = end - start;
        assert!((0.85..1.15).contains(&len), "span {len} days");
        // The Moon's longitude at the start instant is the mansion's edge
        let lon_at_start = eph
            .sidereal_longitude_deg(Body::Chandra, start, &ctx)
            .unwrap();
        let (nak, _, _) = nakshatra_from_longitude(moon);
        assert!(
            signed_delta_deg(lon_at_start, nak.start_deg()).abs() < 0.001,
            "start edge off by {}",
            signed_delta_deg(lon_at_start, nak.start_deg())
        );
    }

    #[test]
    fn combined_is_consistent() {
        let eph = AnalyticEphemeris::new();
        let ctx = EphemerisContext::default();
        let m = LocalMoment::new(2014, 3, 7, 21, 15, 0.0, 5.5).unwrap();
        let p = panchanga_at(&eph, &m, &ctx).unwrap();
        assert_eq!(p.vaar, Vaar::Shukravaar); // 2014-03-07 was a Friday
        assert_eq!(p.karana.index / 2, p.tithi.index);
        let elo = normalize_360(p.moon_lon_deg - p.sun_lon_deg);
        assert_eq!(tithi_from_elongation(elo).index, p.tithi.index);
        assert!(p.nakshatra.start_jd < p.jd_utc && p.jd_utc < p.nakshatra.end_jd);
    }
}
