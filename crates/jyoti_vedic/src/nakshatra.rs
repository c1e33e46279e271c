//! Nakshatra: the 27 lunar mansions.

use crate::util::normalize_360;

/// Width of one nakshatra: 360/27 = 13 deg 20 min.
pub const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;

/// Width of one pada (quarter-nakshatra): 3 deg 20 min.
pub const PADA_SPAN_DEG: f64 = NAKSHATRA_SPAN_DEG / 4.0;

/// The 27 mansions, Ashwini = 0 through Revati = 26.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in zodiacal order.
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Nakshatra::Ashwini => "Ashwini",
            Nakshatra::Bharani => "Bharani",
            Nakshatra::Krittika => "Krittika",
            Nakshatra::Rohini => "Rohini",
            Nakshatra::Mrigashira => "Mrigashira",
            Nakshatra::Ardra => "Ardra",
            Nakshatra::Punarvasu => "Punarvasu",
            Nakshatra::Pushya => "Pushya",
            Nakshatra::Ashlesha => "Ashlesha",
            Nakshatra::Magha => "Magha",
            Nakshatra::PurvaPhalguni => "Purva Phalguni",
            Nakshatra::UttaraPhalguni => "Uttara Phalguni",
            Nakshatra::Hasta => "Hasta",
            Nakshatra::Chitra => "Chitra",
            Nakshatra::Swati => "Swati",
            Nakshatra::Vishakha => "Vishakha",
            Nakshatra::Anuradha => "Anuradha",
            Nakshatra::Jyeshtha => "Jyeshtha",
            Nakshatra::Mula => "Mula",
            Nakshatra::PurvaAshadha => "Purva Ashadha",
            Nakshatra::UttaraAshadha => "Uttara Ashadha",
            Nakshatra::Shravana => "Shravana",
            Nakshatra::Dhanishta => "Dhanishta",
            Nakshatra::Shatabhisha => "Shatabhisha",
            Nakshatra::PurvaBhadrapada => "Purva Bhadrapada",
            Nakshatra::UttaraBhadrapada => "Uttara Bhadrapada",
            Nakshatra::Revati => "Revati",
        }
    }

    /// Index in zodiacal order, 0..=26.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Nakshatra from an index taken mod 27.
    pub const fn from_index(index: usize) -> Self {
        ALL_NAKSHATRAS[index % 27]
    }

    /// Ecliptic longitude of this mansion's start, degrees.
    pub fn start_deg(self) -> f64 {
        self.index() as f64 * NAKSHATRA_SPAN_DEG
    }
}

/// Mansion occupied by a sidereal longitude, with the pada (1..=4) and the
/// fraction of the mansion already traversed in [0, 1).
pub fn nakshatra_from_longitude(lon_deg: f64) -> (Nakshatra, u8, f64) {
    let lon = normalize_360(lon_deg);
    let index = ((lon / NAKSHATRA_SPAN_DEG) as usize).min(26);
    let into = lon - index as f64 * NAKSHATRA_SPAN_DEG;
    let pada = ((into / PADA_SPAN_DEG) as u8).min(3) + 1;
    (Nakshatra::from_index(index), pada, into / NAKSHATRA_SPAN_DEG)
}
