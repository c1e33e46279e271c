//! Rashi: the twelve sidereal zodiac signs.

use crate::util::normalize_360;

/// Width of one rashi in degrees.
pub const RASHI_SPAN_DEG: f64 = 30.0;

/// The twelve signs, Mesha = 0 through Meena = 11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All twelve rashis in zodiacal order.
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Classical element of a rashi (repeats every four signs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Rashi {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Rashi::Mesha => "Mesha",
            Rashi::Vrishabha => "Vrishabha",
            Rashi::Mithuna => "Mithuna",
            Rashi::Karka => "Karka",
            Rashi::Simha => "Simha",
            Rashi::Kanya => "Kanya",
            Rashi::Tula => "Tula",
            Rashi::Vrischika => "Vrischika",
            Rashi::Dhanu => "Dhanu",
            Rashi::Makara => "Makara",
            Rashi::Kumbha => "Kumbha",
            Rashi::Meena => "Meena",
        }
    }

    /// Western name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Rashi::Mesha => "Aries",
            Rashi::Vrishabha => "Taurus",
            Rashi::Mithuna => "Gemini",
            Rashi::Karka => "Cancer",
            Rashi::Simha => "Leo",
            Rashi::Kanya => "Virgo",
            Rashi::Tula => "Libra",
            Rashi::Vrischika => "Scorpio",
            Rashi::Dhanu => "Sagittarius",
            Rashi::Makara => "Capricorn",
            Rashi::Kumbha => "Aquarius",
            Rashi::Meena => "Pisces",
        }
    }

    /// Index in zodiacal order, 0..=11.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Rashi from an index taken mod 12.
    pub const fn from_index(index: usize) -> Self {
        ALL_RASHIS[index % 12]
    }

    /// Element of this rashi.
    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    /// Odd sign in the traditional 1-based counting (Mesha is the 1st).
    pub const fn is_odd(self) -> bool {
        self.index() % 2 == 0
    }

    /// Ecliptic longitude of this rashi's start, degrees.
    pub const fn start_deg(self) -> f64 {
        self.index() as f64 * RASHI_SPAN_DEG
    }
}

/// Rashi occupied by a sidereal longitude.
pub fn rashi_from_longitude(lon_deg: f64) -> Rashi {
    let lon = normalize_360(lon_deg);
    Rashi::from_index((lon / RASHI_SPAN_DEG) as usize)
}

/// Degrees into the occupied rashi, [0, 30).
pub fn degrees_in_rashi(lon_deg: f64) -> f64 {
    normalize_360(lon_deg) % RASHI_SPAN_DEG
}
