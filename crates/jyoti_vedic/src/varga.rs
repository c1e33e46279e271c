//! Varga (divisional chart) sign mapping.
//!
//! Each scheme maps a sidereal longitude to one of the twelve signs by
//! dividing the 30 deg of its natal sign into parts and dispatching each
//! part to a target sign. All schemes except D30 use equal parts; D30
//! (Trimshamsha) uses the classical unequal sub-arcs.

use crate::error::VedicError;
use crate::rashi::{degrees_in_rashi, rashi_from_longitude, Element, Rashi};
use crate::util::normalize_360;

/// Supported divisional charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Varga {
    /// Rashi: the natal sign itself.
    D1,
    /// Hora: halves.
    D2,
    /// Drekkana: thirds.
    D3,
    /// Navamsha: ninths.
    D9,
    /// Dwadashamsha: twelfths.
    D12,
    /// Trimshamsha: unequal five-way split.
    D30,
}

/// All supported schemes.
pub const ALL_VARGAS: [Varga; 6] = [
    Varga::D1,
    Varga::D2,
    Varga::D3,
    Varga::D9,
    Varga::D12,
    Varga::D30,
];

impl Varga {
    /// Numeric chart code (the `n` of `Dn`).
    pub const fn code(self) -> u16 {
        match self {
            Varga::D1 => 1,
            Varga::D2 => 2,
            Varga::D3 => 3,
            Varga::D9 => 9,
            Varga::D12 => 12,
            Varga::D30 => 30,
        }
    }

    /// Scheme from its chart code. Unsupported codes are an error, never a
    /// silent D1.
    pub const fn from_code(code: u16) -> Result<Self, VedicError> {
        match code {
            1 => Ok(Varga::D1),
            2 => Ok(Varga::D2),
            3 => Ok(Varga::D3),
            9 => Ok(Varga::D9),
            12 => Ok(Varga::D12),
            30 => Ok(Varga::D30),
            _ => Err(VedicError::InvalidDivisionScheme(code)),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Varga::D1 => "Rashi",
            Varga::D2 => "Hora",
            Varga::D3 => "Drekkana",
            Varga::D9 => "Navamsha",
            Varga::D12 => "Dwadashamsha",
            Varga::D30 => "Trimshamsha",
        }
    }
}

/// D30 sub-arcs for odd signs: breakpoints in degrees and target signs.
const D30_ODD: [(f64, Rashi); 5] = [
    (5.0, Rashi::Mesha),
    (10.0, Rashi::Kumbha),
    (18.0, Rashi::Dhanu),
    (25.0, Rashi::Mithuna),
    (30.0, Rashi::Tula),
];

/// D30 sub-arcs for even signs.
const D30_EVEN: [(f64, Rashi); 5] = [
    (5.0, Rashi::Vrishabha),
    (12.0, Rashi::Kanya),
    (20.0, Rashi::Meena),
    (25.0, Rashi::Makara),
    (30.0, Rashi::Vrischika),
];

/// Navamsha start sign for an element (fire, earth, air, water trines).
const fn navamsha_anchor(element: Element) -> Rashi {
    match element {
        Element::Fire => Rashi::Mesha,
        Element::Earth => Rashi::Makara,
        Element::Air => Rashi::Tula,
        Element::Water => Rashi::Karka,
    }
}

/// Sign occupied by a longitude in the given divisional chart.
pub fn varga_rashi(lon_deg: f64, varga: Varga) -> Rashi {
    let lon = normalize_360(lon_deg);
    let natal = rashi_from_longitude(lon);
    let into = degrees_in_rashi(lon);

    match varga {
        Varga::D1 => natal,
        Varga::D2 => {
            let part = (into / 15.0) as usize;
            Rashi::from_index(natal.index() * 2 + part)
        }
        Varga::D3 => {
            let part = (into / 10.0) as usize;
            Rashi::from_index(natal.index() + part * 4)
        }
        Varga::D9 => {
            let part = (into / (30.0 / 9.0)) as usize;
            Rashi::from_index(navamsha_anchor(natal.element()).index() + part)
        }
        Varga::D12 => {
            let part = (into / 2.5) as usize;
            Rashi::from_index(natal.index() + part)
        }
        Varga::D30 => {
            let table = if natal.is_odd() { &D30_ODD } else { &D30_EVEN };
            for &(limit, target) in table {
                if into < limit {
                    return target;
                }
            }
            // into < 30 always, so the loop returns; keep the compiler happy
            table[4].1
        }
    }
}

/// Sign index in 0..=11 for a longitude under a chart code.
pub fn sign_index(lon_deg: f64, code: u16) -> Result<u8, VedicError> {
    let varga = Varga::from_code(code)?;
    Ok(varga_rashi(lon_deg, varga).index() as u8)
}
