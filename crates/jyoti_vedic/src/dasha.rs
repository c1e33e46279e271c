//! Vimshottari dasha: the 120-year planetary period cycle.
//!
//! The cycle assigns each of the nine grahas a fixed number of years. The
//! starting lord comes from the Moon's natal nakshatra, and the first
//! Mahadasha is shortened by the fraction of the mansion already traversed
//! at birth. Every other period, at every level, is the plain proportional
//! division: child = parent * weight / 120, children cycling from the
//! parent's own lord.
//!
//! Years convert to days at exactly 365.25; calendar-year anniversaries
//! drift slightly against this fixed convention.

use jyoti_ephem::Body;

use crate::error::VedicError;
use crate::nakshatra::nakshatra_from_longitude;

/// Lord cycle, starting from Ketu (the lord of Ashwini).
pub const DASHA_LORDS: [Body; 9] = [
    Body::Ketu,
    Body::Shukra,
    Body::Surya,
    Body::Chandra,
    Body::Mangal,
    Body::Rahu,
    Body::Guru,
    Body::Shani,
    Body::Buddh,
];

/// Years allotted to each lord, same order as [`DASHA_LORDS`]. Sum: 120.
pub const DASHA_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Length of the full cycle in years.
pub const TOTAL_YEARS: f64 = 120.0;

/// Fixed year length for the dasha time axis.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Nesting depth of a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DashaLevel {
    Mahadasha,
    Antardasha,
    Pratyantardasha,
    Sookshmadasha,
}

impl DashaLevel {
    pub const fn name(self) -> &'static str {
        match self {
            DashaLevel::Mahadasha => "Mahadasha",
            DashaLevel::Antardasha => "Antardasha",
            DashaLevel::Pratyantardasha => "Pratyantardasha",
            DashaLevel::Sookshmadasha => "Sookshmadasha",
        }
    }

    /// Depth with Mahadasha = 1.
    pub const fn depth(self) -> u8 {
        self as u8 + 1
    }

    /// The next deeper level, if any.
    pub const fn deeper(self) -> Option<Self> {
        match self {
            DashaLevel::Mahadasha => Some(DashaLevel::Antardasha),
            DashaLevel::Antardasha => Some(DashaLevel::Pratyantardasha),
            DashaLevel::Pratyantardasha => Some(DashaLevel::Sookshmadasha),
            DashaLevel::Sookshmadasha => None,
        }
    }
}

/// One period at some level of the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashaPeriod {
    pub graha: Body,
    /// JD UTC.
    pub start_jd: f64,
    /// JD UTC; periods are half-open `[start, end)`.
    pub end_jd: f64,
    pub level: DashaLevel,
    /// Position among siblings, 0..=8 (0..=8 within the cycle for level 1).
    pub order: usize,
    /// Index of the parent in the previous level's vector, if any.
    pub parent_idx: Option<usize>,
}

impl DashaPeriod {
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    pub fn contains(&self, jd: f64) -> bool {
        self.start_jd <= jd && jd < self.end_jd
    }
}

/// The materialized tree, one vector per level.
#[derive(Debug, Clone, PartialEq)]
pub struct DashaHierarchy {
    pub birth_jd: f64,
    pub levels: Vec<Vec<DashaPeriod>>,
}

/// Position of a graha in the lord cycle.
fn cycle_index(graha: Body) -> usize {
    DASHA_LORDS
        .iter()
        .position(|&g| g == graha)
        .unwrap_or_default()
}

/// Starting lord index and remaining fraction of its period at birth.
pub fn dasha_balance(moon_lon_deg: f64) -> (usize, f64) {
    let (nak, _, fraction) = nakshatra_from_longitude(moon_lon_deg);
    (nak.index() % 9, 1.0 - fraction)
}

/// The nine Mahadashas from birth.
///
/// The first is the balance of the natal lord's period; the rest run full
/// length in cycle order.
pub fn vimshottari_mahadashas(birth_jd: f64, moon_lon_deg: f64) -> Vec<DashaPeriod> {
    let (start_lord, balance) = dasha_balance(moon_lon_deg);

    let mut periods = Vec::with_capacity(9);
    let mut start = birth_jd;
    for order in 0..9 {
        let idx = (start_lord + order) % 9;
        let years = if order == 0 {
            DASHA_YEARS[idx] * balance
        } else {
            DASHA_YEARS[idx]
        };
        let end = start + years * DAYS_PER_YEAR;
        periods.push(DashaPeriod {
            graha: DASHA_LORDS[idx],
            start_jd: start,
            end_jd: end,
            level: DashaLevel::Mahadasha,
            order,
            parent_idx: None,
        });
        start = end;
    }
    periods
}

/// The nine sub-periods of a parent, cycling from the parent's own lord.
///
/// The last child's end is snapped to the parent's end so the children
/// partition the parent exactly despite float accumulation.
pub fn vimshottari_children(parent: &DashaPeriod, parent_idx: usize) -> Vec<DashaPeriod> {
    let level = match parent.level.deeper() {
        Some(l) => l,
        None => return Vec::new(),
    };
    let first = cycle_index(parent.graha);
    let parent_days = parent.duration_days();

    let mut children = Vec::with_capacity(9);
    let mut start = parent.start_jd;
    for order in 0..9 {
        let idx = (first + order) % 9;
        let end = if order == 8 {
            parent.end_jd
        } else {
            start + parent_days * DASHA_YEARS[idx] / TOTAL_YEARS
        };
        children.push(DashaPeriod {
            graha: DASHA_LORDS[idx],
            start_jd: start,
            end_jd: end,
            level,
            order,
            parent_idx: Some(parent_idx),
        });
        start = end;
    }
    children
}

/// Materialize the tree down to `max_level`.
pub fn vimshottari_hierarchy(
    birth_jd: f64,
    moon_lon_deg: f64,
    max_level: DashaLevel,
) -> DashaHierarchy {
    let mut levels = vec![vimshottari_mahadashas(birth_jd, moon_lon_deg)];
    let mut level = DashaLevel::Mahadasha;
    while level < max_level {
        let prev = levels.last().map(Vec::as_slice).unwrap_or(&[]);
        let mut next = Vec::with_capacity(prev.len() * 9);
        for (idx, parent) in prev.iter().enumerate() {
            next.extend(vimshottari_children(parent, idx));
        }
        levels.push(next);
        level = match level.deeper() {
            Some(l) => l,
            None => break,
        };
    }
    DashaHierarchy { birth_jd, levels }
}

/// The chain of periods active at `query_jd`, outermost first, without
/// materializing the whole tree.
pub fn vimshottari_snapshot(
    birth_jd: f64,
    moon_lon_deg: f64,
    query_jd: f64,
    max_level: DashaLevel,
) -> Result<Vec<DashaPeriod>, VedicError> {
    let mahas = vimshottari_mahadashas(birth_jd, moon_lon_deg);
    let (mut active_idx, active) = mahas
        .iter()
        .enumerate()
        .find(|(_, p)| p.contains(query_jd))
        .ok_or(VedicError::OutOfRange(
            "query instant outside the dasha cycle from birth",
        ))?;
    let mut active = *active;

    let mut chain = vec![active];
    while active.level < max_level {
        let children = vimshottari_children(&active, active_idx);
        let child = match children.iter().find(|p| p.contains(query_jd)) {
            Some(c) => *c,
            // query == parent.end_jd can slip every child's half-open span
            None => match children.last() {
                Some(c) => *c,
                None => break,
            },
        };
        chain.push(child);
        // position in the fully materialized level: 9 children per parent
        active_idx = active_idx * 9 + child.order;
        active = child;
    }
    Ok(chain)
}
