//! Vedic computational core.
//!
//! This crate provides:
//! - sunrise/sunset by threshold crossing ([`riseset`])
//! - the ascendant ([`lagna`])
//! - Mandi/Gulika time and longitude ([`mandi`])
//! - divisional chart mapping ([`varga`])
//! - the five panchanga elements ([`panchanga`])
//! - the Vimshottari dasha tree ([`dasha`])
//!
//! All positions flow through the [`jyoti_ephem::EphemerisProvider`] seam;
//! pass [`jyoti_ephem::AnalyticEphemeris`] or any richer implementation.

pub mod dasha;
pub mod error;
pub mod lagna;
pub mod mandi;
pub mod nakshatra;
pub mod panchanga;
pub mod rashi;
pub mod riseset;
pub mod util;
pub mod varga;

pub use dasha::{
    vimshottari_children, vimshottari_hierarchy, vimshottari_mahadashas, vimshottari_snapshot,
    DashaHierarchy, DashaLevel, DashaPeriod, DASHA_LORDS, DASHA_YEARS, DAYS_PER_YEAR, TOTAL_YEARS,
};
pub use error::VedicError;
pub use lagna::{lagna_longitude_rad, lagna_sidereal_deg};
pub use mandi::{compute_mandi, BirthPeriod, MandiResult, DAY_GHATI, NIGHT_GHATI};
pub use nakshatra::{
    nakshatra_from_longitude, Nakshatra, ALL_NAKSHATRAS, NAKSHATRA_SPAN_DEG, PADA_SPAN_DEG,
};
pub use panchanga::{
    karana_from_elongation, nakshatra_span, panchanga_at, tithi_from_elongation, yoga_from_sum,
    KaranaInfo, NakshatraInfo, Paksha, PanchangaInfo, TithiInfo, YogaInfo,
};
pub use rashi::{degrees_in_rashi, rashi_from_longitude, Element, Rashi, ALL_RASHIS, RASHI_SPAN_DEG};
pub use riseset::{
    find_rise_set, solar_day_for_date, sun_altitude_deg, GeoLocation, SolarDay,
    HORIZON_DEPRESSION_DEG,
};
pub use util::normalize_360;
pub use varga::{sign_index, varga_rashi, Varga, ALL_VARGAS};
