//! Time foundations: Julian Dates, civil moments, weekdays, sidereal time.
//!
//! This crate provides:
//! - Julian Date <-> calendar conversion
//! - [`LocalMoment`]: civil date/time with a fixed UTC offset
//! - [`Vaar`]: the canonical Sunday-first weekday
//! - ERA / GMST / LST for hour-angle work

pub mod error;
pub mod julian;
pub mod moment;
pub mod sidereal;
pub mod vaar;

pub use error::TimeError;
pub use julian::{
    calendar_to_jd, jd_to_calendar, jd_to_centuries, DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY,
};
pub use moment::LocalMoment;
pub use sidereal::{earth_rotation_angle_rad, gmst_rad, local_sidereal_time_rad};
pub use vaar::{vaar_from_jd, Vaar, ALL_VAARS};
