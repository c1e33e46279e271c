//! Vaar: the Vedic weekday.
//!
//! One canonical ordering is used everywhere: Ravivaar (Sunday) = 0 through
//! Shanivaar (Saturday) = 6. Tables keyed by weekday (the Mandi ghati table
//! in particular) are stored in this order.

use crate::error::TimeError;

/// Weekday, Sunday-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vaar {
    Ravivaar,
    Somvaar,
    Mangalvaar,
    Budhvaar,
    Guruvaar,
    Shukravaar,
    Shanivaar,
}

/// All seven weekdays in canonical order.
pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivaar,
    Vaar::Somvaar,
    Vaar::Mangalvaar,
    Vaar::Budhvaar,
    Vaar::Guruvaar,
    Vaar::Shukravaar,
    Vaar::Shanivaar,
];

impl Vaar {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Vaar::Ravivaar => "Ravivaar",
            Vaar::Somvaar => "Somvaar",
            Vaar::Mangalvaar => "Mangalvaar",
            Vaar::Budhvaar => "Budhvaar",
            Vaar::Guruvaar => "Guruvaar",
            Vaar::Shukravaar => "Shukravaar",
            Vaar::Shanivaar => "Shanivaar",
        }
    }

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Vaar::Ravivaar => "Sunday",
            Vaar::Somvaar => "Monday",
            Vaar::Mangalvaar => "Tuesday",
            Vaar::Budhvaar => "Wednesday",
            Vaar::Guruvaar => "Thursday",
            Vaar::Shukravaar => "Friday",
            Vaar::Shanivaar => "Saturday",
        }
    }

    /// Index in canonical order (Ravivaar = 0).
    pub const fn index(self) -> usize {
        match self {
            Vaar::Ravivaar => 0,
            Vaar::Somvaar => 1,
            Vaar::Mangalvaar => 2,
            Vaar::Budhvaar => 3,
            Vaar::Guruvaar => 4,
            Vaar::Shukravaar => 5,
            Vaar::Shanivaar => 6,
        }
    }

    /// Inverse of [`Vaar::index`].
    pub const fn from_index(index: usize) -> Result<Self, TimeError> {
        match index {
            0 => Ok(Vaar::Ravivaar),
            1 => Ok(Vaar::Somvaar),
            2 => Ok(Vaar::Mangalvaar),
            3 => Ok(Vaar::Budhvaar),
            4 => Ok(Vaar::Guruvaar),
            5 => Ok(Vaar::Shukravaar),
            6 => Ok(Vaar::Shanivaar),
            _ => Err(TimeError::InvalidVaarIndex { index }),
        }
    }

    /// The previous civil day's weekday.
    pub const fn previous(self) -> Self {
        match Self::from_index((self.index() + 6) % 7) {
            Ok(v) => v,
            Err(_) => unreachable!(),
        }
    }
}

/// Weekday of the civil day containing a Julian Date.
///
/// Pass a *local-time* JD to get the civil weekday at the observer's
/// location; a UTC JD gives the Greenwich weekday. The JD day boundary sits
/// at noon, so `floor(jd + 0.5)` recovers the midnight-to-midnight day
/// number. JD 0 fell on a Monday, hence the `+ 1` to land Sunday on 0.
pub fn vaar_from_jd(jd: f64) -> Vaar {
    let day = (jd + 0.5).floor() as i64;
    let index = (day + 1).rem_euclid(7) as usize;
    match Vaar::from_index(index) {
        Ok(v) => v,
        Err(_) => unreachable!(),
    }
}
