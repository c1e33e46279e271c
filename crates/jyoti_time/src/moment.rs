//! Civil moments: calendar date, wall-clock time, and a fixed UTC offset.
//!
//! A [`LocalMoment`] is the input form every user-facing calculation starts
//! from. It converts to a plain UTC Julian Date; UT1 and TDB corrections are
//! below the accuracy of the analytic ephemeris and are not modeled.

use std::fmt;

use crate::error::TimeError;
use crate::julian::calendar_to_jd;

/// A civil date and time with a fixed offset from UTC, e.g. `+5.5` for IST.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalMoment {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
    /// Hours east of UTC. India is `5.5`, UTC itself is `0.0`.
    pub utc_offset_hours: f64,
}

impl LocalMoment {
    /// Build a moment, validating the calendar and clock fields.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        utc_offset_hours: f64,
    ) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDate { year, month, day });
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDate { year, month, day });
        }
        if hour > 23 || minute > 59 || !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidClock {
                hour,
                minute,
                second,
            });
        }
        if !(-14.0..=14.0).contains(&utc_offset_hours) {
            return Err(TimeError::InvalidUtcOffset {
                hours: utc_offset_hours,
            });
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_hours,
        })
    }

    /// Fraction of the local day elapsed since local midnight, in [0, 1).
    pub fn day_fraction(&self) -> f64 {
        (self.hour as f64 + self.minute as f64 / 60.0 + self.second / 3600.0) / 24.0
    }

    /// Julian Date of this moment in local time.
    ///
    /// Useful where the civil day matters (weekday, day-of-birth windows).
    pub fn to_jd_local(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64 + self.day_fraction())
    }

    /// Julian Date of this moment in UTC.
    pub fn to_jd_utc(&self) -> f64 {
        self.to_jd_local() - self.utc_offset_hours / 24.0
    }
}

impl fmt::Display for LocalMoment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.utc_offset_hours < 0.0 { '-' } else { '+' };
        let off = self.utc_offset_hours.abs();
        let off_h = off.trunc() as u32;
        let off_m = ((off - off.trunc()) * 60.0).round() as u32;
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:06.3} UTC{}{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second, sign, off_h,
            off_m
        )
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ist_moment_to_utc_jd() {
        // 1997-05-24 14:43 IST = 09:13 UT
        let m = LocalMoment::new(1997, 5, 24, 14, 43, 0.0, 5.5).unwrap();
        let jd = m.to_jd_utc();
        let expected = 2_450_592.5 + (9.0 + 13.0 / 60.0) / 24.0;
        assert!((jd - expected).abs() < 1e-9, "got {jd}");
    }

    #[test]
    fn local_vs_utc_offset() {
        // One ulp at JD magnitude is ~5e-10 days, so compare at the
        // millisecond level rather than bit-exact
        let m = LocalMoment::new(2020, 1, 1, 0, 0, 0.0, 5.5).unwrap();
        assert!((m.to_jd_local() - m.to_jd_utc() - 5.5 / 24.0).abs() < 1e-8);
    }

    #[test]
    fn rejects_bad_month() {
        assert!(LocalMoment::new(2020, 13, 1, 0, 0, 0.0, 0.0).is_err());
        assert!(LocalMoment::new(2020, 0, 1, 0, 0, 0.0, 0.0).is_err());
    }

    #[test]
    fn rejects_bad_day() {
        assert!(LocalMoment::new(2021, 2, 29, 0, 0, 0.0, 0.0).is_err());
        assert!(LocalMoment::new(2020, 2, 29, 0, 0, 0.0, 0.0).is_ok());
        assert!(LocalMoment::new(2000, 2, 29, 0, 0, 0.0, 0.0).is_ok());
        assert!(LocalMoment::new(1900, 2, 29, 0, 0, 0.0, 0.0).is_err());
    }

    #[test]
    fn rejects_bad_clock() {
        assert!(LocalMoment::new(2020, 1, 1, 24, 0, 0.0, 0.0).is_err());
        assert!(LocalMoment::new(2020, 1, 1, 0, 60, 0.0, 0.0).is_err());
        assert!(LocalMoment::new(2020, 1, 1, 0, 0, 60.0, 0.0).is_err());
    }

    #[test]
    fn rejects_bad_offset() {
        assert!(LocalMoment::new(2020, 1, 1, 0, 0, 0.0, 15.0).is_err());
        assert!(LocalMoment::new(2020, 1, 1, 0, 0, 0.0, -15.0).is_err());
    }

    #[test]
    fn display_format() {
        let m = LocalMoment::new(1997, 5, 24, 14, 43, 0.0, 5.5).unwrap();
        assert_eq!(m.to_string(), "1997-05-24 14:43:00.000 UTC+05:30");
    }
}
