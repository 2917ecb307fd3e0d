//! Calendar date and wall-clock time to Julian Day.
//!
//! The clock time is taken as given: no timezone conversion is performed.

use crate::error::ChartError;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_HOUR: u32 = 12;
pub const DEFAULT_MINUTE: u32 = 0;

/// A validated birth date with its (possibly defaulted) clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub time_unknown: bool,
}

impl CivilTime {
    /// Build from raw birth data. Unknown or omitted times fall back to noon.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: Option<u32>,
        minute: Option<u32>,
        time_unknown: bool,
    ) -> Result<Self, ChartError> {
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(ChartError::InvalidDate { year, month, day });
        }
        let (hour, minute) = if time_unknown {
            (DEFAULT_HOUR, DEFAULT_MINUTE)
        } else {
            (hour.unwrap_or(DEFAULT_HOUR), minute.unwrap_or(DEFAULT_MINUTE))
        };
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            time_unknown,
        })
    }

    pub fn decimal_hour(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0
    }

    /// Julian Day (UT) of this civil time.
    pub fn julian_day(&self) -> f64 {
        julian_day(self.year, self.month, self.day, self.decimal_hour())
    }

    /// The birth moment as a UTC instant. Fails when the clock time is out of range.
    pub fn instant(&self) -> Result<DateTime<Utc>, ChartError> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|date| date.and_hms_opt(self.hour, self.minute, 0))
            .map(|naive| Utc.from_utc_datetime(&naive))
            .ok_or_else(|| {
                ChartError::DashaInput(format!(
                    "{:04}-{:02}-{:02} {:02}:{:02}",
                    self.year, self.month, self.day, self.hour, self.minute
                ))
            })
    }
}

/// Gregorian calendar date plus decimal hour to Julian Day (Meeus, ch. 7).
pub fn julian_day(year: i32, month: u32, day: u32, hour: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor()
        + (30.6001 * (m as f64 + 1.0)).floor()
        + day as f64
        + b
        - 1524.5
        + hour / 24.0
}
