use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;

use crate::error::{check_range, Error, Result};

/// Fixed site the calculator was first deployed at: Carbondale, IL.
pub const CARBONDALE_LATITUDE: f64 = 37.7272;
pub const CARBONDALE_LONGITUDE: f64 = -89.2168;

/// Where the sun is observed from, and the two UTC offsets the local
/// clock switches between (standard time and daylight saving time).
///
/// Only [`ObserverLocation::new`] builds one, so every instance holds
/// finite, in-range values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObserverLocation {
    latitude_deg: f64,
    longitude_deg: f64,
    standard_utc_offset_hours: i32,
    daylight_utc_offset_hours: i32,
}

impl ObserverLocation {
    /// Creates a validated location.
    ///
    /// Latitude must lie in [-90, 90], longitude in [-180, 180] and both
    /// offsets in [-12, 14] hours.
    pub fn new(
        latitude_deg: f64,
        longitude_deg: f64,
        standard_utc_offset_hours: i32,
        daylight_utc_offset_hours: i32,
    ) -> Result<Self> {
        check_range("latitude", latitude_deg, 90.0)?;
        check_range("longitude", longitude_deg, 180.0)?;
        for (field, offset) in [
            ("standard UTC offset", standard_utc_offset_hours),
            ("daylight UTC offset", daylight_utc_offset_hours),
        ] {
            if !(-12..=14).contains(&offset) {
                return Err(Error::invalid_input(field, offset as f64));
            }
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
            standard_utc_offset_hours,
            daylight_utc_offset_hours,
        })
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    pub fn standard_utc_offset_hours(&self) -> i32 {
        self.standard_utc_offset_hours
    }

    pub fn daylight_utc_offset_hours(&self) -> i32 {
        self.daylight_utc_offset_hours
    }
}

impl Default for ObserverLocation {
    fn default() -> Self {
        Self {
            latitude_deg: CARBONDALE_LATITUDE,
            longitude_deg: CARBONDALE_LONGITUDE,
            standard_utc_offset_hours: -6,
            daylight_utc_offset_hours: -5,
        }
    }
}

/// Local civil date and time at the observer, to the second.
///
/// Only [`CivilDateTime::new`] builds one, so the date always exists in
/// the Gregorian calendar and the time is a valid time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CivilDateTime {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
}

impl CivilDateTime {
    /// Creates a date/time, rejecting anything that is not a real
    /// Gregorian date in year 1 or later, or not a time of day.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self> {
        if year < 1 || NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(Error::InvalidDate { year, month, day });
        }
        if NaiveTime::from_hms_opt(hour, minute, second).is_none() {
            return Err(Error::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)?
            .and_hms_opt(self.hour, self.minute, self.second)
    }
}

impl TryFrom<NaiveDateTime> for CivilDateTime {
    type Error = Error;

    fn try_from(dt: NaiveDateTime) -> Result<Self> {
        // chrono encodes leap seconds as second 59 with extra nanoseconds
        Self::new(
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second(),
        )
    }
}

/// Intermediate angles of one calculation, all in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarAngles {
    pub gamma: f64,
    pub declination: f64,
    pub hour_angle: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarPositionResult {
    /// Degrees above the horizon, negative at night.
    pub elevation_deg: f64,
    /// Degrees clockwise from true North, in [0, 360).
    pub azimuth_deg: f64,
    /// Haurwitz clear-sky estimate, W/m².
    pub irradiance_wm2: f64,
    /// UTC offset (hours) the local time was interpreted with.
    pub utc_offset_hours: i32,
}

/// One sample of a [`DayProfile`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileEntry {
    pub minutes: u32,
    pub position: SolarPositionResult,
}

/// Solar positions sampled over one civil day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayProfile {
    pub date: NaiveDate,
    pub interval_minutes: u32,
    pub entries: Vec<ProfileEntry>,
}
