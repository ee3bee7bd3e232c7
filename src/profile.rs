//! Whole-day sampling of the solar position.

use chrono::{Datelike, NaiveDate};

use crate::error::{Error, Result};
use crate::position::SolarPositionCalculator;
use crate::types::{CivilDateTime, DayProfile, ProfileEntry};

pub const MINUTES_PER_DAY: u32 = 1440;

pub fn minutes_to_time(total_minutes: u32) -> (u32, u32) {
    (total_minutes / 60, total_minutes % 60)
}

/// Number of samples per day, or an error unless `interval_minutes`
/// divides a day evenly.
pub fn intervals_per_day(interval_minutes: u32) -> Result<u32> {
    if interval_minutes == 0 || MINUTES_PER_DAY % interval_minutes != 0 {
        return Err(Error::InvalidInterval(interval_minutes));
    }
    Ok(MINUTES_PER_DAY / interval_minutes)
}

/// Samples `date` every `interval_minutes`, starting at midnight.
pub fn day_profile(
    calculator: &SolarPositionCalculator,
    date: NaiveDate,
    interval_minutes: u32,
) -> Result<DayProfile> {
    let n_intervals = intervals_per_day(interval_minutes)?;
    let mut entries = Vec::with_capacity(n_intervals as usize);
    for interval in 0..n_intervals {
        let minutes = interval * interval_minutes;
        let (hour, minute) = minutes_to_time(minutes);
        let dt = CivilDateTime::new(date.year(), date.month(), date.day(), hour, minute, 0)?;
        entries.push(ProfileEntry {
            minutes,
            position: calculator.compute(&dt),
        });
    }
    Ok(DayProfile {
        date,
        interval_minutes,
        entries,
    })
}

impl DayProfile {
    /// Sample with the highest elevation.
    pub fn peak(&self) -> Option<&ProfileEntry> {
        self.entries.iter().max_by(|a, b| {
            a.position
                .elevation_deg
                .total_cmp(&b.position.elevation_deg)
        })
    }

    /// First and last sample (minutes after midnight) with the sun above
    /// the horizon, or `None` if it never rises.
    pub fn daylight_span(&self) -> Option<(u32, u32)> {
        let mut above = self
            .entries
            .iter()
            .filter(|e| e.position.elevation_deg > 0.0)
            .map(|e| e.minutes);
        let first = above.next()?;
        Some((first, above.last().unwrap_or(first)))
    }

    /// Sum of irradiance over the samples, in Wh/m².
    pub fn clear_sky_insolation(&self) -> f64 {
        let hours = self.interval_minutes as f64 / 60.0;
        self.entries
            .iter()
            .map(|e| e.position.irradiance_wm2 * hours)
            .sum()
    }
}
