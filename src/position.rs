use log::debug;

use crate::angles::{
    deg_to_rad, fractional_year_angle, hour_angle, solar_azimuth, solar_declination,
    solar_elevation,
};
use crate::calendar::day_of_year;
use crate::dst::{is_daylight_saving, utc_offset_hours, FIRST_RULE_YEAR};
use crate::irradiance::haurwitz_irradiance;
use crate::types::{CivilDateTime, ObserverLocation, SolarAngles, SolarPositionResult};

/// Years over which the declination and equation-of-time series hold
/// their stated accuracy.
pub const ACCURATE_YEARS: std::ops::RangeInclusive<i32> = 1901..=2099;

/// Gamma, declination and hour angle for a local time, given the UTC
/// offset in force at that time.
pub fn solar_angles(
    location: &ObserverLocation,
    dt: &CivilDateTime,
    utc_offset_hours: i32,
) -> SolarAngles {
    let doy = day_of_year(dt.year(), dt.month(), dt.day());
    let gamma = fractional_year_angle(doy, dt.hour());
    SolarAngles {
        gamma,
        declination: solar_declination(gamma),
        hour_angle: hour_angle(
            gamma,
            location.longitude_deg(),
            dt.hour(),
            dt.minute(),
            dt.second(),
            utc_offset_hours,
        ),
    }
}

/// Sun position and clear-sky irradiance at `dt`, local time at `location`.
pub fn compute_solar_position(
    location: &ObserverLocation,
    dt: &CivilDateTime,
) -> SolarPositionResult {
    if !ACCURATE_YEARS.contains(&dt.year()) {
        debug!("year {} outside 1901-2099, solar position is approximate", dt.year());
    }
    if dt.year() < FIRST_RULE_YEAR {
        debug!("year {} predates the 2007 U.S. DST rule", dt.year());
    }

    let is_dst = is_daylight_saving(dt.year(), dt.month(), dt.day(), dt.hour());
    let utc_offset = utc_offset_hours(location, is_dst);
    let angles = solar_angles(location, dt, utc_offset);
    debug!(
        "gamma={:.6} declination={:.6} hour_angle={:.6} dst={} offset={}",
        angles.gamma, angles.declination, angles.hour_angle, is_dst, utc_offset
    );

    let lat_rad = deg_to_rad(location.latitude_deg());
    let elevation = solar_elevation(lat_rad, angles.declination, angles.hour_angle);
    let azimuth = solar_azimuth(lat_rad, angles.declination, angles.hour_angle);
    SolarPositionResult {
        elevation_deg: elevation,
        azimuth_deg: azimuth,
        irradiance_wm2: haurwitz_irradiance(elevation),
        utc_offset_hours: utc_offset,
    }
}

/// A calculator bound to one observer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SolarPositionCalculator {
    location: ObserverLocation,
}

impl SolarPositionCalculator {
    pub fn new(location: ObserverLocation) -> Self {
        Self { location }
    }

    pub fn location(&self) -> &ObserverLocation {
        &self.location
    }

    pub fn compute(&self, dt: &CivilDateTime) -> SolarPositionResult {
        compute_solar_position(&self.location, dt)
    }
}
