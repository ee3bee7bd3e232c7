//! Solar geometry after the NOAA general solar position approximations.
//!
//! Declination and the equation of time are Fourier series in the
//! fractional year. They are good to roughly 0.5° for years 1901-2099 and
//! keep evaluating, with growing error, outside that range.

use std::f64::consts::PI;

/// Minutes of time per degree of hour angle.
pub const MINUTES_PER_DEGREE: f64 = 4.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

/// Reduces an angle in degrees to [0, 360).
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Fractional year `gamma` in radians. The year is taken to be 365 days
/// long even in leap years.
pub fn fractional_year_angle(day_of_year: u32, hour: u32) -> f64 {
    2.0 * PI / 365.0 * (day_of_year as f64 - 1.0 + (hour as f64 - 12.0) / 24.0)
}

/// Solar declination in radians.
pub fn solar_declination(gamma: f64) -> f64 {
    0.006918 - 0.399912 * gamma.cos() + 0.070257 * gamma.sin()
        - 0.006758 * (2.0 * gamma).cos()
        + 0.000907 * (2.0 * gamma).sin()
        - 0.002697 * (3.0 * gamma).cos()
        + 0.00148 * (3.0 * gamma).sin()
}

/// Equation of time in minutes.
pub fn equation_of_time(gamma: f64) -> f64 {
    229.18
        * (0.000075 + 0.001868 * gamma.cos()
            - 0.032077 * gamma.sin()
            - 0.014615 * (2.0 * gamma).cos()
            - 0.040849 * (2.0 * gamma).sin())
}

/// Hour angle in radians: zero at solar noon, negative in the morning.
pub fn hour_angle(
    gamma: f64,
    longitude_deg: f64,
    hour: u32,
    minute: u32,
    second: u32,
    utc_offset_hours: i32,
) -> f64 {
    let time_offset = equation_of_time(gamma) + MINUTES_PER_DEGREE * longitude_deg
        - 60.0 * utc_offset_hours as f64;
    let true_solar_time =
        hour as f64 * 60.0 + minute as f64 + second as f64 / 60.0 + time_offset;
    deg_to_rad(true_solar_time / MINUTES_PER_DEGREE - 180.0)
}

/// Elevation above the horizon in degrees, from radian inputs.
pub fn solar_elevation(latitude_rad: f64, declination: f64, hour_angle: f64) -> f64 {
    let sin_elevation = latitude_rad.sin() * declination.sin()
        + latitude_rad.cos() * declination.cos() * hour_angle.cos();
    rad_to_deg(sin_elevation.clamp(-1.0, 1.0).asin())
}

/// Azimuth in degrees clockwise from North, in [0, 360).
pub fn solar_azimuth(latitude_rad: f64, declination: f64, hour_angle: f64) -> f64 {
    let az_rad = hour_angle.sin().atan2(
        hour_angle.cos() * latitude_rad.sin() - declination.tan() * latitude_rad.cos(),
    );
    normalize_angle(rad_to_deg(az_rad) + 180.0)
}
