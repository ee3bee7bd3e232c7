pub mod angles;
pub mod calendar;
pub mod config;
pub mod dst;
pub mod error;
pub mod irradiance;
pub mod position;
pub mod profile;
pub mod types;
pub mod wire;

pub use angles::{
    deg_to_rad, equation_of_time, fractional_year_angle, hour_angle, normalize_angle, rad_to_deg,
    solar_azimuth, solar_declination, solar_elevation, MINUTES_PER_DEGREE,
};

pub use calendar::{day_of_week, day_of_year, days_in_months, leap_year};

pub use config::Config;

pub use dst::{
    first_sunday_in_november, is_daylight_saving, second_sunday_in_march, utc_offset_hours,
};

pub use error::{Error, Result};

pub use irradiance::haurwitz_irradiance;

pub use position::{compute_solar_position, solar_angles, SolarPositionCalculator};

pub use profile::{day_profile, intervals_per_day, minutes_to_time};

pub use types::{
    CivilDateTime, DayProfile, ObserverLocation, ProfileEntry, SolarAngles, SolarPositionResult,
};

pub use wire::{format_result, parse_line};
