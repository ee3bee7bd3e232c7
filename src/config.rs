use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::types::ObserverLocation;

/// `[observer]` section as written in the file, before validation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ObserverSection {
    latitude_deg: f64,
    longitude_deg: f64,
    standard_utc_offset_hours: i32,
    daylight_utc_offset_hours: i32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    observer: Option<ObserverSection>,
}

#[derive(Debug, Default)]
pub struct Config {
    pub observer: ObserverLocation,
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(s)?;
        let observer = match file.observer {
            Some(section) => ObserverLocation::new(
                section.latitude_deg,
                section.longitude_deg,
                section.standard_utc_offset_hours,
                section.daylight_utc_offset_hours,
            )?,
            None => ObserverLocation::default(),
        };
        Ok(Config { observer })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }
}
