//! Line-oriented text format: `year,month,day,hour,minute,second`.

use crate::error::{Error, Result};
use crate::types::{CivilDateTime, SolarPositionResult};

const FIELD_NAMES: [&str; 6] = ["year", "month", "day", "hour", "minute", "second"];

/// Parses one line such as `2025,6,13,22,14,0`. Whitespace around the
/// line and around each field is ignored.
pub fn parse_line(line: &str) -> Result<CivilDateTime> {
    let trimmed = line.trim();
    let fields: Vec<&str> = trimmed.split(',').map(str::trim).collect();
    if fields.len() != FIELD_NAMES.len() {
        return Err(Error::malformed(
            trimmed,
            format!("expected 6 fields, found {}", fields.len()),
        ));
    }

    let mut values = [0i64; 6];
    for ((value, field), name) in values.iter_mut().zip(&fields).zip(FIELD_NAMES) {
        *value = field
            .parse()
            .map_err(|_| Error::malformed(trimmed, format!("{name} {field:?} is not an integer")))?;
    }

    let [year, month, day, hour, minute, second] = values;
    let year = i32::try_from(year)
        .map_err(|_| Error::malformed(trimmed, format!("year {year} out of range")))?;
    let unsigned = |name: &str, v: i64| {
        u32::try_from(v).map_err(|_| Error::malformed(trimmed, format!("{name} {v} is negative")))
    };
    CivilDateTime::new(
        year,
        unsigned("month", month)?,
        unsigned("day", day)?,
        unsigned("hour", hour)?,
        unsigned("minute", minute)?,
        unsigned("second", second)?,
    )
}

/// Renders a calculation the way the serial console printed it.
pub fn format_result(dt: &CivilDateTime, result: &SolarPositionResult) -> String {
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02} (UTC{:+})\n\
         Elevation: {:.2}°\n\
         Azimuth: {:.2}°\n\
         Irradiance: {:.2} W/m²",
        dt.year(),
        dt.month(),
        dt.day(),
        dt.hour(),
        dt.minute(),
        dt.second(),
        result.utc_offset_hours,
        result.elevation_deg,
        result.azimuth_deg,
        result.irradiance_wm2
    )
}
