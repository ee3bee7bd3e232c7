//! Error types for solar position calculations and their inputs.

use thiserror::Error;

/// Result type alias for operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building inputs for, or driving, the calculator.
///
/// The calculation itself never fails: every variant here describes input
/// that was rejected before it reached the solar geometry.
#[derive(Debug, Error)]
pub enum Error {
    /// A numeric input was non-finite or outside its physical range.
    #[error("invalid {field}: {value}")]
    InvalidInput {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The year/month/day triple does not name a Gregorian date.
    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// The hour/minute/second triple does not name a time of day.
    #[error("invalid time {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },
    /// A wire-format line could not be parsed.
    #[error("malformed line {line:?}: {reason}")]
    MalformedLine { line: String, reason: String },
    /// A sampling interval that does not evenly divide a day.
    #[error("invalid interval {0} minutes (must divide 1440)")]
    InvalidInterval(u32),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn invalid_input(field: &'static str, value: f64) -> Self {
        Self::InvalidInput { field, value }
    }

    pub(crate) fn malformed(line: &str, reason: impl Into<String>) -> Self {
        Self::MalformedLine {
            line: line.to_owned(),
            reason: reason.into(),
        }
    }
}

/// Checks that `value` is finite and within `[-limit, limit]`.
pub(crate) fn check_range(field: &'static str, value: f64, limit: f64) -> Result<f64> {
    if !value.is_finite() || !(-limit..=limit).contains(&value) {
        return Err(Error::invalid_input(field, value));
    }
    Ok(value)
}
