//! Haurwitz clear-sky irradiance.
//!
//! Cloud, humidity and aerosols are ignored, so the estimate is an upper
//! bound on what a sensor would measure.

use crate::angles::deg_to_rad;

/// Scale factor of the Haurwitz model, W/m².
pub const HAURWITZ_SCALE: f64 = 1098.0;
const HAURWITZ_EXTINCTION: f64 = 0.059;

/// Estimated irradiance in W/m² for a solar elevation in degrees.
/// Zero whenever the sun is on or below the horizon.
pub fn haurwitz_irradiance(elevation_deg: f64) -> f64 {
    if elevation_deg <= 0.0 {
        return 0.0;
    }
    let cos_zenith = deg_to_rad(90.0 - elevation_deg).cos();
    HAURWITZ_SCALE * cos_zenith * (-HAURWITZ_EXTINCTION / cos_zenith).exp()
}
