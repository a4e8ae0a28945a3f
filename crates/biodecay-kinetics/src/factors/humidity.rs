use biodecay_core::config::GaussianFactorSet;

use super::gaussian;

/// Relative humidity factor. Input is percent, clamped to `[0, 100]` by default.
///
/// Range: 1.0 – `max_boost`.
pub fn calculate(relative_humidity: f64, set: &GaussianFactorSet) -> f64 {
    gaussian::calculate(relative_humidity, set)
}
