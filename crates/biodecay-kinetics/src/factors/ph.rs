use biodecay_core::config::GaussianFactorSet;

use super::gaussian;

/// pH factor, clamped to `[0, 14]` by default.
///
/// Range: 1.0 – `max_boost`.
pub fn calculate(ph: f64, set: &GaussianFactorSet) -> f64 {
    gaussian::calculate(ph, set)
}
