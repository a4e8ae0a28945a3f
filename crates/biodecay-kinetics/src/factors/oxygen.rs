use biodecay_core::config::GaussianFactorSet;

use super::gaussian;

/// Oxygen availability factor. Input is a volume fraction clamped to `[0, 1]`.
pub fn calculate(oxygen_fraction: f64, set: &GaussianFactorSet) -> f64 {
    gaussian::calculate(oxygen_fraction, set)
}
