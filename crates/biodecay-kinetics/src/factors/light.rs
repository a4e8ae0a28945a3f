use biodecay_core::config::LightFactorSet;

use super::gaussian;

/// Illuminance factor.
///
/// Low light near the optimum gives a mild Gaussian boost. Above the UV
/// threshold the curve is bypassed and the fixed `uv_suppression` multiplier
/// applies (UV damage to microbes and polymer outweighs the boost).
/// NaN is baseline (1.0).
pub fn calculate(lux: f64, set: &LightFactorSet) -> f64 {
    if lux.is_nan() {
        return 1.0;
    }
    let clamped = gaussian::clamp_into(lux, (set.response.clamp_min, set.response.clamp_max));
    if clamped > set.uv_threshold_lux {
        return set.uv_suppression.max(0.0);
    }
    gaussian::calculate(clamped, &set.response)
}
