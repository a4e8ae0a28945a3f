use biodecay_core::config::{GaussianFactorSet, MicrobialFactorSet};

use super::gaussian;

/// Joint microbial activity factor.
///
/// Formula: `1 + g(temp) × g(rh) × (max_boost - 1)` where each `g` is a
/// Gaussian response around its own optimum. Microbes need both conditions
/// favorable at once, so one poor covariate suppresses the whole boost.
/// Humidity is clamped to the humidity factor's range, so both humidity
/// paths see the same value. Range: 1.0 – `max_boost`.
pub fn calculate(
    temp_c: f64,
    relative_humidity: f64,
    set: &MicrobialFactorSet,
    humidity: &GaussianFactorSet,
) -> f64 {
    let rh = if relative_humidity.is_nan() {
        relative_humidity
    } else {
        gaussian::clamp_into(relative_humidity, (humidity.clamp_min, humidity.clamp_max))
    };
    let t = gaussian::response(temp_c, set.temperature_peak_c, set.temperature_width_c);
    let h = gaussian::response(rh, set.humidity_peak, set.humidity_width);
    1.0 + t * h * (set.max_boost - 1.0)
}
