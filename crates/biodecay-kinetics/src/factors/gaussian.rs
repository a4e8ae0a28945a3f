use biodecay_core::config::GaussianFactorSet;

/// Bell response in `[0.0, 1.0]`: `exp(-(value - peak)² / (2·width²))`.
///
/// NaN input has no response (0.0).
pub fn response(value: f64, peak: f64, width: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    let width = width.abs().max(f64::MIN_POSITIVE);
    let deviation = value - peak;
    let r = (-(deviation * deviation) / (2.0 * width * width)).exp();
    if r.is_nan() {
        0.0
    } else {
        r
    }
}

/// Clamp `value` into `[lo, hi]` without panicking on inverted bounds.
pub fn clamp_into(value: f64, (lo, hi): (f64, f64)) -> f64 {
    value.max(lo).min(hi)
}

/// Gaussian multiplier in `[1.0, max_boost]`, peaking at `peak`.
///
/// `value` is clamped into `clamp` first, so readings beyond the physical
/// range score exactly like the nearest boundary. NaN yields the baseline 1.0.
pub fn gaussian_factor(value: f64, peak: f64, width: f64, max_boost: f64, clamp: (f64, f64)) -> f64 {
    if value.is_nan() {
        return 1.0;
    }
    let clamped = clamp_into(value, clamp);
    let boost = response(clamped, peak, width);
    1.0 + boost * (max_boost - 1.0)
}

/// [`gaussian_factor`] driven by a configured parameter set.
pub fn calculate(value: f64, set: &GaussianFactorSet) -> f64 {
    gaussian_factor(value, set.peak, set.width, set.max_boost, (set.clamp_min, set.clamp_max))
}
