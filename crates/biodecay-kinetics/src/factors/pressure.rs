use biodecay_core::config::PressureFactorSet;

use super::gaussian;

/// Pressure factor.
///
/// Formula: `floor + boost × (1 - floor)` with a Gaussian `boost` around
/// ambient pressure. Range: `floor` – 1.0 (0.5 – 1.0 by default). Compaction
/// impedes diffusion, so deviation only ever slows decay. NaN is baseline (1.0).
pub fn calculate(pressure_kpa: f64, set: &PressureFactorSet) -> f64 {
    if pressure_kpa.is_nan() {
        return 1.0;
    }
    let clamped = gaussian::clamp_into(pressure_kpa, (set.clamp_min_kpa, set.clamp_max_kpa));
    let boost = gaussian::response(clamped, set.peak_kpa, set.width_kpa);
    let floor = set.floor.clamp(0.0, 1.0);
    floor + boost * (1.0 - floor)
}
