use biodecay_core::config::TemperatureFactorSet;

/// Q10 temperature factor.
///
/// Formula: `q10^((temp - reference) / 10)` inside the viable window.
/// Outside `[viable_min_c, viable_max_c]` biological activity is treated as
/// near-arrested and the fixed `floor` is returned instead of extrapolating.
/// NaN falls outside every window and also gets the floor.
pub fn calculate(temp_c: f64, set: &TemperatureFactorSet) -> f64 {
    if !(set.viable_min_c..=set.viable_max_c).contains(&temp_c) {
        return set.floor.max(0.0);
    }
    set.q10.max(0.0).powf((temp_c - set.reference_c) / 10.0)
}
