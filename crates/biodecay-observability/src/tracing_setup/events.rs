//! Structured log events for key kinetics operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a material profile becoming available to an engine.
pub fn profile_loaded(material: &str, scenarios: usize) {
    tracing::info!(
        event = "profile_loaded",
        material = %material,
        scenarios = scenarios,
        "material profile loaded"
    );
}

/// Log an effective rate computation.
pub fn rate_computed(material: &str, scenario: &str, base_rate: f64, combined_factor: f64) {
    tracing::debug!(
        event = "rate_computed",
        material = %material,
        scenario = %scenario,
        base_rate = base_rate,
        combined_factor = combined_factor,
        effective_rate = base_rate * combined_factor,
        "effective rate computed"
    );
}

/// Log a zero effective rate (material never reaches its threshold).
pub fn unbounded_degradation(material: &str, scenario: &str) {
    tracing::warn!(
        event = "unbounded_degradation",
        material = %material,
        scenario = %scenario,
        "effective rate is zero; threshold is never reached"
    );
}

/// Log a completed multi-scenario summary.
pub fn summary_generated(material: &str, scenarios: usize, threshold_fraction: f64) {
    tracing::info!(
        event = "summary_generated",
        material = %material,
        scenarios = scenarios,
        threshold_fraction = threshold_fraction,
        "degradation summary generated"
    );
}
