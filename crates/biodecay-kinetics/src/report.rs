//! Plain-text degradation report.
//!
//! Presentation only: every number comes pre-computed in a
//! [`DegradationSummary`].

use std::fmt::Write;

use biodecay_core::config::ReportConfig;
use biodecay_core::{DegradationSummary, DegradationTime, EnvironmentReading};

/// Render `summary` as a multi-line human-readable report.
///
/// The conditions line appears only when the caller supplied overrides.
///
/// ```text
/// Mycelium composite (100 g initial):
/// Conditions: 30 °C, 85% RH
/// - Industrial compost: 59.9 days to 95% degradation
/// - Home compost: 119.8 days to 95% degradation
/// ```
pub fn render(summary: &DegradationSummary, config: &ReportConfig) -> String {
    let decimals = config.decimals;
    let degraded = summary.degraded_percent();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} ({} {} initial):",
        summary.material, summary.initial_quantity, summary.unit
    );
    if !summary.environment.is_empty() {
        let _ = writeln!(out, "Conditions: {}", conditions(&summary.environment));
    }

    for estimate in &summary.estimates {
        let label = estimate.scenario.label();
        let _ = match estimate.time_to_threshold {
            DegradationTime::Finite(t) => writeln!(
                out,
                "- {label}: {t:.decimals$} {} to {degraded:.0}% degradation",
                estimate.time_unit
            ),
            DegradationTime::Unbounded => writeln!(
                out,
                "- {label}: never reaches {degraded:.0}% degradation (zero effective rate)"
            ),
        };
    }

    out
}

fn conditions(env: &EnvironmentReading) -> String {
    let parts = [
        env.temperature_c.map(|v| format!("{v} °C")),
        env.relative_humidity.map(|v| format!("{v}% RH")),
        env.ph.map(|v| format!("pH {v}")),
        env.illuminance_lux.map(|v| format!("{v} lux")),
        env.oxygen_fraction.map(|v| format!("O2 {v}")),
        env.pressure_kpa.map(|v| format!("{v} kPa")),
    ];
    parts.into_iter().flatten().collect::<Vec<_>>().join(", ")
}
