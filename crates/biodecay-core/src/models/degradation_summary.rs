use serde::{Deserialize, Serialize};

use super::ScenarioEstimate;
use crate::environment::EnvironmentReading;
use crate::material::QuantityUnit;

/// Everything a report renderer needs for one material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegradationSummary {
    pub material: String,
    pub unit: QuantityUnit,
    pub initial_quantity: f64,
    /// Caller-supplied overrides the estimates were computed with.
    pub environment: EnvironmentReading,
    pub threshold_fraction: f64,
    pub estimates: Vec<ScenarioEstimate>,
}

impl DegradationSummary {
    /// Percentage of the material gone at the threshold (e.g. 95 for 0.05).
    pub fn degraded_percent(&self) -> f64 {
        (1.0 - self.threshold_fraction) * 100.0
    }
}
