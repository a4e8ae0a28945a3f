use serde::{Deserialize, Serialize};

use super::DegradationTime;
use crate::environment::{Scenario, TimeUnit};

/// Numeric result for one scenario under one environment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioEstimate {
    pub scenario: Scenario,
    pub time_unit: TimeUnit,
    /// Decay constant at the reference environment (1/time_unit).
    pub base_rate: f64,
    pub combined_factor: f64,
    /// `base_rate × combined_factor`.
    pub effective_rate: f64,
    pub threshold_fraction: f64,
    pub time_to_threshold: DegradationTime,
}
