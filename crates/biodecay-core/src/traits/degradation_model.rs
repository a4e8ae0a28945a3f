use crate::environment::{EnvironmentReading, Scenario};
use crate::errors::BiodecayResult;
use crate::models::DegradationTime;

/// Environmental degradation kinetics for one material.
///
/// `overrides` are layered on top of the scenario's default environment.
/// Implementations must be pure: no call mutates shared state.
pub trait IDegradationModel: Send + Sync {
    /// Effective first-order decay constant (1/time) for `scenario`.
    fn compute_effective_rate(
        &self,
        scenario: Scenario,
        overrides: &EnvironmentReading,
    ) -> BiodecayResult<f64>;

    /// Time until `threshold_fraction` of the initial quantity remains.
    fn time_to_degrade(
        &self,
        scenario: Scenario,
        overrides: &EnvironmentReading,
        threshold_fraction: f64,
    ) -> BiodecayResult<DegradationTime>;

    /// Quantity left after `elapsed` time units.
    fn remaining_quantity(
        &self,
        scenario: Scenario,
        overrides: &EnvironmentReading,
        elapsed: f64,
    ) -> BiodecayResult<f64>;

    /// Product of all active environmental factors for `environment`.
    fn combined_environment_factor(&self, environment: &EnvironmentReading) -> f64;
}
