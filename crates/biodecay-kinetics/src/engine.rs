use rayon::prelude::*;

use biodecay_core::traits::{IDegradationModel, IEnvironmentSource};
use biodecay_core::{
    BiodecayError, BiodecayResult, DegradationSummary, DegradationTime, EnvironmentReading,
    FactorBreakdown, MaterialProfile, Scenario, ScenarioEstimate,
};
use biodecay_observability::events;

use crate::decay;
use crate::formula;
use crate::presets::{self, ScenarioPreset};

/// Degradation engine for one material.
///
/// Holds only the frozen [`MaterialProfile`]; every query is recomputed from
/// `(profile, environment, elapsed)`, so one engine can be shared across
/// threads and queried concurrently.
#[derive(Debug, Clone)]
pub struct DegradationEngine {
    profile: MaterialProfile,
}

impl DegradationEngine {
    pub fn new(profile: MaterialProfile) -> Self {
        events::profile_loaded(profile.name(), profile.base_rates().len());
        Self { profile }
    }

    pub fn profile(&self) -> &MaterialProfile {
        &self.profile
    }

    /// Resolve `scenario` against this material's base rates.
    pub fn preset(&self, scenario: Scenario) -> BiodecayResult<ScenarioPreset> {
        let base_rate =
            self.profile
                .base_rate(scenario)
                .ok_or_else(|| BiodecayError::ScenarioNotConfigured {
                    material: self.profile.name().to_string(),
                    scenario: scenario.to_string(),
                })?;
        Ok(ScenarioPreset {
            scenario,
            base_rate,
            environment: presets::default_environment(scenario),
        })
    }

    /// Calculate each environmental factor for `environment` individually.
    pub fn factor_breakdown(&self, environment: &EnvironmentReading) -> FactorBreakdown {
        formula::compute_breakdown(
            environment,
            self.profile.reference_environment(),
            self.profile.factors(),
        )
    }

    /// Full numeric result for one scenario.
    pub fn estimate(
        &self,
        scenario: Scenario,
        overrides: &EnvironmentReading,
        threshold_fraction: f64,
    ) -> BiodecayResult<ScenarioEstimate> {
        let (preset, combined_factor) = self.resolve(scenario, overrides)?;
        let effective_rate = preset.base_rate * combined_factor;

        let time_to_threshold = decay::time_to_threshold(effective_rate, threshold_fraction)?;
        if time_to_threshold.is_unbounded() && threshold_fraction > 0.0 {
            events::unbounded_degradation(self.profile.name(), scenario.as_str());
        }

        Ok(ScenarioEstimate {
            scenario,
            time_unit: scenario.time_unit(),
            base_rate: preset.base_rate,
            combined_factor,
            effective_rate,
            threshold_fraction,
            time_to_threshold,
        })
    }

    /// Preset plus combined factor for `scenario` under `overrides`.
    /// Every rate query goes through here so `rate_computed` fires once per query.
    fn resolve(
        &self,
        scenario: Scenario,
        overrides: &EnvironmentReading,
    ) -> BiodecayResult<(ScenarioPreset, f64)> {
        let preset = self.preset(scenario)?;
        let environment = preset.environment_with(overrides);
        let combined_factor = self.combined_environment_factor(&environment);
        events::rate_computed(
            self.profile.name(),
            scenario.as_str(),
            preset.base_rate,
            combined_factor,
        );
        Ok((preset, combined_factor))
    }

    /// Time until only `threshold_quantity` (in the material's unit) remains.
    pub fn time_to_reach_quantity(
        &self,
        scenario: Scenario,
        overrides: &EnvironmentReading,
        threshold_quantity: f64,
    ) -> BiodecayResult<DegradationTime> {
        let fraction = self.profile.threshold_fraction_for(threshold_quantity);
        self.time_to_degrade(scenario, overrides, fraction)
    }

    /// Estimates for every scenario this material declares, in scenario order.
    pub fn summarize(
        &self,
        overrides: &EnvironmentReading,
        threshold_fraction: f64,
    ) -> BiodecayResult<DegradationSummary> {
        let estimates = self
            .profile
            .scenarios()
            .map(|scenario| self.estimate(scenario, overrides, threshold_fraction))
            .collect::<BiodecayResult<Vec<_>>>()?;

        events::summary_generated(self.profile.name(), estimates.len(), threshold_fraction);

        Ok(DegradationSummary {
            material: self.profile.name().to_string(),
            unit: self.profile.unit(),
            initial_quantity: self.profile.initial_quantity(),
            environment: *overrides,
            threshold_fraction,
            estimates,
        })
    }

    /// [`summarize`](Self::summarize) with overrides polled from `source`.
    pub fn summarize_from(
        &self,
        source: &dyn IEnvironmentSource,
        threshold_fraction: f64,
    ) -> BiodecayResult<DegradationSummary> {
        self.summarize(&source.current_reading(), threshold_fraction)
    }

    /// Estimate one scenario under many readings in parallel.
    ///
    /// Output order matches `readings`.
    pub fn project_batch(
        &self,
        scenario: Scenario,
        readings: &[EnvironmentReading],
        threshold_fraction: f64,
    ) -> BiodecayResult<Vec<ScenarioEstimate>> {
        readings
            .par_iter()
            .map(|reading| self.estimate(scenario, reading, threshold_fraction))
            .collect()
    }
}

impl IDegradationModel for DegradationEngine {
    fn compute_effective_rate(
        &self,
        scenario: Scenario,
        overrides: &EnvironmentReading,
    ) -> BiodecayResult<f64> {
        let (preset, combined_factor) = self.resolve(scenario, overrides)?;
        Ok(preset.base_rate * combined_factor)
    }

    fn time_to_degrade(
        &self,
        scenario: Scenario,
        overrides: &EnvironmentReading,
        threshold_fraction: f64,
    ) -> BiodecayResult<DegradationTime> {
        Ok(self
            .estimate(scenario, overrides, threshold_fraction)?
            .time_to_threshold)
    }

    fn remaining_quantity(
        &self,
        scenario: Scenario,
        overrides: &EnvironmentReading,
        elapsed: f64,
    ) -> BiodecayResult<f64> {
        let k = self.compute_effective_rate(scenario, overrides)?;
        Ok(decay::remaining(self.profile.initial_quantity(), k, elapsed))
    }

    fn combined_environment_factor(&self, environment: &EnvironmentReading) -> f64 {
        formula::combined_factor(
            environment,
            self.profile.reference_environment(),
            self.profile.factors(),
        )
    }
}
