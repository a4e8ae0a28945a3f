use std::collections::BTreeMap;

use serde::Serialize;

use super::QuantityUnit;
use crate::config::FactorConfig;
use crate::environment::{EnvironmentReading, Scenario};
use crate::errors::{BiodecayResult, ProfileError};

/// Immutable configuration for one decaying material.
///
/// Only obtainable through [`MaterialProfile::builder`], which enforces
/// `initial_quantity > 0`, non-negative finite base rates, and a valid
/// [`FactorConfig`]. Fields are private so a built profile stays frozen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialProfile {
    name: String,
    unit: QuantityUnit,
    initial_quantity: f64,
    base_rates: BTreeMap<Scenario, f64>,
    reference_environment: EnvironmentReading,
    factors: FactorConfig,
}

impl MaterialProfile {
    pub fn builder(name: impl Into<String>, initial_quantity: f64) -> MaterialProfileBuilder {
        MaterialProfileBuilder {
            name: name.into(),
            unit: QuantityUnit::default(),
            initial_quantity,
            base_rates: BTreeMap::new(),
            reference_environment: None,
            factors: FactorConfig::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit(&self) -> QuantityUnit {
        self.unit
    }

    pub fn initial_quantity(&self) -> f64 {
        self.initial_quantity
    }

    /// Base decay constant (1/time) for `scenario`, if the material declares one.
    pub fn base_rate(&self, scenario: Scenario) -> Option<f64> {
        self.base_rates.get(&scenario).copied()
    }

    pub fn base_rates(&self) -> &BTreeMap<Scenario, f64> {
        &self.base_rates
    }

    /// Scenarios with a declared base rate, in declaration order of [`Scenario`].
    pub fn scenarios(&self) -> impl Iterator<Item = Scenario> + '_ {
        self.base_rates.keys().copied()
    }

    /// Conditions under which every base rate was measured.
    pub fn reference_environment(&self) -> &EnvironmentReading {
        &self.reference_environment
    }

    pub fn factors(&self) -> &FactorConfig {
        &self.factors
    }

    /// Express an absolute remaining quantity as a fraction of the initial one.
    pub fn threshold_fraction_for(&self, threshold_quantity: f64) -> f64 {
        threshold_quantity / self.initial_quantity
    }
}

/// Builder for [`MaterialProfile`]. Validation happens in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct MaterialProfileBuilder {
    name: String,
    unit: QuantityUnit,
    initial_quantity: f64,
    base_rates: BTreeMap<Scenario, f64>,
    reference_environment: Option<EnvironmentReading>,
    factors: FactorConfig,
}

impl MaterialProfileBuilder {
    pub fn unit(mut self, unit: QuantityUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn base_rate(mut self, scenario: Scenario, k: f64) -> Self {
        self.base_rates.insert(scenario, k);
        self
    }

    pub fn reference_environment(mut self, reading: EnvironmentReading) -> Self {
        self.reference_environment = Some(reading);
        self
    }

    pub fn factors(mut self, factors: FactorConfig) -> Self {
        self.factors = factors;
        self
    }

    /// Validate and freeze the profile.
    ///
    /// Without an explicit reference environment the profile is referenced
    /// to the temperature factor's reference point alone.
    pub fn build(self) -> BiodecayResult<MaterialProfile> {
        if self.name.trim().is_empty() {
            return Err(ProfileError::EmptyName.into());
        }
        if !(self.initial_quantity.is_finite() && self.initial_quantity > 0.0) {
            return Err(ProfileError::InvalidInitialQuantity {
                value: self.initial_quantity,
            }
            .into());
        }
        for (scenario, k) in &self.base_rates {
            if !k.is_finite() {
                return Err(ProfileError::NonFiniteBaseRate {
                    scenario: scenario.to_string(),
                }
                .into());
            }
            if *k < 0.0 {
                return Err(ProfileError::NegativeBaseRate {
                    scenario: scenario.to_string(),
                    value: *k,
                }
                .into());
            }
        }
        self.factors.validate()?;

        let reference_environment = self.reference_environment.unwrap_or_else(|| {
            EnvironmentReading::new().with_temperature(self.factors.temperature.reference_c)
        });

        Ok(MaterialProfile {
            name: self.name,
            unit: self.unit,
            initial_quantity: self.initial_quantity,
            base_rates: self.base_rates,
            reference_environment,
            factors: self.factors,
        })
    }
}
