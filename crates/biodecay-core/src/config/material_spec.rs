use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::FactorConfig;
use crate::environment::{EnvironmentReading, Scenario};
use crate::errors::BiodecayResult;
use crate::material::{MaterialProfile, QuantityUnit};

/// A user-defined material as written in `biodecay.toml`.
///
/// ```toml
/// [[materials]]
/// name = "hemp board"
/// unit = "grams"
/// initial_quantity = 250.0
///
/// [materials.base_rates]
/// home_compost = 0.012
/// soil_burial = 0.004
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialSpec {
    pub name: String,
    #[serde(default)]
    pub unit: QuantityUnit,
    pub initial_quantity: f64,
    /// Scenario name → base decay constant.
    #[serde(default)]
    pub base_rates: BTreeMap<String, f64>,
    #[serde(default)]
    pub reference_environment: Option<EnvironmentReading>,
    #[serde(default)]
    pub factors: Option<FactorConfig>,
}

impl MaterialSpec {
    /// Build a validated, frozen profile from this spec.
    pub fn into_profile(self) -> BiodecayResult<MaterialProfile> {
        let mut builder = MaterialProfile::builder(self.name, self.initial_quantity).unit(self.unit);
        for (name, k) in &self.base_rates {
            let scenario: Scenario = name.parse()?;
            builder = builder.base_rate(scenario, *k);
        }
        if let Some(reference) = self.reference_environment {
            builder = builder.reference_environment(reference);
        }
        if let Some(factors) = self.factors {
            builder = builder.factors(factors);
        }
        builder.build()
    }
}
