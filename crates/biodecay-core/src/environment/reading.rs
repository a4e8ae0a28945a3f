use serde::{Deserialize, Serialize};

/// Snapshot of ambient conditions.
///
/// Every covariate is optional; a missing one contributes a neutral
/// multiplier of 1.0. Values are not validated here: out-of-range sensor
/// extremes are clamped by the factor functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentReading {
    /// Degrees Celsius.
    pub temperature_c: Option<f64>,
    /// Percent, 0–100.
    pub relative_humidity: Option<f64>,
    pub ph: Option<f64>,
    pub illuminance_lux: Option<f64>,
    /// Volume fraction, 0–1.
    pub oxygen_fraction: Option<f64>,
    pub pressure_kpa: Option<f64>,
}

impl EnvironmentReading {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_temperature(mut self, celsius: f64) -> Self {
        self.temperature_c = Some(celsius);
        self
    }

    pub fn with_humidity(mut self, percent: f64) -> Self {
        self.relative_humidity = Some(percent);
        self
    }

    pub fn with_ph(mut self, ph: f64) -> Self {
        self.ph = Some(ph);
        self
    }

    pub fn with_illuminance(mut self, lux: f64) -> Self {
        self.illuminance_lux = Some(lux);
        self
    }

    pub fn with_oxygen(mut self, fraction: f64) -> Self {
        self.oxygen_fraction = Some(fraction);
        self
    }

    pub fn with_pressure(mut self, kpa: f64) -> Self {
        self.pressure_kpa = Some(kpa);
        self
    }

    /// True when no covariate is present.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Layer `overrides` on top of `self`. Covariates present in
    /// `overrides` win; the rest fall through to `self`.
    pub fn overlay(&self, overrides: &EnvironmentReading) -> EnvironmentReading {
        EnvironmentReading {
            temperature_c: overrides.temperature_c.or(self.temperature_c),
            relative_humidity: overrides.relative_humidity.or(self.relative_humidity),
            ph: overrides.ph.or(self.ph),
            illuminance_lux: overrides.illuminance_lux.or(self.illuminance_lux),
            oxygen_fraction: overrides.oxygen_fraction.or(self.oxygen_fraction),
            pressure_kpa: overrides.pressure_kpa.or(self.pressure_kpa),
        }
    }
}
