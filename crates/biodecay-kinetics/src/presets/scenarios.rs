use biodecay_core::{EnvironmentReading, Scenario};

/// A scenario resolved against one material: its base rate plus the
/// canonical environment that rate is evaluated under.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioPreset {
    pub scenario: Scenario,
    pub base_rate: f64,
    pub environment: EnvironmentReading,
}

impl ScenarioPreset {
    /// Canonical environment with caller overrides layered on top.
    pub fn environment_with(&self, overrides: &EnvironmentReading) -> EnvironmentReading {
        self.environment.overlay(overrides)
    }
}

/// Canonical ambient conditions for each scenario.
///
/// Temperatures in °C, humidity in percent, oxygen as a volume fraction.
pub fn default_environment(scenario: Scenario) -> EnvironmentReading {
    let env = EnvironmentReading::new();
    match scenario {
        Scenario::IndustrialCompost => env.with_temperature(60.0).with_humidity(95.0).with_ph(7.0),
        Scenario::HomeCompost => env.with_temperature(25.0).with_humidity(85.0).with_ph(7.0),
        Scenario::SoilBurial => env
            .with_temperature(15.0)
            .with_humidity(70.0)
            .with_ph(6.5)
            .with_oxygen(0.15),
        Scenario::WaterImmersion => env.with_temperature(20.0).with_humidity(100.0).with_ph(7.0),
        Scenario::SalivaImmersion => env.with_temperature(37.0).with_humidity(100.0).with_ph(6.8),
        Scenario::GastricImmersion => env.with_temperature(37.0).with_humidity(100.0).with_ph(2.0),
    }
}
