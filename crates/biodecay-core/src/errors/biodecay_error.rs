use super::{ConfigError, ProfileError};

/// Top-level error for the biodecay engine.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum BiodecayError {
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("unknown scenario: {name}")]
    UnknownScenario { name: String },

    #[error("material '{material}' has no base rate for scenario '{scenario}'")]
    ScenarioNotConfigured { material: String, scenario: String },

    #[error("invalid threshold fraction: {value}")]
    InvalidThreshold { value: f64 },
}

pub type BiodecayResult<T> = Result<T, BiodecayError>;
