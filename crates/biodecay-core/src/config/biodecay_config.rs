//! Top-level biodecay configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{MaterialSpec, ObservabilityConfig, ReportConfig};
use crate::constants::{LOG_ENV_VAR, MAX_REPORT_DECIMALS};
use crate::errors::{BiodecayResult, ConfigError};
use crate::material::MaterialProfile;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`BIODECAY_LOG`)
/// 2. Config file (`biodecay.toml`)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BiodecayConfig {
    pub observability: ObservabilityConfig,
    pub report: ReportConfig,
    pub materials: Vec<MaterialSpec>,
}

impl BiodecayConfig {
    /// Load configuration from a TOML file, then apply environment overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let mut config: BiodecayConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: BiodecayConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.report.threshold_fraction;
        if !(threshold > 0.0 && threshold < 1.0) {
            return Err(ConfigError::ValidationFailed {
                field: "report.threshold_fraction".to_string(),
                message: "must be between 0.0 and 1.0 (exclusive)".to_string(),
            });
        }
        if self.report.decimals > MAX_REPORT_DECIMALS {
            return Err(ConfigError::ValidationFailed {
                field: "report.decimals".to_string(),
                message: format!("must be at most {MAX_REPORT_DECIMALS}"),
            });
        }
        for (i, spec) in self.materials.iter().enumerate() {
            if let Err(e) = spec.clone().into_profile() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("materials[{i}]"),
                    message: e.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Build every configured material into a frozen profile.
    pub fn material_profiles(&self) -> BiodecayResult<Vec<MaterialProfile>> {
        self.materials
            .iter()
            .cloned()
            .map(MaterialSpec::into_profile)
            .collect()
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var(LOG_ENV_VAR) {
            if !level.trim().is_empty() {
                self.observability.log_level = level;
            }
        }
    }
}
