use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ProfileError;

/// Q10 temperature response.
///
/// Inside `[viable_min_c, viable_max_c]` the multiplier is
/// `q10^((t - reference_c) / 10)`; outside it collapses to `floor`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemperatureFactorSet {
    pub reference_c: f64,
    pub q10: f64,
    pub viable_min_c: f64,
    pub viable_max_c: f64,
    pub floor: f64,
}

impl Default for TemperatureFactorSet {
    fn default() -> Self {
        Self {
            reference_c: defaults::DEFAULT_REFERENCE_TEMP_C,
            q10: defaults::DEFAULT_Q10,
            viable_min_c: defaults::DEFAULT_VIABLE_MIN_C,
            viable_max_c: defaults::DEFAULT_VIABLE_MAX_C,
            floor: defaults::DEFAULT_TEMPERATURE_FLOOR,
        }
    }
}

/// Bell-shaped response around an optimum, mapped onto `[1.0, max_boost]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaussianFactorSet {
    pub peak: f64,
    pub width: f64,
    pub max_boost: f64,
    pub clamp_min: f64,
    pub clamp_max: f64,
}

impl GaussianFactorSet {
    pub fn humidity() -> Self {
        Self {
            peak: defaults::DEFAULT_HUMIDITY_PEAK,
            width: defaults::DEFAULT_HUMIDITY_WIDTH,
            max_boost: defaults::DEFAULT_HUMIDITY_MAX_BOOST,
            clamp_min: defaults::HUMIDITY_CLAMP.0,
            clamp_max: defaults::HUMIDITY_CLAMP.1,
        }
    }

    pub fn ph() -> Self {
        Self {
            peak: defaults::DEFAULT_PH_PEAK,
            width: defaults::DEFAULT_PH_WIDTH,
            max_boost: defaults::DEFAULT_PH_MAX_BOOST,
            clamp_min: defaults::PH_CLAMP.0,
            clamp_max: defaults::PH_CLAMP.1,
        }
    }

    pub fn oxygen() -> Self {
        Self {
            peak: defaults::DEFAULT_OXYGEN_PEAK,
            width: defaults::DEFAULT_OXYGEN_WIDTH,
            max_boost: defaults::DEFAULT_OXYGEN_MAX_BOOST,
            clamp_min: defaults::OXYGEN_CLAMP.0,
            clamp_max: defaults::OXYGEN_CLAMP.1,
        }
    }

    pub fn illuminance() -> Self {
        Self {
            peak: defaults::DEFAULT_LIGHT_PEAK_LUX,
            width: defaults::DEFAULT_LIGHT_WIDTH_LUX,
            max_boost: defaults::DEFAULT_LIGHT_MAX_BOOST,
            clamp_min: defaults::LIGHT_CLAMP.0,
            clamp_max: defaults::LIGHT_CLAMP.1,
        }
    }

    /// Same curve with a different optimum.
    pub fn with_peak(mut self, peak: f64) -> Self {
        self.peak = peak;
        self
    }

    /// Same curve with a different spread.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    fn validate(&self, factor: &str) -> Result<(), ProfileError> {
        let values = [self.peak, self.width, self.max_boost, self.clamp_min, self.clamp_max];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(invalid(factor, "all parameters must be finite"));
        }
        if self.width <= 0.0 {
            return Err(invalid(factor, "width must be greater than 0"));
        }
        if self.max_boost < 1.0 {
            return Err(invalid(factor, "max_boost must be at least 1.0"));
        }
        if self.clamp_min > self.clamp_max {
            return Err(invalid(factor, "clamp_min must not exceed clamp_max"));
        }
        Ok(())
    }
}

/// Light response: Gaussian below the UV threshold, fixed suppression above it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightFactorSet {
    pub response: GaussianFactorSet,
    pub uv_threshold_lux: f64,
    pub uv_suppression: f64,
}

impl Default for LightFactorSet {
    fn default() -> Self {
        Self {
            response: GaussianFactorSet::illuminance(),
            uv_threshold_lux: defaults::DEFAULT_UV_THRESHOLD_LUX,
            uv_suppression: defaults::DEFAULT_UV_SUPPRESSION,
        }
    }
}

/// Pressure response mapped onto `[floor, 1.0]`. Deviation only slows decay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PressureFactorSet {
    pub peak_kpa: f64,
    pub width_kpa: f64,
    pub clamp_min_kpa: f64,
    pub clamp_max_kpa: f64,
    pub floor: f64,
}

impl Default for PressureFactorSet {
    fn default() -> Self {
        Self {
            peak_kpa: defaults::DEFAULT_PRESSURE_PEAK_KPA,
            width_kpa: defaults::DEFAULT_PRESSURE_WIDTH_KPA,
            clamp_min_kpa: defaults::PRESSURE_CLAMP_KPA.0,
            clamp_max_kpa: defaults::PRESSURE_CLAMP_KPA.1,
            floor: defaults::DEFAULT_PRESSURE_FLOOR,
        }
    }
}

/// Joint temperature × humidity synergy term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MicrobialFactorSet {
    pub enabled: bool,
    pub temperature_peak_c: f64,
    pub temperature_width_c: f64,
    pub humidity_peak: f64,
    pub humidity_width: f64,
    pub max_boost: f64,
}

impl Default for MicrobialFactorSet {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_MICROBIAL_ENABLED,
            temperature_peak_c: defaults::DEFAULT_MICROBIAL_TEMP_PEAK_C,
            temperature_width_c: defaults::DEFAULT_MICROBIAL_TEMP_WIDTH_C,
            humidity_peak: defaults::DEFAULT_MICROBIAL_HUMIDITY_PEAK,
            humidity_width: defaults::DEFAULT_MICROBIAL_HUMIDITY_WIDTH,
            max_boost: defaults::DEFAULT_MICROBIAL_MAX_BOOST,
        }
    }
}

/// Response-curve parameters for every covariate the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorConfig {
    pub temperature: TemperatureFactorSet,
    pub humidity: GaussianFactorSet,
    pub ph: GaussianFactorSet,
    pub oxygen: GaussianFactorSet,
    pub light: LightFactorSet,
    pub pressure: PressureFactorSet,
    pub microbial: MicrobialFactorSet,
}

impl Default for FactorConfig {
    fn default() -> Self {
        Self {
            temperature: TemperatureFactorSet::default(),
            humidity: GaussianFactorSet::humidity(),
            ph: GaussianFactorSet::ph(),
            oxygen: GaussianFactorSet::oxygen(),
            light: LightFactorSet::default(),
            pressure: PressureFactorSet::default(),
            microbial: MicrobialFactorSet::default(),
        }
    }
}

impl FactorConfig {
    /// Reject parameter sets that would break the non-negativity of any factor.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let t = &self.temperature;
        if ![t.reference_c, t.q10, t.viable_min_c, t.viable_max_c, t.floor]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(invalid("temperature", "all parameters must be finite"));
        }
        if t.q10 <= 0.0 {
            return Err(invalid("temperature", "q10 must be greater than 0"));
        }
        if t.floor <= 0.0 {
            return Err(invalid("temperature", "floor must be greater than 0"));
        }
        if t.viable_min_c > t.viable_max_c {
            return Err(invalid("temperature", "viable_min_c must not exceed viable_max_c"));
        }
        if !(t.viable_min_c..=t.viable_max_c).contains(&t.reference_c) {
            return Err(invalid("temperature", "reference_c must lie within the viable range"));
        }

        self.humidity.validate("humidity")?;
        self.ph.validate("ph")?;
        self.oxygen.validate("oxygen")?;
        self.light.response.validate("light")?;

        let l = &self.light;
        if !l.uv_threshold_lux.is_finite() || !l.uv_suppression.is_finite() {
            return Err(invalid("light", "all parameters must be finite"));
        }
        if l.uv_suppression <= 0.0 {
            return Err(invalid("light", "uv_suppression must be greater than 0"));
        }

        let p = &self.pressure;
        if ![p.peak_kpa, p.width_kpa, p.clamp_min_kpa, p.clamp_max_kpa, p.floor]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(invalid("pressure", "all parameters must be finite"));
        }
        if p.width_kpa <= 0.0 {
            return Err(invalid("pressure", "width_kpa must be greater than 0"));
        }
        if !(0.0..=1.0).contains(&p.floor) || p.floor == 0.0 {
            return Err(invalid("pressure", "floor must be in (0.0, 1.0]"));
        }
        if p.clamp_min_kpa > p.clamp_max_kpa {
            return Err(invalid("pressure", "clamp_min_kpa must not exceed clamp_max_kpa"));
        }

        let m = &self.microbial;
        if ![
            m.temperature_peak_c,
            m.temperature_width_c,
            m.humidity_peak,
            m.humidity_width,
            m.max_boost,
        ]
        .iter()
        .all(|v| v.is_finite())
        {
            return Err(invalid("microbial", "all parameters must be finite"));
        }
        if m.temperature_width_c <= 0.0 || m.humidity_width <= 0.0 {
            return Err(invalid("microbial", "widths must be greater than 0"));
        }
        if m.max_boost < 1.0 {
            return Err(invalid("microbial", "max_boost must be at least 1.0"));
        }

        Ok(())
    }
}

fn invalid(factor: &str, reason: &str) -> ProfileError {
    ProfileError::InvalidFactor {
        factor: factor.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(FactorConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_width_rejected() {
        let mut config = FactorConfig::default();
        config.ph.width = 0.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ph"));
    }

    #[test]
    fn inverted_viable_range_rejected() {
        let mut config = FactorConfig::default();
        config.temperature.viable_min_c = 50.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn reference_outside_viable_range_rejected() {
        let mut config = FactorConfig::default();
        config.temperature.reference_c = 50.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("reference_c"));

        config.temperature.viable_max_c = 60.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn pressure_floor_above_one_rejected() {
        let mut config = FactorConfig::default();
        config.pressure.floor = 1.5;
        assert!(config.validate().is_err());
    }
}
