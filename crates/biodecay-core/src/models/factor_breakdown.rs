use serde::{Deserialize, Serialize};

/// Each environmental factor individually, for debugging and reports.
///
/// Values are relative to the material's reference environment. `None`
/// means the covariate was absent (neutral multiplier 1.0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FactorBreakdown {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub ph: Option<f64>,
    pub light: Option<f64>,
    pub oxygen: Option<f64>,
    pub pressure: Option<f64>,
    pub microbial: Option<f64>,
    pub combined: f64,
}

impl FactorBreakdown {
    /// Number of factors that contributed to `combined`.
    pub fn active_count(&self) -> usize {
        [
            self.temperature,
            self.humidity,
            self.ph,
            self.light,
            self.oxygen,
            self.pressure,
            self.microbial,
        ]
        .iter()
        .filter(|f| f.is_some())
        .count()
    }
}
