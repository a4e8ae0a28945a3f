use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::DEFAULT_THRESHOLD_FRACTION;

/// Report rendering configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Remaining fraction treated as fully degraded.
    pub threshold_fraction: f64,
    /// Decimal places for reported times.
    pub decimals: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            threshold_fraction: DEFAULT_THRESHOLD_FRACTION,
            decimals: defaults::DEFAULT_REPORT_DECIMALS,
        }
    }
}
