/// Biodecay system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "BIODECAY_LOG";

/// Remaining fraction at which a material counts as fully degraded (95% gone).
pub const DEFAULT_THRESHOLD_FRACTION: f64 = 0.05;

/// Upper bound on report precision.
pub const MAX_REPORT_DECIMALS: usize = 6;
