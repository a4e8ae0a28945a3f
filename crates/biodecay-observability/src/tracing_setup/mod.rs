//! Tracing setup: structured logging and event types.

pub mod events;

use biodecay_core::config::ObservabilityConfig;
use biodecay_core::constants::LOG_ENV_VAR;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `BIODECAY_LOG` environment variable for filtering.
/// Defaults to `info` level if not set.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .try_init()
        .is_ok()
}

/// Initialize tracing with a custom filter string (for testing or embedding).
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing_with_filter(filter: &str) -> bool {
    let filter = EnvFilter::new(filter);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .json()
        .try_init()
        .is_ok()
}

/// Initialize tracing from an [`ObservabilityConfig`].
///
/// `log_level` accepts any `EnvFilter` directive; `json = false` selects
/// the human-readable formatter.
pub fn init_from_config(config: &ObservabilityConfig) -> bool {
    if config.json {
        return init_tracing_with_filter(&config.log_level);
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .with_target(false)
        .try_init()
        .is_ok()
}
