//! # biodecay-observability
//!
//! Structured tracing: subscriber setup driven by `BIODECAY_LOG` or the
//! observability config, and typed log events for kinetics operations.

pub mod tracing_setup;

pub use tracing_setup::{events, init_from_config, init_tracing, init_tracing_with_filter};
