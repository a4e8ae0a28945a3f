//! # biodecay-core
//!
//! Foundation crate for the biodecay kinetics engine.
//! Defines environment readings, material profiles, factor configuration,
//! result models, traits, errors, and defaults.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod environment;
pub mod errors;
pub mod material;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{BiodecayConfig, FactorConfig};
pub use environment::{EnvironmentReading, Scenario, TimeUnit};
pub use errors::{BiodecayError, BiodecayResult};
pub use material::{MaterialProfile, QuantityUnit};
pub use models::{DegradationSummary, DegradationTime, FactorBreakdown, ScenarioEstimate};
