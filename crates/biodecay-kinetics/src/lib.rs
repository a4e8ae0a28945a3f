//! # biodecay-kinetics
//!
//! Environmental biodegradation-rate engine.
//! Covariates (temperature, humidity, pH, light, oxygen, pressure, microbial
//! synergy) map to dimensionless multipliers; their product scales a
//! material's base first-order decay constant, which drives exponential
//! mass/thickness trajectories and threshold-crossing times.

pub mod decay;
pub mod engine;
pub mod factors;
pub mod formula;
pub mod presets;
pub mod report;

pub use engine::DegradationEngine;
pub use presets::ScenarioPreset;
