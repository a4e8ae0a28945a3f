//! Scenario presets (canonical environments per setting) and material presets.

pub mod materials;
pub mod scenarios;

pub use materials::{mycelium_composite, seaweed_film, tetra_edible_film};
pub use scenarios::{default_environment, ScenarioPreset};
