//! Built-in material profiles.
//!
//! Each preset carries nominal times to 5% remaining. Base rates are
//! calibrated so those times come out under each scenario's canonical
//! environment (`k = ln(20) / t / combined_factor(default_environment)`),
//! while the material keeps a single reference environment for overrides.

use biodecay_core::config::{FactorConfig, GaussianFactorSet};
use biodecay_core::constants::DEFAULT_THRESHOLD_FRACTION;
use biodecay_core::{BiodecayResult, EnvironmentReading, MaterialProfile, QuantityUnit, Scenario};

use super::scenarios::default_environment;
use crate::formula;

pub const MYCELIUM_DEFAULT_MASS_G: f64 = 100.0;
pub const SEAWEED_DEFAULT_THICKNESS_MM: f64 = 0.2;
pub const TETRA_DEFAULT_THICKNESS_MM: f64 = 0.3;

/// Thermophilic composting organisms stay active well above 45 °C.
const MYCELIUM_VIABLE_MAX_C: f64 = 70.0;

/// Nominal first-order rates per day.
const MYCELIUM_INDUSTRIAL_K: f64 = 0.05;
const MYCELIUM_HOME_K: f64 = 0.025;
const MYCELIUM_SOIL_K: f64 = 0.008;

/// Tetra-edible dissolution speeds: mm/s in saliva and gastric acid, mm/day in soil.
const TETRA_SALIVA_MM_PER_S: f64 = 0.075;
const TETRA_GASTRIC_MM_PER_S: f64 = 0.01;
const TETRA_SOIL_MM_PER_DAY: f64 = 0.004;

const DAYS_PER_WEEK: f64 = 7.0;

/// Alginate/chitosan films break down fastest in acid.
const FILM_PH_PEAK: f64 = 3.0;
const FILM_PH_WIDTH: f64 = 2.0;

/// Rate constant that leaves the default threshold fraction after `time`.
fn rate_for(time_to_threshold: f64) -> f64 {
    -DEFAULT_THRESHOLD_FRACTION.ln() / time_to_threshold
}

/// Base rate that yields `nominal_k` under `scenario`'s canonical environment.
fn calibrated(
    scenario: Scenario,
    nominal_k: f64,
    reference: &EnvironmentReading,
    factors: &FactorConfig,
) -> f64 {
    nominal_k / formula::combined_factor(&default_environment(scenario), reference, factors)
}

/// Mycelium composite packaging, tracked by mass.
///
/// Nominal times: industrial ~60 days, home ~120 days, soil ~375 days.
/// Full fungal metabolization, no microplastic.
pub fn mycelium_composite(initial_mass_g: f64) -> BiodecayResult<MaterialProfile> {
    let mut factors = FactorConfig::default();
    factors.temperature.viable_max_c = MYCELIUM_VIABLE_MAX_C;
    let reference = EnvironmentReading::new()
        .with_temperature(25.0)
        .with_humidity(60.0)
        .with_ph(7.0)
        .with_oxygen(0.21)
        .with_pressure(101.325);

    let rate = |scenario, k| calibrated(scenario, k, &reference, &factors);

    MaterialProfile::builder("Mycelium composite", initial_mass_g)
        .unit(QuantityUnit::Grams)
        .base_rate(
            Scenario::IndustrialCompost,
            rate(Scenario::IndustrialCompost, MYCELIUM_INDUSTRIAL_K),
        )
        .base_rate(Scenario::HomeCompost, rate(Scenario::HomeCompost, MYCELIUM_HOME_K))
        .base_rate(Scenario::SoilBurial, rate(Scenario::SoilBurial, MYCELIUM_SOIL_K))
        .reference_environment(reference)
        .factors(factors)
        .build()
}

/// Seaweed/algae film, tracked by thickness.
///
/// Times grow linearly with thickness. At 0.2 mm: water 3 s, saliva 5 s,
/// gastric 40 s, soil 6 weeks.
pub fn seaweed_film(thickness_mm: f64) -> BiodecayResult<MaterialProfile> {
    let mm = thickness_mm;
    film(
        "Seaweed film",
        thickness_mm,
        &[
            (Scenario::WaterImmersion, 10.0 * mm + 1.0),
            (Scenario::SalivaImmersion, 15.0 * mm + 2.0),
            (Scenario::GastricImmersion, 150.0 * mm + 10.0),
            (Scenario::SoilBurial, (4.0 + 10.0 * mm) * DAYS_PER_WEEK),
        ],
    )
}

/// Tetra-edible laminate inner film, tracked by thickness.
///
/// Constant dissolution speed, so times are proportional to thickness.
/// At 0.3 mm: saliva 4 s, gastric 30 s, soil 75 days.
pub fn tetra_edible_film(thickness_mm: f64) -> BiodecayResult<MaterialProfile> {
    let mm = thickness_mm;
    film(
        "Tetra-edible film",
        thickness_mm,
        &[
            (Scenario::SalivaImmersion, mm / TETRA_SALIVA_MM_PER_S),
            (Scenario::GastricImmersion, mm / TETRA_GASTRIC_MM_PER_S),
            (Scenario::SoilBurial, mm / TETRA_SOIL_MM_PER_DAY),
        ],
    )
}

fn film(
    name: &str,
    thickness_mm: f64,
    nominal_times: &[(Scenario, f64)],
) -> BiodecayResult<MaterialProfile> {
    let reference = film_reference();
    let factors = film_factors();

    let builder = nominal_times.iter().fold(
        MaterialProfile::builder(name, thickness_mm).unit(QuantityUnit::Millimeters),
        |builder, &(scenario, t)| {
            builder.base_rate(scenario, calibrated(scenario, rate_for(t), &reference, &factors))
        },
    );
    builder.reference_environment(reference).factors(factors).build()
}

fn film_reference() -> EnvironmentReading {
    EnvironmentReading::new()
        .with_temperature(25.0)
        .with_humidity(100.0)
        .with_ph(7.0)
}

fn film_factors() -> FactorConfig {
    FactorConfig {
        ph: GaussianFactorSet::ph()
            .with_peak(FILM_PH_PEAK)
            .with_width(FILM_PH_WIDTH),
        ..FactorConfig::default()
    }
}
