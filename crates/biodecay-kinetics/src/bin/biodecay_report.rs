//! Print degradation reports for the built-in materials and any materials
//! declared in an optional `biodecay.toml`.
//!
//! Usage: `biodecay-report [path/to/biodecay.toml]`

use std::path::PathBuf;
use std::process::ExitCode;

use biodecay_core::constants::VERSION;
use biodecay_core::{BiodecayConfig, BiodecayResult, EnvironmentReading, MaterialProfile};
use biodecay_kinetics::presets::materials::{
    MYCELIUM_DEFAULT_MASS_G, SEAWEED_DEFAULT_THICKNESS_MM, TETRA_DEFAULT_THICKNESS_MM,
};
use biodecay_kinetics::{presets, report, DegradationEngine};

fn main() -> ExitCode {
    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => match BiodecayConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("biodecay-report: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => BiodecayConfig::default(),
    };

    biodecay_observability::init_from_config(&config.observability);
    tracing::info!(version = VERSION, materials = config.materials.len(), "biodecay-report starting");

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "report generation failed");
            eprintln!("biodecay-report: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &BiodecayConfig) -> BiodecayResult<()> {
    let mut profiles: Vec<MaterialProfile> = vec![
        presets::mycelium_composite(MYCELIUM_DEFAULT_MASS_G)?,
        presets::seaweed_film(SEAWEED_DEFAULT_THICKNESS_MM)?,
        presets::tetra_edible_film(TETRA_DEFAULT_THICKNESS_MM)?,
    ];
    profiles.extend(config.material_profiles()?);

    let overrides = EnvironmentReading::new();
    for profile in profiles {
        let engine = DegradationEngine::new(profile);
        let summary = engine.summarize(&overrides, config.report.threshold_fraction)?;
        println!("{}", report::render(&summary, &config.report));
    }
    Ok(())
}
