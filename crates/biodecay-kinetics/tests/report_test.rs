use biodecay_core::config::ReportConfig;
use biodecay_core::{EnvironmentReading, MaterialProfile, Scenario};
use biodecay_kinetics::presets::{self, default_environment};
use biodecay_kinetics::{report, DegradationEngine};

#[test]
fn mycelium_report_lists_every_scenario() {
    let engine = DegradationEngine::new(presets::mycelium_composite(100.0).unwrap());
    let summary = engine.summarize(&EnvironmentReading::new(), 0.05).unwrap();
    let text = report::render(&summary, &ReportConfig::default());

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Mycelium composite (100 g initial):");
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("- Industrial compost: "));
    assert!(lines[2].starts_with("- Home compost: "));
    assert!(lines[3].starts_with("- Soil burial: "));
    assert!(lines[1].ends_with(" days to 95% degradation"));
}

#[test]
fn film_report_uses_seconds_and_millimeters() {
    let engine = DegradationEngine::new(presets::seaweed_film(0.2).unwrap());
    let summary = engine.summarize(&EnvironmentReading::new(), 0.05).unwrap();
    let text = report::render(&summary, &ReportConfig::default());
    assert!(text.starts_with("Seaweed film (0.2 mm initial):"));
    assert!(text.contains("- Water: "));
    assert!(text.contains(" s to 95% degradation"));
    assert!(text.contains(" days to 95% degradation"));
}

#[test]
fn precision_follows_config() {
    let profile = MaterialProfile::builder("calibrated", 100.0)
        .base_rate(Scenario::IndustrialCompost, 0.05)
        .reference_environment(default_environment(Scenario::IndustrialCompost))
        .build()
        .unwrap();
    let engine = DegradationEngine::new(profile);
    let summary = engine.summarize(&EnvironmentReading::new(), 0.05).unwrap();

    let one = report::render(&summary, &ReportConfig::default());
    assert!(one.contains("- Industrial compost: 59.9 days"), "{one}");

    let three = report::render(
        &summary,
        &ReportConfig {
            decimals: 3,
            ..ReportConfig::default()
        },
    );
    assert!(three.contains("- Industrial compost: 59.915 days"), "{three}");
}

#[test]
fn unbounded_scenario_renders_never() {
    let profile = MaterialProfile::builder("inert", 1.0)
        .base_rate(Scenario::SoilBurial, 0.0)
        .build()
        .unwrap();
    let engine = DegradationEngine::new(profile);
    let summary = engine.summarize(&EnvironmentReading::new(), 0.05).unwrap();
    let text = report::render(&summary, &ReportConfig::default());
    assert!(text.contains("- Soil burial: never reaches 95% degradation"), "{text}");
}

#[test]
fn default_reports_print_nominal_times() {
    let text = |profile| {
        let engine = DegradationEngine::new(profile);
        let summary = engine.summarize(&EnvironmentReading::new(), 0.05).unwrap();
        report::render(&summary, &ReportConfig::default())
    };

    let mycelium = text(presets::mycelium_composite(100.0).unwrap());
    assert!(mycelium.contains("- Industrial compost: 59.9 days"), "{mycelium}");
    assert!(mycelium.contains("- Home compost: 119.8 days"), "{mycelium}");
    assert!(mycelium.contains("- Soil burial: 374.5 days"), "{mycelium}");

    let seaweed = text(presets::seaweed_film(0.2).unwrap());
    assert!(seaweed.contains("- Water: 3.0 s"), "{seaweed}");
    assert!(seaweed.contains("40.0 s"), "{seaweed}");
    assert!(seaweed.contains("- Soil burial: 42.0 days"), "{seaweed}");

    let tetra = text(presets::tetra_edible_film(0.3).unwrap());
    assert!(tetra.contains("4.0 s"), "{tetra}");
    assert!(tetra.contains("30.0 s"), "{tetra}");
    assert!(tetra.contains("- Soil burial: 75.0 days"), "{tetra}");
}

#[test]
fn overrides_render_as_conditions_line() {
    let engine = DegradationEngine::new(presets::mycelium_composite(100.0).unwrap());
    let overrides = EnvironmentReading::new().with_temperature(30.0).with_humidity(85.0);
    let summary = engine.summarize(&overrides, 0.05).unwrap();
    let text = report::render(&summary, &ReportConfig::default());

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[1], "Conditions: 30 °C, 85% RH");
    assert_eq!(lines.len(), 5);
    assert!(lines[2].starts_with("- Industrial compost: "));
}
