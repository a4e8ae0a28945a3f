use biodecay_core::config::FactorConfig;
use biodecay_core::errors::{BiodecayError, ProfileError};
use biodecay_core::{EnvironmentReading, MaterialProfile, QuantityUnit, Scenario};
use proptest::prelude::*;

#[test]
fn builder_produces_frozen_profile() {
    let profile = MaterialProfile::builder("mycelium", 100.0)
        .base_rate(Scenario::IndustrialCompost, 0.05)
        .base_rate(Scenario::SoilBurial, 0.008)
        .build()
        .unwrap();

    assert_eq!(profile.name(), "mycelium");
    assert_eq!(profile.unit(), QuantityUnit::Grams);
    assert_eq!(profile.initial_quantity(), 100.0);
    assert_eq!(profile.base_rate(Scenario::IndustrialCompost), Some(0.05));
    assert_eq!(
        profile.scenarios().collect::<Vec<_>>(),
        vec![Scenario::IndustrialCompost, Scenario::SoilBurial]
    );
}

#[test]
fn default_reference_environment_is_reference_temperature() {
    let profile = MaterialProfile::builder("plain", 1.0).build().unwrap();
    let expected = EnvironmentReading::new().with_temperature(25.0);
    assert_eq!(profile.reference_environment(), &expected);
}

#[test]
fn zero_initial_quantity_rejected() {
    let err = MaterialProfile::builder("empty", 0.0).build().unwrap_err();
    assert!(matches!(
        err,
        BiodecayError::Profile(ProfileError::InvalidInitialQuantity { .. })
    ));
}

#[test]
fn negative_initial_quantity_rejected() {
    assert!(MaterialProfile::builder("neg", -5.0).build().is_err());
}

#[test]
fn nan_initial_quantity_rejected() {
    assert!(MaterialProfile::builder("nan", f64::NAN).build().is_err());
}

#[test]
fn negative_base_rate_rejected() {
    let err = MaterialProfile::builder("bad", 10.0)
        .base_rate(Scenario::HomeCompost, -0.1)
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        BiodecayError::Profile(ProfileError::NegativeBaseRate { .. })
    ));
}

#[test]
fn infinite_base_rate_rejected() {
    let err = MaterialProfile::builder("bad", 10.0)
        .base_rate(Scenario::HomeCompost, f64::INFINITY)
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        BiodecayError::Profile(ProfileError::NonFiniteBaseRate { .. })
    ));
}

#[test]
fn zero_base_rate_accepted() {
    let profile = MaterialProfile::builder("inert", 10.0)
        .base_rate(Scenario::SoilBurial, 0.0)
        .build()
        .unwrap();
    assert_eq!(profile.base_rate(Scenario::SoilBurial), Some(0.0));
}

#[test]
fn empty_name_rejected() {
    let err = MaterialProfile::builder("  ", 10.0).build().unwrap_err();
    assert!(matches!(err, BiodecayError::Profile(ProfileError::EmptyName)));
}

#[test]
fn invalid_factor_config_rejected() {
    let mut factors = FactorConfig::default();
    factors.humidity.max_boost = 0.5;
    let err = MaterialProfile::builder("bad", 10.0)
        .factors(factors)
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("humidity"));
}

#[test]
fn threshold_fraction_for_absolute_quantity() {
    let profile = MaterialProfile::builder("mycelium", 100.0).build().unwrap();
    assert!((profile.threshold_fraction_for(5.0) - 0.05).abs() < 1e-12);
}

#[test]
fn profile_serializes_with_scenario_keys() {
    let profile = MaterialProfile::builder("mycelium", 100.0)
        .base_rate(Scenario::HomeCompost, 0.025)
        .build()
        .unwrap();
    let json = serde_json::to_value(&profile).unwrap();
    assert_eq!(json["base_rates"]["home_compost"], 0.025);
    assert_eq!(json["unit"], "grams");
}

proptest! {
    #[test]
    fn non_negative_rates_always_build(q in 1e-6f64..1e6, k in 0.0f64..100.0) {
        let built = MaterialProfile::builder("any", q)
            .base_rate(Scenario::SoilBurial, k)
            .build();
        prop_assert!(built.is_ok());
    }

    #[test]
    fn negative_rates_never_build(k in -100.0f64..-1e-9) {
        let built = MaterialProfile::builder("any", 1.0)
            .base_rate(Scenario::SoilBurial, k)
            .build();
        prop_assert!(built.is_err());
    }
}
