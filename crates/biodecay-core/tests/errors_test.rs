use biodecay_core::errors::*;

#[test]
fn profile_error_invalid_quantity_carries_value() {
    let err = ProfileError::InvalidInitialQuantity { value: -3.5 };
    assert!(err.to_string().contains("-3.5"));
}

#[test]
fn profile_error_negative_rate_carries_scenario_and_value() {
    let err = ProfileError::NegativeBaseRate {
        scenario: "soil_burial".into(),
        value: -0.01,
    };
    let msg = err.to_string();
    assert!(msg.contains("soil_burial"));
    assert!(msg.contains("-0.01"));
}

#[test]
fn biodecay_error_wraps_profile_error() {
    let err: BiodecayError = ProfileError::EmptyName.into();
    assert!(matches!(err, BiodecayError::Profile(ProfileError::EmptyName)));
    assert!(err.to_string().starts_with("profile error"));
}

#[test]
fn biodecay_error_wraps_config_error() {
    let err: BiodecayError = ConfigError::FileNotFound {
        path: "/nope/biodecay.toml".into(),
    }
    .into();
    assert!(err.to_string().contains("/nope/biodecay.toml"));
}

#[test]
fn scenario_not_configured_names_material_and_scenario() {
    let err = BiodecayError::ScenarioNotConfigured {
        material: "seaweed film".into(),
        scenario: "industrial_compost".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("seaweed film"));
    assert!(msg.contains("industrial_compost"));
}
