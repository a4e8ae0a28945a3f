use biodecay_core::DegradationTime;
use biodecay_kinetics::decay;
use proptest::prelude::*;

#[test]
fn original_reference_times() {
    // 100 g mycelium, threshold 5 g.
    let industrial = decay::time_to_threshold(0.05, 0.05).unwrap().as_finite().unwrap();
    let home = decay::time_to_threshold(0.025, 0.05).unwrap().as_finite().unwrap();
    let soil = decay::time_to_threshold(0.008, 0.05).unwrap().as_finite().unwrap();
    assert_eq!((industrial * 10.0).round() / 10.0, 59.9);
    assert_eq!((home * 10.0).round() / 10.0, 119.8);
    assert_eq!((soil * 10.0).round() / 10.0, 374.5);
}

#[test]
fn zero_rate_reports_unbounded_never_finite() {
    for fraction in [0.001, 0.05, 0.5, 0.999] {
        let t = decay::time_to_threshold(0.0, fraction).unwrap();
        assert_eq!(t, DegradationTime::Unbounded);
        assert!(t.as_finite().is_none());
    }
}

#[test]
fn remaining_starts_at_initial_quantity() {
    assert_eq!(decay::remaining(100.0, 0.05, 0.0), 100.0);
}

#[test]
fn remaining_never_reaches_zero_for_finite_time() {
    assert!(decay::remaining(100.0, 0.05, 1_000.0) > 0.0);
}

proptest! {
    #[test]
    fn round_trip_law(k in 1.0e-4f64..10.0, fraction in 0.001f64..0.999) {
        let t = decay::time_to_threshold(k, fraction).unwrap().as_finite().unwrap();
        let initial = 100.0;
        let ratio = decay::remaining(initial, k, t) / initial;
        prop_assert!((ratio - fraction).abs() <= 1e-9 * fraction.max(1e-3), "{} vs {}", ratio, fraction);
    }

    #[test]
    fn remaining_monotonically_non_increasing(k in 0.0f64..5.0, t in 0.0f64..1.0e3, dt in 0.0f64..1.0e3) {
        let earlier = decay::remaining(50.0, k, t);
        let later = decay::remaining(50.0, k, t + dt);
        prop_assert!(later <= earlier + f64::EPSILON);
    }

    #[test]
    fn faster_rate_degrades_sooner(k in 1.0e-3f64..5.0, factor in 1.01f64..10.0) {
        let slow = decay::time_to_threshold(k, 0.05).unwrap().to_f64();
        let fast = decay::time_to_threshold(k * factor, 0.05).unwrap().to_f64();
        prop_assert!(fast < slow);
    }
}
