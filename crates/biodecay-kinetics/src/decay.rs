use biodecay_core::{BiodecayError, BiodecayResult, DegradationTime};

/// Fraction of the initial quantity left after `elapsed` time at rate `k`.
///
/// Formula: `exp(-k·t)`. Negative (or NaN) elapsed time counts as zero, and
/// a zero rate never decays, so the result is always in `(0.0, 1.0]` for
/// finite inputs.
pub fn fraction_remaining(k: f64, elapsed: f64) -> f64 {
    let t = elapsed.max(0.0);
    if k <= 0.0 || t == 0.0 {
        return 1.0;
    }
    (-k * t).exp()
}

/// First-order decay: `M(t) = M0 × exp(-k·t)`.
///
/// Monotonically non-increasing in `t`; approaches but never reaches zero.
pub fn remaining(initial_quantity: f64, k: f64, elapsed: f64) -> f64 {
    initial_quantity * fraction_remaining(k, elapsed)
}

/// Inverse of the decay law: `t = -ln(threshold_fraction) / k`.
///
/// - `k == 0` has no solution and yields [`DegradationTime::Unbounded`].
/// - `threshold_fraction <= 0` is never reached by an exponential: unbounded.
/// - `threshold_fraction >= 1` is already satisfied at `t = 0`.
/// - A NaN threshold is the only error.
pub fn time_to_threshold(k: f64, threshold_fraction: f64) -> BiodecayResult<DegradationTime> {
    if threshold_fraction.is_nan() {
        return Err(BiodecayError::InvalidThreshold {
            value: threshold_fraction,
        });
    }
    if threshold_fraction >= 1.0 {
        return Ok(DegradationTime::Finite(0.0));
    }
    if k <= 0.0 || threshold_fraction <= 0.0 {
        return Ok(DegradationTime::Unbounded);
    }
    Ok(DegradationTime::Finite(-threshold_fraction.ln() / k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rate_is_unbounded() {
        assert_eq!(time_to_threshold(0.0, 0.05).unwrap(), DegradationTime::Unbounded);
    }

    #[test]
    fn mycelium_industrial_reference_time() {
        // 100 g at k = 0.05/day reaches 5 g after ~59.9 days.
        let t = time_to_threshold(0.05, 0.05).unwrap().as_finite().unwrap();
        assert!((t - 59.914645).abs() < 1e-5, "got {t}");
    }

    #[test]
    fn threshold_edges() {
        assert_eq!(time_to_threshold(0.1, 1.0).unwrap(), DegradationTime::Finite(0.0));
        assert_eq!(time_to_threshold(0.1, 2.0).unwrap(), DegradationTime::Finite(0.0));
        assert_eq!(time_to_threshold(0.1, 0.0).unwrap(), DegradationTime::Unbounded);
        assert!(time_to_threshold(0.1, f64::NAN).is_err());
    }

    #[test]
    fn zero_rate_never_decays_even_at_infinity() {
        assert_eq!(remaining(100.0, 0.0, f64::INFINITY), 100.0);
    }

    #[test]
    fn negative_elapsed_is_start() {
        assert_eq!(remaining(100.0, 0.05, -10.0), 100.0);
    }
}
