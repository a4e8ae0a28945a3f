use biodecay_core::config::FactorConfig;
use biodecay_core::{EnvironmentReading, FactorBreakdown};

use crate::factors;

/// Multiplicative environmental rate modifier.
///
/// ```text
/// combinedFactor = temperature
///   × humidity
///   × pH
///   × light
///   × oxygen
///   × pressure
///   × microbialSynergy
/// ```
///
/// Only covariates present in `environment` participate; an absent (or NaN)
/// covariate contributes 1.0. Each factor is divided by its value at the
/// material's `reference` environment, so the reference itself scores 1.0 and
/// base rates keep their measured meaning. A covariate the reference does not
/// declare is left unnormalized.
pub fn combined_factor(
    environment: &EnvironmentReading,
    reference: &EnvironmentReading,
    config: &FactorConfig,
) -> f64 {
    compute_breakdown(environment, reference, config).combined
}

/// `base_k × combined_factor`. Non-negative whenever `base_k` is.
pub fn effective_rate(
    base_k: f64,
    environment: &EnvironmentReading,
    reference: &EnvironmentReading,
    config: &FactorConfig,
) -> f64 {
    base_k * combined_factor(environment, reference, config)
}

/// Compute each factor individually for debugging/observability.
pub fn compute_breakdown(
    environment: &EnvironmentReading,
    reference: &EnvironmentReading,
    config: &FactorConfig,
) -> FactorBreakdown {
    let temperature = relative(environment.temperature_c, reference.temperature_c, |t| {
        factors::temperature::calculate(t, &config.temperature)
    });
    let humidity = relative(environment.relative_humidity, reference.relative_humidity, |rh| {
        factors::humidity::calculate(rh, &config.humidity)
    });
    let ph = relative(environment.ph, reference.ph, |ph| {
        factors::ph::calculate(ph, &config.ph)
    });
    let light = relative(environment.illuminance_lux, reference.illuminance_lux, |lux| {
        factors::light::calculate(lux, &config.light)
    });
    let oxygen = relative(environment.oxygen_fraction, reference.oxygen_fraction, |o2| {
        factors::oxygen::calculate(o2, &config.oxygen)
    });
    let pressure = relative(environment.pressure_kpa, reference.pressure_kpa, |p| {
        factors::pressure::calculate(p, &config.pressure)
    });
    let microbial = if config.microbial.enabled {
        relative(
            joint(environment.temperature_c, environment.relative_humidity),
            joint(reference.temperature_c, reference.relative_humidity),
            |(t, rh)| factors::microbial::calculate(t, rh, &config.microbial, &config.humidity),
        )
    } else {
        None
    };

    let combined = [temperature, humidity, ph, light, oxygen, pressure, microbial]
        .iter()
        .flatten()
        .product::<f64>();

    FactorBreakdown {
        temperature,
        humidity,
        ph,
        light,
        oxygen,
        pressure,
        microbial,
        combined,
    }
}

/// `f(value) / f(reference)` when `value` is present, `None` otherwise.
fn relative<T: Present>(value: Option<T>, reference: Option<T>, f: impl Fn(T) -> f64) -> Option<f64> {
    let value = value.filter(Present::is_present)?;
    let raw = f(value);
    let baseline = reference
        .filter(Present::is_present)
        .map(&f)
        .filter(|b| *b > 0.0)
        .unwrap_or(1.0);
    Some(raw / baseline)
}

fn joint(temp: Option<f64>, rh: Option<f64>) -> Option<(f64, f64)> {
    Some((temp?, rh?))
}

/// A covariate value usable by the composer (NaN counts as absent).
trait Present {
    fn is_present(&self) -> bool;
}

impl Present for f64 {
    fn is_present(&self) -> bool {
        !self.is_nan()
    }
}

impl Present for (f64, f64) {
    fn is_present(&self) -> bool {
        !self.0.is_nan() && !self.1.is_nan()
    }
}
