use criterion::{criterion_group, criterion_main, Criterion};

use biodecay_core::traits::IDegradationModel;
use biodecay_core::{EnvironmentReading, Scenario};
use biodecay_kinetics::{presets, DegradationEngine};

fn full_reading() -> EnvironmentReading {
    EnvironmentReading::new()
        .with_temperature(32.0)
        .with_humidity(80.0)
        .with_ph(6.8)
        .with_illuminance(300.0)
        .with_oxygen(0.19)
        .with_pressure(100.0)
}

fn bench_combined_factor(c: &mut Criterion) {
    let engine = DegradationEngine::new(presets::mycelium_composite(100.0).unwrap());
    let reading = full_reading();
    c.bench_function("combined_factor_all_covariates", |b| {
        b.iter(|| engine.combined_environment_factor(std::hint::black_box(&reading)))
    });
}

fn bench_summary(c: &mut Criterion) {
    let engine = DegradationEngine::new(presets::mycelium_composite(100.0).unwrap());
    let reading = full_reading();
    c.bench_function("summarize_three_scenarios", |b| {
        b.iter(|| engine.summarize(std::hint::black_box(&reading), 0.05).unwrap())
    });
}

fn bench_batch_10k(c: &mut Criterion) {
    let engine = DegradationEngine::new(presets::mycelium_composite(100.0).unwrap());
    let readings: Vec<EnvironmentReading> = (0..10_000)
        .map(|i| full_reading().with_temperature(5.0 + (i % 60) as f64))
        .collect();
    c.bench_function("project_batch_10k", |b| {
        b.iter(|| {
            engine
                .project_batch(Scenario::HomeCompost, &readings, 0.05)
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_combined_factor, bench_summary, bench_batch_10k);
criterion_main!(benches);
