//! Evaluation engine benchmarks
//!
//! Measures single-round evaluation over the full term library and
//! complete time-series runs at several series lengths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use uqff_core::prelude::*;

fn full_registry() -> TermRegistry {
    let mut registry = TermRegistry::new();
    terms::register_all(&mut registry);
    registry
}

/// Benchmark one evaluation round over the full 46-term library
fn bench_single_round(c: &mut Criterion) {
    let registry = full_registry();
    let engine = EvaluationEngine::new(&registry);
    let system = AstrophysicalSystem::default();
    let active: Vec<String> = registry.names().iter().map(|s| s.to_string()).collect();

    c.bench_function("evaluate_round 46 terms", |b| {
        b.iter(|| {
            let mut params = system.to_params();
            engine.evaluate_round(black_box(0.0), &mut params, &active)
        });
    });
}

/// Benchmark complete time-series runs at different series lengths
fn bench_time_series(c: &mut Criterion) {
    let registry = full_registry();
    let mut group = c.benchmark_group("time series");

    for steps in [10usize, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("steps", steps), steps, |b, &steps| {
            b.iter(|| {
                let mut driver =
                    SimulationDriver::new(&registry, AstrophysicalSystem::default());
                driver
                    .run_time_series(0.0, steps as f64, 1.0)
                    .expect("valid configuration");
                black_box(driver.results().len())
            });
        });
    }

    group.finish();
}

/// Benchmark a parameter sweep over the magnetar inertia
fn bench_parameter_sweep(c: &mut Criterion) {
    let registry = full_registry();

    c.bench_function("parameter sweep 100 points", |b| {
        b.iter(|| {
            let mut driver = SimulationDriver::new(&registry, AstrophysicalSystem::default());
            driver
                .run_parameter_sweep("I", 1e44, 1e46, 100, 0.0)
                .expect("valid configuration");
            black_box(driver.results().len())
        });
    });
}

criterion_group!(benches, bench_single_round, bench_time_series, bench_parameter_sweep);
criterion_main!(benches);
