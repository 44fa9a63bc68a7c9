//! Criterion benchmarks for multi-source aggregation on the bench profiles.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nook_bench::{reference_profile, stress_profile};
use nook_field::Aggregator;

/// Benchmark: aggregate the 20x50 reference profile (4 sources).
fn bench_aggregate_reference(c: &mut Criterion) {
    let profile = reference_profile(42);
    let agg = Aggregator::new();

    c.bench_function("aggregate_reference_1k", |b| {
        b.iter(|| {
            let field = agg
                .aggregate(&profile.grid, profile.sources.as_slice())
                .unwrap();
            black_box(field.len());
        });
    });
}

/// Benchmark: aggregate the 300x300 stress profile (16 sources).
fn bench_aggregate_stress(c: &mut Criterion) {
    let profile = stress_profile(42);
    let agg = Aggregator::new();

    let mut group = c.benchmark_group("aggregate_stress");
    group.sample_size(10);
    group.bench_function("aggregate_stress_90k", |b| {
        b.iter(|| {
            let field = agg
                .aggregate(&profile.grid, profile.sources.as_slice())
                .unwrap();
            black_box(field.len());
        });
    });
    group.finish();
}

/// Benchmark: colour every reported cell of the reference profile.
fn bench_colors_reference(c: &mut Criterion) {
    let profile = reference_profile(42);
    let field = Aggregator::new()
        .aggregate(&profile.grid, profile.sources.as_slice())
        .unwrap();

    c.bench_function("colors_reference", |b| {
        b.iter(|| {
            for (coord, rgb) in field.colors() {
                black_box((coord, rgb.to_hex()));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_aggregate_reference,
    bench_aggregate_stress,
    bench_colors_reference
);
criterion_main!(benches);
