//! Criterion benchmarks for random_core sampling.
//!
//! Benchmarks cover:
//! - Uniform primitives
//! - Derived distributions
//! - Weighted picking over growing collections
//! - Permutation and shuffling

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use random_core::{array, Generator};

fn bench_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("uniform");
    let mut rng = Generator::from_seed(42);

    group.bench_function("float", |b| b.iter(|| black_box(rng.float())));
    group.bench_function("int_between", |b| {
        b.iter(|| black_box(rng.int_between(-1_000, 1_000).unwrap()))
    });

    group.finish();
}

fn bench_distributions(c: &mut Criterion) {
    let mut group = c.benchmark_group("distributions");
    let mut rng = Generator::from_seed(42);

    group.bench_function("normal", |b| {
        b.iter(|| black_box(rng.normal(0.0, 1.0).unwrap()))
    });
    group.bench_function("exponential", |b| {
        b.iter(|| black_box(rng.exponential(1.0).unwrap()))
    });

    // binomial is O(trials)
    for trials in [10, 100, 1_000] {
        group.bench_with_input(BenchmarkId::new("binomial", trials), &trials, |b, &n| {
            b.iter(|| black_box(rng.binomial(n, 0.3).unwrap()))
        });
    }

    group.finish();
}

fn bench_weighted_pick(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighted_pick");
    let mut rng = Generator::from_seed(42);

    for size in [10, 100, 1_000] {
        let items: Vec<usize> = (0..size).collect();
        let weights: Vec<f64> = (0..size).map(|i| (i % 7 + 1) as f64).collect();
        group.bench_with_input(BenchmarkId::new("items", size), &size, |b, _| {
            b.iter(|| black_box(*rng.weighted_pick(&items, &weights).unwrap()))
        });
    }

    group.finish();
}

fn bench_arrays(c: &mut Criterion) {
    let mut group = c.benchmark_group("arrays");
    let mut rng = Generator::from_seed(42);

    for n in [100, 10_000] {
        group.bench_with_input(BenchmarkId::new("permutation", n), &n, |b, &n| {
            b.iter(|| black_box(array::permutation(&mut rng, n)))
        });
    }

    let mut values: Vec<u32> = (0..10_000).collect();
    group.bench_function("shuffle_10000", |b| {
        b.iter(|| {
            array::shuffle(&mut rng, &mut values);
            black_box(values[0])
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_uniform,
    bench_distributions,
    bench_weighted_pick,
    bench_arrays
);
criterion_main!(benches);
