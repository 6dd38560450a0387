//! Benchmarks for batched brute-force KNN.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pointops::prelude::*;
use rand::prelude::*;

fn generate_batch(batches: usize, points: usize, seed: u64) -> PointBatch<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let clouds: Vec<Vec<[f32; 3]>> = (0..batches)
        .map(|_| {
            (0..points)
                .map(|_| [rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>()])
                .collect()
        })
        .collect();
    PointBatch::from_clouds(clouds).unwrap()
}

fn benchmark_self_knn(c: &mut Criterion) {
    let mut group = c.benchmark_group("self_knn");

    for &n in &[256, 1024, 4096] {
        let points = generate_batch(2, n, 42);
        let searcher = KnnSearcher::with_neighbors(8);

        group.bench_with_input(BenchmarkId::new("k8", n), &n, |b, _| {
            b.iter(|| black_box(searcher.query(&points, None).unwrap()))
        });
    }

    group.finish();
}

fn benchmark_separate_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("separate_queries");

    let points = generate_batch(2, 2048, 42);
    for &m in &[16, 128, 512] {
        let queries = generate_batch(2, m, 123);
        let searcher = KnnSearcher::with_neighbors(16);

        group.bench_with_input(BenchmarkId::new("n2048_k16", m), &m, |b, _| {
            b.iter(|| black_box(searcher.query(&points, Some(&queries)).unwrap()))
        });
    }

    group.finish();
}

fn benchmark_blocking_vs_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("execution");

    let points = generate_batch(16, 512, 42);

    let blocking = KnnSearcher::new(KnnConfig::new(8).with_blocking(true));
    group.bench_function("blocking_b16_n512", |b| {
        b.iter(|| black_box(blocking.query(&points, None).unwrap()))
    });

    let parallel = KnnSearcher::new(KnnConfig::new(8).with_parallel_batch_threshold(1));
    group.bench_function("parallel_b16_n512", |b| {
        b.iter(|| black_box(parallel.query(&points, None).unwrap()))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_self_knn,
    benchmark_separate_queries,
    benchmark_blocking_vs_parallel
);
criterion_main!(benches);
