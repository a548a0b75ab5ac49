//! Consensus engine benchmarks.
//!
//! Run with: cargo bench -p anomaly-core

use anomaly_core::{ConsensusEngine, IsolationForestDetector};
use anomaly_spi::{FeatureMatrix, MultivariateDetector};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn generate_matrix(n: usize) -> FeatureMatrix {
    let sales: Vec<f64> = (0..n)
        .map(|i| 1000.0 + (i as f64 * 0.1).sin() * 100.0)
        .collect();
    let orders: Vec<f64> = (0..n)
        .map(|i| 50.0 + (i as f64 * 0.2).cos() * 5.0)
        .collect();
    FeatureMatrix::new([("sales", sales), ("orders", orders)])
        .map(FeatureMatrix::with_time_index)
        .unwrap()
}

fn bench_consensus(c: &mut Criterion) {
    let mut group = c.benchmark_group("consensus");
    let engine = ConsensusEngine::default();

    for size in [365, 1_000, 5_000] {
        let matrix = generate_matrix(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &matrix, |b, m| {
            b.iter(|| engine.run(black_box(m)).unwrap());
        });
    }
    group.finish();
}

fn bench_isolation_forest(c: &mut Criterion) {
    let mut group = c.benchmark_group("isolation_forest");
    let detector = IsolationForestDetector::default();

    for size in [365, 5_000] {
        let matrix = generate_matrix(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &matrix, |b, m| {
            b.iter(|| detector.detect(black_box(m)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_consensus, bench_isolation_forest);
criterion_main!(benches);
