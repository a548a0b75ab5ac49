//! End-to-end tests for anomaly-facade
//!
//! Tests complete ensemble workflows using only the facade's API.

use anomaly_facade::{
    ConsensusEngine, DetectionMethod, DetectorId, EnsembleConfig, FeatureMatrix, ZScoreConfig,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;

const OUTLIERS: [usize; 3] = [50, 180, 300];

fn daily_revenue() -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(365);
    let noise = Normal::new(1000.0, 50.0).unwrap();
    (0..365).map(|_| rng.sample(noise)).collect()
}

fn revenue_with_outliers() -> Vec<f64> {
    let mut data = daily_revenue();
    for &i in &OUTLIERS {
        data[i] += 500.0; // 10 sigma
    }
    data
}

#[test]
fn e2e_injected_outliers_reach_consensus() {
    let matrix = FeatureMatrix::new([("revenue", revenue_with_outliers())])
        .unwrap()
        .with_time_index();

    let result = ConsensusEngine::default().run(&matrix).unwrap();

    for &i in &OUTLIERS {
        assert!(result.consensus[i], "row {i} missing from consensus");
        assert_eq!(result.vote_counts[i], 4, "row {i} votes");
    }

    let false_flags = result
        .consensus_indices()
        .into_iter()
        .filter(|i| !OUTLIERS.contains(i))
        .count();
    let rate = false_flags as f64 / (365 - OUTLIERS.len()) as f64;
    assert!(rate < 0.10, "false consensus rate {rate:.3}");
    assert!(result.skipped.is_empty());
}

#[test]
fn e2e_constant_series_has_no_flags() {
    let matrix = FeatureMatrix::new([("visits", vec![42.0; 100])])
        .unwrap()
        .with_time_index();

    let result = ConsensusEngine::default().run(&matrix).unwrap();
    let summary = result.summary();

    for method in [DetectionMethod::ZScore, DetectionMethod::Iqr] {
        let id = DetectorId::univariate(method, "visits");
        assert_eq!(summary.method_counts[&id], 0, "{id}");
    }
    assert_eq!(summary.consensus_anomalies, 0);
}

#[test]
fn e2e_multi_metric_summary() {
    let mut rng = StdRng::seed_from_u64(9);
    let revenue = revenue_with_outliers();
    let basket = Normal::new(80.0, 4.0).unwrap();
    let mut orders: Vec<f64> = (0..365).map(|_| rng.sample(basket)).collect();
    for &i in &OUTLIERS {
        orders[i] += 40.0;
    }
    let ratio: Vec<f64> = revenue.iter().zip(&orders).map(|(r, o)| r / o).collect();

    let matrix = FeatureMatrix::new([("revenue", revenue), ("orders", orders), ("aov", ratio)])
        .unwrap()
        .with_time_index();
    let result = ConsensusEngine::default().run(&matrix).unwrap();
    let summary = result.summary();

    // Three features with three univariate methods each, plus the forest
    assert_eq!(result.flag_set.len(), 10);
    assert_eq!(summary.total_records, 365);
    for &i in &OUTLIERS {
        assert!(result.consensus[i]);
        assert!(result.applicable_counts[i] >= 2);
    }
}

#[test]
fn e2e_configured_ensemble_without_time_index() {
    let config: EnsembleConfig = EnsembleConfig {
        zscore: ZScoreConfig::new(2.5),
        ..EnsembleConfig::default()
    };
    let matrix = FeatureMatrix::new([("revenue", revenue_with_outliers())]).unwrap();

    let result = ConsensusEngine::new(&config).unwrap().run(&matrix).unwrap();

    assert_eq!(result.skipped.len(), 1);
    assert_eq!(result.skipped[0].detector.method, DetectionMethod::MovingAverage);
    for &i in &OUTLIERS {
        assert!(result.consensus[i]);
        assert_eq!(result.vote_counts[i], 3);
    }
}
