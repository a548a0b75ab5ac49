//! End-to-end tests for insight
//!
//! A year of daily store data with injected incidents, analysed as a whole.

use chrono::{Duration, NaiveDate};
use insight::anomaly::{DetectionMethod, DetectorId};
use insight::forecast::ForecastModel;
use insight::trend::TrendDirection;
use insight::{Dataset, InsightAnalyzer, InsightConfig, InsightSummary};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;

const INCIDENTS: [usize; 3] = [60, 190, 310];

fn store_year() -> Dataset {
    let mut rng = StdRng::seed_from_u64(99);
    let noise = Normal::new(0.0, 400.0).unwrap();
    let basket = Normal::new(400.0, 10.0).unwrap();
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let dates: Vec<NaiveDate> = (0..365).map(|i| start + Duration::days(i)).collect();

    let mut revenue: Vec<f64> = (0..365)
        .map(|i| 20_000.0 + 10.0 * i as f64 + rng.sample(noise))
        .collect();
    let mut orders: Vec<f64> = (0..365).map(|_| rng.sample(basket)).collect();
    for i in INCIDENTS {
        revenue[i] += 8_000.0;
        orders[i] += 150.0;
    }

    Dataset::new(dates)
        .with_metric("revenue", revenue)
        .unwrap()
        .with_metric("orders", orders)
        .unwrap()
}

fn store_year_with_ratio() -> Dataset {
    store_year()
        .with_ratio("average_order_value", "revenue", "orders")
        .unwrap()
}

#[test]
fn e2e_incidents_reach_consensus() {
    let report = InsightAnalyzer::default().analyze(&store_year()).unwrap();

    for i in INCIDENTS {
        assert!(report.anomalies.consensus[i], "incident at row {i} missed");
    }
    let false_alarms = report
        .anomalies
        .consensus_indices()
        .into_iter()
        .filter(|i| !INCIDENTS.contains(i))
        .count();
    assert!(false_alarms < 36, "{false_alarms} false alarms");
    assert!(report.anomalies.skipped.is_empty());
    assert_eq!(report.anomalies.flag_set.len(), 7);
}

#[test]
fn e2e_trend_bundle_per_metric() {
    let report = InsightAnalyzer::default()
        .analyze(&store_year_with_ratio())
        .unwrap();

    assert_eq!(report.metrics.len(), 3);
    assert!(report.failures.is_empty());

    let revenue = report.metric("revenue").unwrap();
    assert_eq!(revenue.trend.direction(), TrendDirection::Upward);
    assert!(revenue.trend.growth.year_over_year.is_some());
    assert!(revenue.decomposition.is_some());
    assert!(revenue
        .forecasts
        .get(ForecastModel::LinearTrend)
        .is_some());
    assert!(revenue.extrema.peak_indices().contains(&190));
}

#[test]
fn e2e_summary_payloads() {
    let report = InsightAnalyzer::default().analyze(&store_year()).unwrap();
    let summary = InsightSummary::from(&report);
    let structured = summary.structured();

    assert_eq!(structured["total_records"], 365);
    assert_eq!(
        structured["consensus_anomalies"],
        summary.consensus_anomalies
    );
    assert_eq!(structured["revenue.direction"], "upward");
    assert_eq!(structured["date_from"], "2023-01-01");
    assert!(structured["method_counts"]["zscore:revenue"].as_u64().unwrap() >= 3);
    assert!(summary
        .method_counts
        .contains_key(&DetectorId::multivariate(DetectionMethod::IsolationForest)));

    let text = summary.plain_text();
    assert!(text.starts_with("Analysed 365 records from 2023-01-01 to 2023-12-31."));
    assert!(text.contains("revenue: upward trend"));
}

#[test]
fn e2e_configured_run() {
    let config = InsightConfig::from_toml_str(
        r#"
        decompose = false

        [anomaly]
        methods = ["zscore", "iqr"]

        [forecast]
        horizon = 7
        models = ["linear_trend"]
        "#,
    )
    .unwrap();
    let report = InsightAnalyzer::new(config)
        .unwrap()
        .analyze(&store_year_with_ratio())
        .unwrap();

    assert_eq!(report.anomalies.flag_set.len(), 6);
    let orders = report.metric("orders").unwrap();
    assert!(orders.decomposition.is_none());
    assert!(orders.decomposition_error.is_none());
    assert_eq!(orders.forecasts.produced(), vec![ForecastModel::LinearTrend]);
    assert_eq!(orders.forecasts.results[0].horizon(), 7);
}
