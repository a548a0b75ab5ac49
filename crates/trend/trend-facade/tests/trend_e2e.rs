//! End-to-end tests for trend-facade
//!
//! Full trend analyses of synthetic business metrics.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use trend_facade::{TrendAnalyzer, TrendConfig, TrendDirection};

/// Two years of daily sales: growth, a weekly cycle and noise.
fn daily_sales() -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..730)
        .map(|i| {
            let t = i as f64;
            let weekly = 150.0 * (2.0 * std::f64::consts::PI * t / 7.0).sin();
            10_000.0 + 4.0 * t + weekly + rng.gen_range(-20.0..20.0)
        })
        .collect()
}

#[test]
fn e2e_growing_weekly_sales() {
    let config = TrendConfig {
        max_lag: 60,
        ..TrendConfig::default()
    };
    let report = TrendAnalyzer::new(config).unwrap().analyze(&daily_sales()).unwrap();

    assert_eq!(report.direction(), TrendDirection::Upward);
    assert!((report.trend.slope - 4.0).abs() < 0.1);
    assert!(report.trend.strength > 0.9);

    assert!(report.seasonality.has_seasonality);
    assert_eq!(report.seasonality.primary_period, Some(7));

    let growth = &report.growth;
    assert!(growth.year_over_year.unwrap() > 0.0);
    assert!(growth.cagr.unwrap() > 0.0);
    assert!(growth.current_value > growth.start_value);

    let stationarity = report.stationarity.as_ref().unwrap();
    assert!(stationarity.critical_values.is_some());
    assert!(stationarity.used_lag <= 20);
}

#[test]
fn e2e_extrema_of_weekly_cycle() {
    let data: Vec<f64> = (0..70)
        .map(|i| 500.0 + 100.0 * (2.0 * std::f64::consts::PI * i as f64 / 7.0).sin())
        .collect();
    let report = TrendAnalyzer::default().extrema(&data);

    assert_eq!(report.peak_count(), 10);
    assert_eq!(report.trough_count(), 10);
    assert!(report.peaks.iter().all(|p| p.value > 590.0));
    assert!(report.troughs.iter().all(|t| t.value < 410.0));
}

#[test]
fn e2e_report_serializes() {
    let report = TrendAnalyzer::default().analyze(&daily_sales()[..100]).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["trend"]["direction"], "upward");
    assert!(json["growth"]["year_over_year"].is_null());
    assert!(json["stationarity"]["p_value"].is_number());
}
