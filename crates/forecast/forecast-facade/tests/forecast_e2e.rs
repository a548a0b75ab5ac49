//! End-to-end tests for forecast-facade
//!
//! Full forecasting workflows on a synthetic daily sales history.

use forecast_facade::{
    ClassicalDecomposer, Decomposer, ForecastConfig, ForecastModel, Forecaster,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Two years of daily sales: linear growth, a weekly cycle and noise.
fn daily_sales() -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..730)
        .map(|i| {
            let weekday = [120.0, 40.0, -10.0, -30.0, -60.0, -80.0, 20.0][i % 7];
            2000.0 + 4.0 * i as f64 + weekday + rng.gen_range(-25.0..25.0)
        })
        .collect()
}

#[test]
fn e2e_forecasts_continue_growth() {
    let sales = daily_sales();
    let config = ForecastConfig {
        models: vec![ForecastModel::LinearTrend, ForecastModel::ExponentialSmoothing],
        ..ForecastConfig::default()
    };
    let bundle = Forecaster::new(&config).unwrap().forecast_all(&sales);
    let last_week: f64 = sales[723..].iter().sum::<f64>() / 7.0;

    assert!(bundle.failures.is_empty(), "{:?}", bundle.failures);
    for result in &bundle.results {
        assert_eq!(result.horizon(), 30);
        let values = result.values();
        let next_month: f64 = values[23..].iter().sum::<f64>() / 7.0;
        assert!(
            next_month > last_week,
            "{} forecast {next_month} below recent level {last_week}",
            result.model
        );
    }
}

#[test]
fn e2e_holt_winters_keeps_weekly_shape() {
    let sales = daily_sales();
    let config = ForecastConfig {
        horizon: 14,
        models: vec![ForecastModel::ExponentialSmoothing],
        ..ForecastConfig::default()
    };
    let forecaster = Forecaster::new(&config).unwrap();
    let result = forecaster
        .forecast_model(ForecastModel::ExponentialSmoothing, &sales)
        .unwrap();

    // Index 730 falls on cycle position 2, 735 on position 0
    let points = &result.points;
    assert_eq!(points[0].index, 730);
    assert!(points[5].value > points[3].value);
    assert!(points[5].value - points[3].value > 100.0);
}

#[test]
fn e2e_decomposition_recovers_weekday_effects() {
    let sales = daily_sales();
    let result = ClassicalDecomposer::additive().decompose(&sales, 7).unwrap();
    let expected = [120.0, 40.0, -10.0, -30.0, -60.0, -80.0, 20.0];
    let offset = expected.iter().sum::<f64>() / 7.0;

    for (index, want) in result.seasonal_indices().iter().zip(expected) {
        assert!((index - (want - offset)).abs() < 10.0, "{index} vs {want}");
    }
    assert!((result.trend[400] - (2000.0 + 1600.0)).abs() < 20.0);
}

#[test]
fn e2e_bundle_serializes() {
    let sales = daily_sales();
    let config = ForecastConfig {
        horizon: 3,
        models: vec![ForecastModel::LinearTrend, ForecastModel::Arima],
        ..ForecastConfig::default()
    };
    let bundle = Forecaster::new(&config).unwrap().forecast_all(&sales[..8]);

    let json = serde_json::to_value(&bundle).unwrap();
    assert_eq!(json["results"][0]["model"], "linear_trend");
    assert_eq!(json["results"][0]["points"][0]["index"], 8);
    assert_eq!(json["failures"][0]["model"], "arima");
    assert!(json["failures"][0]["reason"].is_string());
}
