//! End-to-end tests for algorithm-core
//!
//! Fit-then-forecast workflows on holdout splits, using only the public API.

use algorithm_core::prelude::*;
use algorithm_core::{find_peaks, stats, PeakOptions};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn mae(actual: &[f64], predicted: &[f64]) -> f64 {
    actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p).abs())
        .sum::<f64>()
        / actual.len() as f64
}

/// Daily signups growing by 3 a day with bounded noise.
fn signups(seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..120)
        .map(|i| 400.0 + 3.0 * i as f64 + rng.gen_range(-5.0..5.0))
        .collect()
}

/// Integrated AR(1): increments carry momentum from the previous step.
fn momentum_walk(seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut level = 250.0;
    let mut step = 0.0;
    (0..150)
        .map(|_| {
            step = 0.4 * step + rng.gen_range(-1.0..1.0);
            level += step;
            level
        })
        .collect()
}

/// Monthly bookings with an annual cycle.
fn monthly_bookings() -> Vec<f64> {
    (0..60)
        .map(|i| {
            let t = i as f64;
            100.0 + t * 0.3 + 15.0 * (t * std::f64::consts::PI / 6.0).sin()
        })
        .collect()
}

#[test]
fn e2e_linear_trend_holdout() {
    let data = signups(1);
    let (train, holdout) = data.split_at(90);

    let mut model = LinearRegression::new();
    model.fit(train).unwrap();
    assert!((model.slope() - 3.0).abs() < 0.2);
    assert!(model.r_squared() > 0.98);

    let forecast = model.predict(holdout.len()).unwrap();
    assert!(mae(holdout, &forecast) < 8.0);
}

#[test]
fn e2e_arima_interval_holdout() {
    let data = momentum_walk(5);
    let (train, holdout) = data.split_at(120);

    let mut model = Arima::new(1, 1, 0).unwrap();
    model.fit(train).unwrap();
    assert!(model.ar_coefficients()[0] > 0.0);

    let interval = model.predict_interval(holdout.len(), 0.95).unwrap();
    assert_eq!(interval.len(), holdout.len());
    let widths = interval.widths();
    assert!(widths.windows(2).all(|w| w[1] >= w[0]));
    assert!(mae(holdout, &interval.forecast) < 15.0);
}

#[test]
fn e2e_holt_winters_annual_cycle() {
    let data = monthly_bookings();
    let (train, holdout) = data.split_at(48);

    let model = HoltWinters::optimized(train, 12, SeasonalType::Additive).unwrap();
    assert_eq!(model.seasonal_components().len(), 12);

    let forecast = model.predict(holdout.len()).unwrap();
    assert!(mae(holdout, &forecast) < 5.0);
}

#[test]
fn e2e_boxed_models_share_one_loop() {
    let data = momentum_walk(9);
    let (train, holdout) = data.split_at(120);

    let mut models: Vec<Box<dyn Predictor>> = vec![
        Box::new(LinearRegression::new()),
        Box::new(Arima::new(1, 1, 0).unwrap()),
        Box::new(HoltWinters::new(0.3, 0.1, 0.2, 12, SeasonalType::Additive).unwrap()),
    ];

    for model in models.iter_mut() {
        assert!(!model.is_fitted());
        model.fit(train).unwrap();
        let forecast = model.predict(holdout.len()).unwrap();
        assert!(mae(holdout, &forecast).is_finite());
    }
}

#[test]
fn e2e_weekly_cycle_from_autocorrelation_peaks() {
    let data: Vec<f64> = (0..120)
        .map(|i| (i as f64 * 2.0 * std::f64::consts::PI / 7.0).sin())
        .collect();

    let acf: Vec<f64> = (1..60)
        .map(|lag| stats::lagged_autocorrelation(&data, lag))
        .collect();
    let peaks = find_peaks(&acf, PeakOptions::with_height(0.5));

    // acf[k] is lag k + 1
    assert_eq!(peaks.first().map(|p| p.index + 1), Some(7));
}
