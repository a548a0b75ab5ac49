//! Trend direction and strength.

use algorithm_core::{linalg, stats};
use trend_spi::{Result, TrendDirection, TrendError, TrendFit};

/// Fit `value ≈ intercept + slope · index` by least squares.
///
/// Missing values are left out of the fit but keep their index, so gaps do
/// not shift later observations. Strength is R², taken as 1.0 when the
/// series has no variation.
pub fn fit_trend(series: &[f64], stable_slope: f64, window: usize) -> Result<TrendFit> {
    let (rows, values): (Vec<Vec<f64>>, Vec<f64>) = series
        .iter()
        .enumerate()
        .filter(|(_, y)| !y.is_nan())
        .map(|(i, &y)| (vec![1.0, i as f64], y))
        .unzip();
    if values.len() < 2 {
        return Err(TrendError::InsufficientData {
            required: 2,
            actual: values.len(),
        });
    }

    let fit = linalg::ols(&rows, &values)?;
    let (intercept, slope) = (fit.coefficients[0], fit.coefficients[1]);

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let ss_tot: f64 = values.iter().map(|y| (y - mean).powi(2)).sum();
    let strength = if stats::is_negligible_spread(ss_tot / n, mean) {
        1.0
    } else {
        (1.0 - fit.ssr / ss_tot).clamp(0.0, 1.0)
    };

    Ok(TrendFit {
        direction: TrendDirection::classify(slope, stable_slope),
        slope,
        intercept,
        strength,
        moving_average: trailing_mean(series, window),
    })
}

/// Mean of the last `window` values; `None` when the history is shorter or
/// the window holds a missing value.
pub fn trailing_mean(series: &[f64], window: usize) -> Option<f64> {
    if window == 0 || series.len() < window {
        return None;
    }
    let tail = &series[series.len() - window..];
    if tail.iter().any(|x| x.is_nan()) {
        return None;
    }
    Some(tail.iter().sum::<f64>() / window as f64)
}
