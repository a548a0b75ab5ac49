//! Augmented Dickey-Fuller unit root test.
//!
//! Regression with a constant:
//!
//! ```text
//! Δy_t = α + γ·y_{t-1} + Σ_{j=1..p} δ_j·Δy_{t-j} + ε_t
//! ```
//!
//! H0: γ = 0 (unit root, non-stationary). The lag order `p` is chosen by
//! AIC over a common sample; p-values use MacKinnon's (1994) response
//! surface and critical values MacKinnon's (2010) finite-sample table.

use algorithm_core::{linalg, stats};
use tracing::debug;
use trend_spi::{CriticalValues, Result, StationarityReport, StationarityTest, TrendError};

/// Shortest series the test will run on.
pub const MIN_OBSERVATIONS: usize = 6;

// Response surface for the constant-only regression with one regressor.
const TAU_MAX: f64 = 2.74;
const TAU_MIN: f64 = -18.83;
const TAU_STAR: f64 = -1.61;
const TAU_SMALL_P: [f64; 3] = [2.1659, 1.4412, 0.038269];
const TAU_LARGE_P: [f64; 4] = [1.7339, 0.93202, -0.12745, -0.010368];

// Coefficients on 1, 1/T, 1/T², 1/T³.
const CRIT_1: [f64; 4] = [-3.43035, -6.5393, -16.786, -79.433];
const CRIT_5: [f64; 4] = [-2.86154, -2.8903, -4.234, -40.040];
const CRIT_10: [f64; 4] = [-2.56677, -1.5384, -2.809, 0.0];

/// ADF test with a constant and automatic lag selection.
#[derive(Debug, Clone)]
pub struct AugmentedDickeyFuller {
    max_lag: Option<usize>,
    significance: f64,
}

impl AugmentedDickeyFuller {
    pub fn new(significance: f64) -> Self {
        Self {
            max_lag: None,
            significance,
        }
    }

    /// Search lag orders up to `max_lag` instead of the sample-size rule.
    pub fn with_max_lag(mut self, max_lag: Option<usize>) -> Self {
        self.max_lag = max_lag;
        self
    }

    /// Largest lag order searched for a series of `n` observations: Schwert's
    /// `ceil(12·(n/100)^¼)`, never more than `n/2 − 2`.
    pub fn lag_limit(&self, n: usize) -> usize {
        let schwert = (12.0 * (n as f64 / 100.0).powf(0.25)).ceil() as usize;
        self.max_lag.unwrap_or(schwert).min((n / 2).saturating_sub(2))
    }
}

impl Default for AugmentedDickeyFuller {
    fn default() -> Self {
        Self::new(0.05)
    }
}

impl StationarityTest for AugmentedDickeyFuller {
    fn name(&self) -> &str {
        "Augmented Dickey-Fuller"
    }

    fn test(&self, series: &[f64]) -> Result<StationarityReport> {
        let levels: Vec<f64> = stats::present(series).collect();
        let n = levels.len();
        if n < MIN_OBSERVATIONS {
            return Err(TrendError::InsufficientData {
                required: MIN_OBSERVATIONS,
                actual: n,
            });
        }
        let variance = stats::variance(&levels, 0).unwrap_or(0.0);
        let mean = stats::mean(&levels).unwrap_or(0.0);
        if stats::is_negligible_spread(variance, mean) {
            return Ok(StationarityReport::degenerate(n));
        }

        let diffs: Vec<f64> = levels.windows(2).map(|w| w[1] - w[0]).collect();
        let max_lag = self.lag_limit(n);

        // Every candidate uses the sample of the longest lag so AICs compare
        let common = diffs.len() - max_lag;
        let mut best = (f64::INFINITY, 0);
        for lag in 0..=max_lag {
            let (rows, y) = design(&levels, &diffs, lag, common);
            let aic = linalg::ols(&rows, &y)?.aic();
            if aic < best.0 {
                best = (aic, lag);
            }
        }
        let used_lag = best.1;

        let nobs = diffs.len() - used_lag;
        let (rows, y) = design(&levels, &diffs, used_lag, nobs);
        let fit = linalg::ols(&rows, &y)?;
        let statistic = fit.t_value(1);
        if !statistic.is_finite() {
            return Err(TrendError::ModelConvergence(
                "ADF statistic is undefined for an exact fit".to_string(),
            ));
        }

        let p_value = mackinnon_p_value(statistic);
        debug!(nobs, used_lag, statistic, p_value, "ADF test");
        Ok(StationarityReport {
            statistic: Some(statistic),
            p_value,
            critical_values: Some(critical_values(nobs)),
            is_stationary: p_value < self.significance,
            used_lag,
            nobs,
            degenerate: false,
        })
    }
}

/// Regression rows `[1, y_{t-1}, Δy_{t-1}, .., Δy_{t-lag}]` and targets
/// `Δy_t` for the last `nobs` differences.
fn design(levels: &[f64], diffs: &[f64], lag: usize, nobs: usize) -> (Vec<Vec<f64>>, Vec<f64>) {
    let start = diffs.len() - nobs;
    (start..diffs.len())
        .map(|t| {
            let mut row = Vec::with_capacity(lag + 2);
            row.push(1.0);
            row.push(levels[t]);
            row.extend((1..=lag).map(|j| diffs[t - j]));
            (row, diffs[t])
        })
        .unzip()
}

/// Approximate p-value of an ADF statistic (constant, no trend).
pub fn mackinnon_p_value(statistic: f64) -> f64 {
    if statistic > TAU_MAX {
        return 1.0;
    }
    if statistic < TAU_MIN {
        return 0.0;
    }
    let z = if statistic <= TAU_STAR {
        polyval(&TAU_SMALL_P, statistic)
    } else {
        polyval(&TAU_LARGE_P, statistic)
    };
    stats::normal_cdf(z)
}

/// Critical values for a regression on `nobs` observations.
pub fn critical_values(nobs: usize) -> CriticalValues {
    let inv = 1.0 / nobs as f64;
    CriticalValues {
        one_percent: polyval(&CRIT_1, inv),
        five_percent: polyval(&CRIT_5, inv),
        ten_percent: polyval(&CRIT_10, inv),
    }
}

/// Evaluate `c[0] + c[1]·x + c[2]·x² + …`.
fn polyval(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * x + c)
}
