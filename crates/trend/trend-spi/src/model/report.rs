//! Per-series trend report.

use super::{StationarityReport, TrendDirection};
use serde::{Deserialize, Serialize};

/// Least squares trend over the observation index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendFit {
    pub direction: TrendDirection,
    pub slope: f64,
    pub intercept: f64,
    /// R² of the fit, in `[0, 1]`
    pub strength: f64,
    /// Last value of the trailing moving average, `None` with short history
    pub moving_average: Option<f64>,
}

/// Autocorrelation peak search outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalityReport {
    pub has_seasonality: bool,
    pub primary_period: Option<usize>,
    /// Every lag whose autocorrelation peaked above the height filter
    pub peak_lags: Vec<usize>,
}

impl SeasonalityReport {
    pub fn none() -> Self {
        Self {
            has_seasonality: false,
            primary_period: None,
            peak_lags: Vec::new(),
        }
    }
}

/// Growth rates in percent. Each rate is `None` when the history is too
/// short or the rate is undefined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthMetrics {
    pub current_value: f64,
    pub start_value: f64,
    pub month_over_month: Option<f64>,
    /// Change against the value one year back. `None` when that base is
    /// exactly zero, never an infinite rate.
    pub year_over_year: Option<f64>,
    pub cagr: Option<f64>,
    pub average_growth_rate: Option<f64>,
}

/// Everything trend analysis says about one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendReport {
    pub trend: TrendFit,
    pub seasonality: SeasonalityReport,
    pub growth: GrowthMetrics,
    pub stationarity: Option<StationarityReport>,
    /// Why the stationarity test did not produce a report
    pub stationarity_error: Option<String>,
}

impl TrendReport {
    pub fn direction(&self) -> TrendDirection {
        self.trend.direction
    }

    pub fn is_stationary(&self) -> Option<bool> {
        self.stationarity.as_ref().map(|s| s.is_stationary)
    }
}
