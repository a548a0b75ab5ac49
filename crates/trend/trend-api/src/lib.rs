//! Trend Characterisation API
//!
//! Configuration for trend analysis.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use trend_spi::{Result, TrendDirection, TrendError, TrendReport};

/// Trend analysis configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// Half-width of the slope band classified as stable (default: 0.01).
    /// The band is in value units per step, so scale accordingly.
    pub stable_slope: f64,
    /// Trailing moving average window (default: 30).
    pub moving_average_window: usize,
    /// Largest autocorrelation lag searched for seasonality (default: 365).
    pub max_lag: usize,
    /// Minimum autocorrelation for a seasonal peak (default: 0.5).
    pub seasonality_min_height: f64,
    /// Stationarity p-value threshold (default: 0.05).
    pub significance: f64,
    /// Upper bound on ADF lagged differences; derived from the sample size
    /// when unset.
    pub adf_max_lag: Option<usize>,
    /// Minimum prominence for peaks and troughs; 10% of the value range
    /// when unset.
    pub peak_prominence: Option<f64>,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            stable_slope: 0.01,
            moving_average_window: 30,
            max_lag: 365,
            seasonality_min_height: 0.5,
            significance: 0.05,
            adf_max_lag: None,
            peak_prominence: None,
        }
    }
}

impl TrendConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.stable_slope >= 0.0 && self.stable_slope.is_finite()) {
            return Err(TrendError::invalid_parameter(
                "trend.stable_slope",
                "must be non-negative",
            ));
        }
        if self.moving_average_window == 0 {
            return Err(TrendError::invalid_parameter(
                "trend.moving_average_window",
                "must be positive",
            ));
        }
        if self.max_lag < 2 {
            return Err(TrendError::invalid_parameter(
                "trend.max_lag",
                "must be at least 2",
            ));
        }
        if !(self.significance > 0.0 && self.significance < 1.0) {
            return Err(TrendError::invalid_parameter(
                "trend.significance",
                "must be in (0, 1)",
            ));
        }
        if let Some(prominence) = self.peak_prominence {
            if !(prominence >= 0.0 && prominence.is_finite()) {
                return Err(TrendError::invalid_parameter(
                    "trend.peak_prominence",
                    "must be non-negative",
                ));
            }
        }
        Ok(())
    }
}
