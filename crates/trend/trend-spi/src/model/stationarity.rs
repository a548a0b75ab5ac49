//! Unit-root test outcome.

use serde::{Deserialize, Serialize};

/// Test statistic thresholds at the conventional significance levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriticalValues {
    pub one_percent: f64,
    pub five_percent: f64,
    pub ten_percent: f64,
}

/// Result of a stationarity test.
///
/// A degenerate series (no variation) has no statistic; it is reported as
/// stationary with a p-value of zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationarityReport {
    pub statistic: Option<f64>,
    pub p_value: f64,
    pub critical_values: Option<CriticalValues>,
    pub is_stationary: bool,
    /// Lagged difference terms in the chosen regression
    pub used_lag: usize,
    /// Observations in the chosen regression
    pub nobs: usize,
    pub degenerate: bool,
}

impl StationarityReport {
    pub fn degenerate(nobs: usize) -> Self {
        Self {
            statistic: None,
            p_value: 0.0,
            critical_values: None,
            is_stationary: true,
            used_lag: 0,
            nobs,
            degenerate: true,
        }
    }
}
