//! Seasonality detection by autocorrelation peaks.

use algorithm_core::{find_peaks, stats, PeakOptions};
use trend_spi::SeasonalityReport;

/// Autocorrelation at lags `1..min(max_lag, n)`; entry `i` is lag `i + 1`.
///
/// Undefined correlations (constant stretches, too few pairs) are `NaN`.
pub fn autocorrelation(data: &[f64], max_lag: usize) -> Vec<f64> {
    (1..max_lag.min(data.len()))
        .map(|lag| stats::lagged_autocorrelation(data, lag))
        .collect()
}

/// Find seasonal lags as peaks of the autocorrelation function at or above
/// `min_height`. The primary period is the smallest such lag.
pub fn detect_seasonality(data: &[f64], max_lag: usize, min_height: f64) -> SeasonalityReport {
    let acf = autocorrelation(data, max_lag);
    let peak_lags: Vec<usize> = find_peaks(&acf, PeakOptions::with_height(min_height))
        .into_iter()
        .map(|p| p.index + 1)
        .collect();

    match peak_lags.first() {
        Some(&period) => SeasonalityReport {
            has_seasonality: true,
            primary_period: Some(period),
            peak_lags,
        },
        None => SeasonalityReport::none(),
    }
}
