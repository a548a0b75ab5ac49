//! Whole-series trend characterisation.

use crate::direction::fit_trend;
use crate::extrema::locate_extrema;
use crate::growth::growth_metrics;
use crate::seasonality::detect_seasonality;
use crate::stationarity::AugmentedDickeyFuller;
use tracing::{debug, warn};
use trend_api::TrendConfig;
use trend_spi::{ExtremaReport, Result, StationarityTest, TrendError, TrendReport};

/// Characterises direction, seasonality, growth and stationarity of a
/// series.
///
/// A failing stationarity test is recorded on the report and does not fail
/// the analysis.
pub struct TrendAnalyzer {
    config: TrendConfig,
    stationarity: Box<dyn StationarityTest>,
}

impl TrendAnalyzer {
    pub fn new(config: TrendConfig) -> Result<Self> {
        config.validate()?;
        let adf = AugmentedDickeyFuller::new(config.significance).with_max_lag(config.adf_max_lag);
        Ok(Self {
            config,
            stationarity: Box::new(adf),
        })
    }

    /// Replace the stationarity test.
    pub fn with_stationarity_test(mut self, test: impl StationarityTest + 'static) -> Self {
        self.stationarity = Box::new(test);
        self
    }

    pub fn config(&self) -> &TrendConfig {
        &self.config
    }

    pub fn analyze(&self, series: &[f64]) -> Result<TrendReport> {
        let trend = fit_trend(
            series,
            self.config.stable_slope,
            self.config.moving_average_window,
        )?;
        let seasonality = detect_seasonality(
            series,
            self.config.max_lag,
            self.config.seasonality_min_height,
        );
        let growth = growth_metrics(series).ok_or(TrendError::InsufficientData {
            required: 1,
            actual: 0,
        })?;

        let (stationarity, stationarity_error) = match self.stationarity.test(series) {
            Ok(report) => (Some(report), None),
            Err(err) => {
                warn!(test = self.stationarity.name(), error = %err, "stationarity test failed");
                (None, Some(err.to_string()))
            }
        };

        debug!(
            len = series.len(),
            direction = %trend.direction,
            slope = trend.slope,
            seasonal = seasonality.has_seasonality,
            "trend analysed"
        );
        Ok(TrendReport {
            trend,
            seasonality,
            growth,
            stationarity,
            stationarity_error,
        })
    }

    /// Peaks and troughs at the configured prominence.
    pub fn extrema(&self, series: &[f64]) -> ExtremaReport {
        locate_extrema(series, self.config.peak_prominence)
    }
}

impl Default for TrendAnalyzer {
    fn default() -> Self {
        Self {
            config: TrendConfig::default(),
            stationarity: Box::new(AugmentedDickeyFuller::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trend_spi::{StationarityReport, TrendDirection};

    struct AlwaysFails;

    impl StationarityTest for AlwaysFails {
        fn name(&self) -> &str {
            "always-fails"
        }

        fn test(&self, _series: &[f64]) -> Result<StationarityReport> {
            Err(TrendError::ModelConvergence("no".to_string()))
        }
    }

    fn ramp(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| 1000.0 + 5.0 * i as f64 + if i % 2 == 0 { 3.0 } else { -3.0 })
            .collect()
    }

    #[test]
    fn test_report_populates() {
        let report = TrendAnalyzer::default().analyze(&ramp(60)).unwrap();

        assert_eq!(report.direction(), TrendDirection::Upward);
        assert!(report.trend.strength > 0.99);
        assert!(report.trend.moving_average.is_some());
        assert!(report.growth.month_over_month.is_some());
        assert!(report.stationarity.is_some() || report.stationarity_error.is_some());
    }

    #[test]
    fn test_stationarity_failure_is_not_fatal() {
        let analyzer = TrendAnalyzer::default().with_stationarity_test(AlwaysFails);
        let report = analyzer.analyze(&ramp(20)).unwrap();

        assert_eq!(report.stationarity, None);
        assert_eq!(
            report.stationarity_error.as_deref(),
            Some("Model failed to converge: no")
        );
        assert_eq!(report.direction(), TrendDirection::Upward);
    }

    #[test]
    fn test_short_series_still_reports_without_stationarity() {
        let report = TrendAnalyzer::default().analyze(&[1.0, 2.0, 3.0]).unwrap();
        assert!(report.stationarity.is_none());
        assert!(report.stationarity_error.is_some());
    }

    #[test]
    fn test_invalid_config() {
        let config = TrendConfig {
            max_lag: 0,
            ..TrendConfig::default()
        };
        assert!(TrendAnalyzer::new(config).is_err());
    }
}
