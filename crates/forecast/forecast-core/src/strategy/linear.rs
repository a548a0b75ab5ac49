//! Linear trend extrapolation.

use super::require_horizon;
use crate::confidence::interval_from_residuals;
use algorithm_core::{LinearRegression, Predictor};
use forecast_spi::{Capability, ForecastModel, ForecastResult, ForecastStrategy, Result};

/// Least squares line over the index, extended past the end of the series.
///
/// Bounds come from the in-sample residual spread.
#[derive(Debug, Clone)]
pub struct LinearTrendStrategy {
    confidence_level: f64,
}

impl LinearTrendStrategy {
    pub const MIN_HISTORY: usize = 2;

    pub fn new(confidence_level: f64) -> Self {
        Self { confidence_level }
    }
}

impl Default for LinearTrendStrategy {
    fn default() -> Self {
        Self::new(0.95)
    }
}

impl ForecastStrategy for LinearTrendStrategy {
    fn model(&self) -> ForecastModel {
        ForecastModel::LinearTrend
    }

    fn capability(&self, history_len: usize) -> Capability {
        Capability::for_history(history_len, Self::MIN_HISTORY, true)
    }

    fn forecast(&self, series: &[f64], horizon: usize) -> Result<ForecastResult> {
        require_horizon(horizon)?;
        let mut model = LinearRegression::new();
        model.fit(series)?;
        let values = model.predict(horizon)?;
        let interval =
            interval_from_residuals(values, &model.residuals(series), self.confidence_level);
        Ok(ForecastResult::from_interval(
            ForecastModel::LinearTrend,
            series.len(),
            interval,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forecast_spi::ForecastError;

    #[test]
    fn test_arithmetic_series_extends() {
        let data: Vec<f64> = (0..10).map(|i| 100.0 + 10.0 * i as f64).collect();
        let result = LinearTrendStrategy::default().forecast(&data, 1).unwrap();

        assert_eq!(result.points.len(), 1);
        assert_eq!(result.points[0].index, 10);
        assert!((result.points[0].value - 200.0).abs() < 1e-9);
        assert!(result.has_intervals());
    }

    #[test]
    fn test_single_point_fails() {
        assert!(matches!(
            LinearTrendStrategy::default().forecast(&[1.0], 3),
            Err(ForecastError::InsufficientHistory { required: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_zero_horizon() {
        assert!(matches!(
            LinearTrendStrategy::default().forecast(&[1.0, 2.0], 0),
            Err(ForecastError::InvalidParameter { .. })
        ));
    }
}
