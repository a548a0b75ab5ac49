//! Additive Holt-Winters forecasting.

use super::require_horizon;
use algorithm_core::{HoltWinters, Predictor, SeasonalType};
use forecast_spi::{
    Capability, ForecastError, ForecastModel, ForecastResult, ForecastStrategy, Result,
};

/// Triple exponential smoothing with additive trend and season.
///
/// Smoothing parameters are chosen per call by grid search. Needs two full
/// seasonal cycles of history; callers typically fall back to
/// [`LinearTrendStrategy`](super::LinearTrendStrategy) when it has fewer.
#[derive(Debug, Clone)]
pub struct ExponentialSmoothingStrategy {
    period: usize,
}

impl ExponentialSmoothingStrategy {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn min_history(&self) -> usize {
        2 * self.period
    }
}

impl Default for ExponentialSmoothingStrategy {
    fn default() -> Self {
        Self::new(7)
    }
}

impl ForecastStrategy for ExponentialSmoothingStrategy {
    fn model(&self) -> ForecastModel {
        ForecastModel::ExponentialSmoothing
    }

    fn capability(&self, history_len: usize) -> Capability {
        Capability::for_history(history_len, self.min_history(), false)
    }

    fn forecast(&self, series: &[f64], horizon: usize) -> Result<ForecastResult> {
        require_horizon(horizon)?;
        if series.len() < self.min_history() {
            return Err(ForecastError::InsufficientHistory {
                required: self.min_history(),
                actual: series.len(),
            });
        }
        let model = HoltWinters::optimized(series, self.period, SeasonalType::Additive)?;
        let values = model.predict(horizon)?;
        Ok(ForecastResult::from_values(
            ForecastModel::ExponentialSmoothing,
            series.len(),
            values,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weekly(n: usize) -> Vec<f64> {
        let pattern = [10.0, -5.0, 0.0, 5.0, -10.0, 2.0, -2.0];
        (0..n).map(|i| 500.0 + 2.0 * i as f64 + pattern[i % 7]).collect()
    }

    #[test]
    fn test_follows_seasonal_pattern() {
        let data = weekly(56);
        let result = ExponentialSmoothingStrategy::new(7).forecast(&data, 7).unwrap();

        assert_eq!(result.horizon(), 7);
        assert_eq!(result.points[0].index, 56);
        assert!(!result.has_intervals());
        // step 56 is position 0 of the cycle, step 60 position 4
        assert!(result.points[0].value > result.points[4].value);
    }

    #[test]
    fn test_needs_two_cycles() {
        let strategy = ExponentialSmoothingStrategy::new(7);
        assert!(matches!(
            strategy.forecast(&weekly(13), 5),
            Err(ForecastError::InsufficientHistory { required: 14, actual: 13 })
        ));
        assert!(!strategy.capability(13).available);
        assert!(strategy.capability(14).available);
    }
}
