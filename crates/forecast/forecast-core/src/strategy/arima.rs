//! ARIMA forecasting with prediction intervals.

use super::require_horizon;
use algorithm_core::{Arima, IntervalPredictor, Predictor};
use forecast_spi::{Capability, ForecastModel, ForecastResult, ForecastStrategy, Result};

/// ARIMA(p, d, q) with ψ-weight prediction intervals.
///
/// Estimates that are non-stationary or non-invertible surface as
/// `ModelConvergence`.
#[derive(Debug, Clone)]
pub struct ArimaStrategy {
    order: (usize, usize, usize),
    confidence_level: f64,
}

impl ArimaStrategy {
    pub fn new(order: (usize, usize, usize), confidence_level: f64) -> Self {
        Self {
            order,
            confidence_level,
        }
    }

    pub fn order(&self) -> (usize, usize, usize) {
        self.order
    }

    fn build(&self) -> Result<Arima> {
        let (p, d, q) = self.order;
        Ok(Arima::new(p, d, q)?)
    }
}

impl Default for ArimaStrategy {
    fn default() -> Self {
        Self::new((1, 1, 1), 0.95)
    }
}

impl ForecastStrategy for ArimaStrategy {
    fn model(&self) -> ForecastModel {
        ForecastModel::Arima
    }

    fn capability(&self, history_len: usize) -> Capability {
        match self.build() {
            Ok(model) => Capability::for_history(history_len, model.min_observations(), true),
            Err(_) => Capability {
                available: false,
                min_history: 0,
                intervals: true,
            },
        }
    }

    fn forecast(&self, series: &[f64], horizon: usize) -> Result<ForecastResult> {
        require_horizon(horizon)?;
        let mut model = self.build()?;
        model.fit(series)?;
        let interval = model.predict_interval(horizon, self.confidence_level)?;
        Ok(ForecastResult::from_interval(
            ForecastModel::Arima,
            series.len(),
            interval,
        ))
    }
}
