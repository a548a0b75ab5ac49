//! Runs several forecasting strategies over one series.

use crate::strategy::{ArimaStrategy, ExponentialSmoothingStrategy, LinearTrendStrategy};
use forecast_api::ForecastConfig;
use forecast_spi::{
    Capability, ForecastBundle, ForecastError, ForecastFailure, ForecastModel, ForecastResult,
    ForecastStrategy, Result,
};
use tracing::{debug, warn};

/// Multi-model forecaster.
///
/// Each strategy runs independently: a failure lands in
/// [`ForecastBundle::failures`] and the others still produce results.
pub struct Forecaster {
    strategies: Vec<Box<dyn ForecastStrategy>>,
    horizon: usize,
}

impl Forecaster {
    /// Build the strategies enabled in `config`.
    pub fn new(config: &ForecastConfig) -> Result<Self> {
        config.validate()?;
        let mut forecaster = Self::empty(config.horizon);
        for model in &config.models {
            forecaster = match model {
                ForecastModel::LinearTrend => {
                    forecaster.with_strategy(LinearTrendStrategy::new(config.confidence_level))
                }
                ForecastModel::ExponentialSmoothing => forecaster
                    .with_strategy(ExponentialSmoothingStrategy::new(config.seasonal_period)),
                ForecastModel::Arima => forecaster.with_strategy(ArimaStrategy::new(
                    config.arima_order,
                    config.confidence_level,
                )),
            };
        }
        Ok(forecaster)
    }

    /// A forecaster with no strategies registered.
    pub fn empty(horizon: usize) -> Self {
        Self {
            strategies: Vec::new(),
            horizon,
        }
    }

    pub fn with_strategy(mut self, strategy: impl ForecastStrategy + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }

    pub fn models(&self) -> Vec<ForecastModel> {
        self.strategies.iter().map(|s| s.model()).collect()
    }

    /// What every registered strategy can do with `history_len` points.
    pub fn capabilities(&self, history_len: usize) -> Vec<(ForecastModel, Capability)> {
        self.strategies
            .iter()
            .map(|s| (s.model(), s.capability(history_len)))
            .collect()
    }

    /// Run every strategy, collecting results and failures.
    pub fn forecast_all(&self, series: &[f64]) -> ForecastBundle {
        let mut bundle = ForecastBundle::default();
        for strategy in &self.strategies {
            match strategy.forecast(series, self.horizon) {
                Ok(result) => bundle.results.push(result),
                Err(err) => {
                    warn!(model = %strategy.model(), error = %err, "forecast failed");
                    bundle.failures.push(ForecastFailure {
                        model: strategy.model(),
                        reason: err.to_string(),
                    });
                }
            }
        }
        debug!(
            history = series.len(),
            horizon = self.horizon,
            produced = bundle.results.len(),
            failed = bundle.failures.len(),
            "forecasts computed"
        );
        bundle
    }

    /// Run the one registered strategy for `model`.
    pub fn forecast_model(&self, model: ForecastModel, series: &[f64]) -> Result<ForecastResult> {
        let strategy = self
            .strategies
            .iter()
            .find(|s| s.model() == model)
            .ok_or_else(|| {
                ForecastError::invalid_parameter("model", format!("{model} is not enabled"))
            })?;
        strategy.forecast(series, self.horizon)
    }

    /// Exponential smoothing, or the linear trend when the history is too
    /// short for two seasonal cycles.
    pub fn forecast_with_fallback(&self, series: &[f64]) -> Result<ForecastResult> {
        match self.forecast_model(ForecastModel::ExponentialSmoothing, series) {
            Err(ForecastError::InsufficientHistory { required, actual }) => {
                debug!(required, actual, "falling back to linear trend");
                match self.forecast_model(ForecastModel::LinearTrend, series) {
                    Err(ForecastError::InvalidParameter { .. }) => {
                        LinearTrendStrategy::default().forecast(series, self.horizon)
                    }
                    other => other,
                }
            }
            other => other,
        }
    }
}

impl Default for Forecaster {
    fn default() -> Self {
        // Defaults always validate
        Self::empty(30)
            .with_strategy(LinearTrendStrategy::default())
            .with_strategy(ExponentialSmoothingStrategy::default())
            .with_strategy(ArimaStrategy::default())
    }
}
