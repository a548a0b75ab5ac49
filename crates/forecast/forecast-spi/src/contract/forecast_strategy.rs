//! Forecast strategy trait definition

use crate::{Capability, ForecastModel, ForecastResult, Result};

/// One forecasting model behind a common (series, horizon) interface.
///
/// Strategies hold configuration only; each call fits a fresh model.
pub trait ForecastStrategy: Send + Sync {
    fn model(&self) -> ForecastModel;

    /// What this strategy can do with `history_len` observations.
    fn capability(&self, history_len: usize) -> Capability;

    /// Forecast `horizon` steps past the end of `series`.
    fn forecast(&self, series: &[f64], horizon: usize) -> Result<ForecastResult>;
}
