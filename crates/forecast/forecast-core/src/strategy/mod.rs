//! Forecasting strategies.
//!
//! Each strategy wraps one model from `algorithm-core` behind the
//! [`ForecastStrategy`](forecast_spi::ForecastStrategy) contract and fits a
//! fresh model on every call.

mod arima;
mod exponential;
mod linear;

pub use arima::ArimaStrategy;
pub use exponential::ExponentialSmoothingStrategy;
pub use linear::LinearTrendStrategy;

use forecast_spi::{ForecastError, Result};

fn require_horizon(horizon: usize) -> Result<()> {
    if horizon == 0 {
        return Err(ForecastError::invalid_parameter(
            "horizon",
            "must be positive",
        ));
    }
    Ok(())
}
