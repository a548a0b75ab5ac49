//! Contract definitions for forecasting.
//!
//! This module contains trait definitions that providers must implement.

mod decomposer;
mod forecast_strategy;

pub use decomposer::Decomposer;
pub use forecast_strategy::ForecastStrategy;
