//! Forecast Core
//!
//! Core implementations for seasonal decomposition, the forecasting
//! strategies and the [`Forecaster`] that runs them side by side.

pub mod confidence;
pub mod decomposition;
pub mod strategy;

mod forecaster;

// Re-export SPI traits for implementations
pub use forecast_spi::{
    Capability, DecompositionResult, Decomposer, ForecastBundle, ForecastError, ForecastModel,
    ForecastResult, ForecastStrategy, Result,
};

// Re-export main types
pub use algorithm_core::stats::interpolate_missing;
pub use decomposition::{decompose, ClassicalDecomposer};
pub use forecaster::Forecaster;
pub use strategy::{ArimaStrategy, ExponentialSmoothingStrategy, LinearTrendStrategy};
