//! Forecast Service Provider Interface
//!
//! Defines the forecasting strategy and decomposition contracts, their
//! result models and the error type.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{Decomposer, ForecastStrategy};
pub use error::{ForecastError, Result};
pub use model::{
    Capability, DecompositionResult, ForecastBundle, ForecastFailure, ForecastModel,
    ForecastPoint, ForecastResult,
};

pub use algorithm_spi::SeasonalType;
