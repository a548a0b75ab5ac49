//! Forecast Facade
//!
//! High-level API for decomposition and forecasting. Re-exports all public
//! types from the forecast stack for convenient usage.

// Re-export everything from SPI
pub use forecast_spi::*;

// Re-export configuration from API
pub use forecast_api::{DecompositionConfig, ForecastConfig};

// Re-export core modules and main types
pub use forecast_core::*;
