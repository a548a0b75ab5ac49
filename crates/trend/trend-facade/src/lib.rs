//! Trend Characterisation Facade
//!
//! Unified re-exports for trend analysis:
//! - Report models, the stationarity contract and errors from SPI
//! - `TrendConfig` from API
//! - The analyzer and the individual analyses from Core

// Re-export everything from SPI
pub use trend_spi::*;

// Re-export everything from API
pub use trend_api::*;

// Re-export everything from Core
pub use trend_core::*;
