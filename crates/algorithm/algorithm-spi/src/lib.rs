//! Algorithm Service Provider Interface
//!
//! Defines core traits and error types for time series models.
//!
//! This crate provides the foundational abstractions that all model
//! implementations must adhere to:
//!
//! - [`Predictor`]: The primary fit/predict trait
//! - [`IntervalPredictor`]: Extension for models that quantify forecast uncertainty
//! - [`TsError`]: Standardized error type for all algorithm operations
//! - [`Result`]: Convenient result type alias

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{IntervalPredictor, Predictor};
pub use error::{Result, TsError};
pub use model::{PredictionInterval, SeasonalType};
