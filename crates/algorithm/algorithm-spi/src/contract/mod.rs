//! Contract traits for algorithm implementations
//!
//! - [`Predictor`]: The primary trait for time series prediction
//! - [`IntervalPredictor`]: Extension for models that produce prediction intervals

mod predictor;

pub use predictor::{IntervalPredictor, Predictor};
