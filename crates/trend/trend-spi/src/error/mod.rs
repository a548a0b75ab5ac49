//! Error types for trend characterisation.

mod trend_error;

pub use trend_error::{Result, TrendError};
