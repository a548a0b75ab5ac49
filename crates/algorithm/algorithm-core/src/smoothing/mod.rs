//! Smoothing algorithms for time series data
//!
//! - **Holt-Winters**: triple exponential smoothing with level, trend and
//!   seasonal components

pub mod exponential;

pub use exponential::{HoltWinters, SMOOTHING_GRID};
