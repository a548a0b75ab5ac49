//! Algorithm Core Implementations
//!
//! Numeric substrate shared by the analytic crates, plus the classical
//! forecasting models:
//!
//! - [`stats`]: missing-aware descriptive statistics, quantiles,
//!   correlation and normal distribution helpers
//! - [`linalg`]: small dense least squares
//! - [`signal`]: peak search with height and prominence filters
//! - [`smoothing`]: Holt-Winters exponential smoothing
//! - [`regression`]: Linear regression, ARIMA
//!
//! ## Example
//!
//! ```rust
//! use algorithm_core::prelude::*;
//!
//! let data: Vec<f64> = (0..10).map(|x| 100.0 + 10.0 * x as f64).collect();
//! let mut model = LinearRegression::new();
//! model.fit(&data).unwrap();
//! let forecast = model.predict(1).unwrap();
//! assert!((forecast[0] - 200.0).abs() < 1e-9);
//! ```

pub mod linalg;
pub mod regression;
pub mod signal;
pub mod smoothing;
pub mod stats;

// Re-export from SPI
pub use algorithm_spi::{
    IntervalPredictor, PredictionInterval, Predictor, Result, SeasonalType, TsError,
};

pub use regression::{Arima, LinearRegression};
pub use signal::{find_peaks, Peak, PeakOptions};
pub use smoothing::HoltWinters;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::regression::{Arima, LinearRegression};
    pub use crate::smoothing::HoltWinters;
    pub use algorithm_spi::{IntervalPredictor, PredictionInterval, Predictor, SeasonalType};
    pub use algorithm_spi::{Result, TsError};
}
