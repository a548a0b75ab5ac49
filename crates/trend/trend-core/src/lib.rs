//! Trend Characterisation Core
//!
//! Implementations behind [`TrendAnalyzer`]:
//!
//! - [`direction`]: least squares slope, R² and trailing moving average
//! - [`seasonality`]: autocorrelation peak search
//! - [`growth`]: month-over-month, year-over-year, CAGR
//! - [`stationarity`]: augmented Dickey-Fuller test
//! - [`extrema`]: prominence-filtered peaks and troughs

pub mod direction;
pub mod extrema;
pub mod growth;
pub mod seasonality;
pub mod stationarity;

mod analyzer;

pub use analyzer::TrendAnalyzer;
pub use direction::{fit_trend, trailing_mean};
pub use extrema::locate_extrema;
pub use growth::growth_metrics;
pub use seasonality::{autocorrelation, detect_seasonality};
pub use stationarity::AugmentedDickeyFuller;
