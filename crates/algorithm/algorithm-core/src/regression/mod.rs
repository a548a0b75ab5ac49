//! Regression and statistical models for time series forecasting
//!
//! - **Linear Regression**: OLS trend on the observation index
//! - **ARIMA**: AutoRegressive Integrated Moving Average

pub mod arima;
pub mod linear;

pub use arima::Arima;
pub use linear::LinearRegression;
