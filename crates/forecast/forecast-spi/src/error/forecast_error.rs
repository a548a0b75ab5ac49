//! Forecast error types

use algorithm_spi::TsError;
use thiserror::Error;

/// Errors that can occur during forecasting and decomposition
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Too little history for the requested model
    #[error("Insufficient history: need at least {required} points, got {actual}")]
    InsufficientHistory { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Model estimation failed numerically
    #[error("Model failed to converge: {0}")]
    ModelConvergence(String),

    /// Invalid period for seasonality
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    /// Input the model cannot represent (missing or non-positive values)
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl ForecastError {
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ForecastError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

impl From<TsError> for ForecastError {
    fn from(err: TsError) -> Self {
        match err {
            TsError::InsufficientData { required, actual } => {
                ForecastError::InsufficientHistory { required, actual }
            }
            TsError::InvalidParameter { name, reason } => {
                ForecastError::InvalidParameter { name, reason }
            }
            TsError::InvalidData(msg) => ForecastError::InvalidData(msg),
            TsError::ConvergenceFailure(msg) | TsError::NumericalError(msg) => {
                ForecastError::ModelConvergence(msg)
            }
            TsError::NotFitted => {
                ForecastError::ModelConvergence("model used before fitting".to_string())
            }
        }
    }
}

/// Result type for forecast operations
pub type Result<T> = std::result::Result<T, ForecastError>;
