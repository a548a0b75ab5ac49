//! Trend analysis error types.

use algorithm_spi::TsError;
use thiserror::Error;

/// Trend analysis errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrendError {
    #[error("Insufficient data: required {required}, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Model failed to converge: {0}")]
    ModelConvergence(String),
}

impl TrendError {
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        TrendError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

impl From<TsError> for TrendError {
    fn from(err: TsError) -> Self {
        match err {
            TsError::InsufficientData { required, actual } => {
                TrendError::InsufficientData { required, actual }
            }
            TsError::InvalidParameter { name, reason } => {
                TrendError::InvalidParameter { name, reason }
            }
            other => TrendError::ModelConvergence(other.to_string()),
        }
    }
}

/// Result type for trend analysis operations.
pub type Result<T> = std::result::Result<T, TrendError>;
