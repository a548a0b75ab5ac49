//! Anomaly detection error types.

use algorithm_spi::TsError;
use thiserror::Error;

/// Anomaly detection errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnomalyError {
    #[error("Insufficient data: required {required}, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Model failed to converge: {0}")]
    ModelConvergence(String),

    #[error("Unknown feature column: {0}")]
    UnknownFeature(String),

    #[error("No detector produced a result ({skipped} skipped)")]
    NoDetectorSucceeded { skipped: usize },
}

impl AnomalyError {
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        AnomalyError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

impl From<TsError> for AnomalyError {
    fn from(err: TsError) -> Self {
        match err {
            TsError::InsufficientData { required, actual } => {
                AnomalyError::InsufficientData { required, actual }
            }
            TsError::InvalidParameter { name, reason } => {
                AnomalyError::InvalidParameter { name, reason }
            }
            other => AnomalyError::ModelConvergence(other.to_string()),
        }
    }
}

/// Result type for anomaly detection operations.
pub type Result<T> = std::result::Result<T, AnomalyError>;
