//! Time series error types
//!
//! Defines the standardized error type for all algorithm operations.

use thiserror::Error;

/// Result type alias for algorithm operations
pub type Result<T> = std::result::Result<T, TsError>;

/// Errors that can occur during time series operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TsError {
    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Model has not been fitted yet
    #[error("Model must be fitted before prediction")]
    NotFitted,

    /// Estimation produced an unusable model
    #[error("Model failed to converge: {0}")]
    ConvergenceFailure(String),

    /// Numerical computation error
    #[error("Numerical error: {0}")]
    NumericalError(String),

    /// Invalid time series data
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl TsError {
    /// Shorthand for [`TsError::InvalidParameter`].
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        TsError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_problem() {
        let short = TsError::InsufficientData {
            required: 14,
            actual: 9,
        };
        assert_eq!(
            short.to_string(),
            "Insufficient data: need at least 14 points, got 9"
        );
        assert_eq!(
            TsError::invalid_parameter("period", "must be at least 2").to_string(),
            "Invalid parameter 'period': must be at least 2"
        );
        assert_eq!(
            TsError::ConvergenceFailure("AR polynomial is not stationary".into()).to_string(),
            "Model failed to converge: AR polynomial is not stationary"
        );
    }

    #[test]
    fn test_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<TsError>();
    }
}
