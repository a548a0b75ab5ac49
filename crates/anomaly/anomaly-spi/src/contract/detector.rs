//! Detector trait definitions.

use crate::error::Result;
use crate::model::{AnomalyResult, DetectionMethod, FeatureMatrix};

/// Detector that scores one numeric column at a time.
///
/// Implementations hold only configuration; everything estimated from a
/// batch lives inside a single `detect` call, so one instance can be shared
/// across threads.
pub trait UnivariateDetector: Send + Sync {
    fn method(&self) -> DetectionMethod;

    /// Flag every entry of `series`; the result has one entry per input row.
    fn detect(&self, series: &[f64]) -> Result<AnomalyResult>;
}

/// Detector that scores rows across all features at once.
pub trait MultivariateDetector: Send + Sync {
    fn method(&self) -> DetectionMethod;

    /// Flag every row of `matrix`.
    fn detect(&self, matrix: &FeatureMatrix) -> Result<AnomalyResult>;
}
