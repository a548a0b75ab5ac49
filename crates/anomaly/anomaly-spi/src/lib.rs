//! Anomaly Detection Service Provider Interface
//!
//! Defines traits and types for ensemble anomaly detection: per-detector
//! results keyed by a typed [`DetectorId`], the multivariate
//! [`FeatureMatrix`], and the consensus models built from them.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{MultivariateDetector, UnivariateDetector};
pub use error::{AnomalyError, Result};
pub use model::{
    AnomalyFlagSet, AnomalyResult, AnomalySummary, ConsensusResult, DetectionMethod, DetectorId,
    FeatureMatrix, IqrBounds, SkippedMethod, CONSENSUS_THRESHOLD,
};
