//! Data models for anomaly detection.

mod anomaly_result;
mod consensus;
mod detection_method;
mod feature_matrix;
mod flag_set;

pub use anomaly_result::{AnomalyResult, IqrBounds};
pub use consensus::{AnomalySummary, ConsensusResult, SkippedMethod, CONSENSUS_THRESHOLD};
pub use detection_method::{DetectionMethod, DetectorId};
pub use feature_matrix::FeatureMatrix;
pub use flag_set::AnomalyFlagSet;
