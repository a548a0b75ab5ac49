//! Anomaly Detection Core
//!
//! Implementations of the statistic primitives, the isolation forest and
//! the consensus engine that combines them.

mod detectors;
mod ensemble;
mod isolation_forest;
mod scaling;

pub use detectors::*;
pub use ensemble::ConsensusEngine;
pub use isolation_forest::{average_path_length, IsolationForestDetector};
pub use scaling::StandardScaler;
