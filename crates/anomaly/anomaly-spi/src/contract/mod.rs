//! Contract definitions for anomaly detection.
//!
//! This module contains trait definitions that providers must implement.

mod detector;

pub use detector::{MultivariateDetector, UnivariateDetector};
