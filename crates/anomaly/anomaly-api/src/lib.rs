//! Anomaly Detection API
//!
//! Configuration types for the detectors and the ensemble that runs them.
//! Every config deserializes with defaults for omitted fields and exposes a
//! `validate()` that rejects out-of-range hyper-parameters.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use anomaly_spi::{AnomalyError, AnomalyResult, DetectionMethod, Result};

// ============================================================================
// Detector Configuration
// ============================================================================

/// Z-Score detector configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZScoreConfig {
    /// Absolute z-score above which a value is flagged (default: 3.0).
    pub threshold: f64,
}

impl Default for ZScoreConfig {
    fn default() -> Self {
        Self { threshold: 3.0 }
    }
}

impl ZScoreConfig {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn validate(&self) -> Result<()> {
        positive("zscore.threshold", self.threshold)
    }
}

/// IQR detector configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IqrConfig {
    /// IQR multiplier for outlier bounds (default: 1.5).
    pub multiplier: f64,
}

impl Default for IqrConfig {
    fn default() -> Self {
        Self { multiplier: 1.5 }
    }
}

impl IqrConfig {
    pub fn new(multiplier: f64) -> Self {
        Self { multiplier }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.multiplier >= 0.0 && self.multiplier.is_finite()) {
            return Err(AnomalyError::invalid_parameter(
                "iqr.multiplier",
                "must be a finite value >= 0",
            ));
        }
        Ok(())
    }
}

/// Trailing moving-average deviation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovingAverageConfig {
    /// Number of preceding points in the rolling window (default: 7).
    pub window: usize,
    /// Rolling standard deviations a value may stray (default: 2.0).
    pub threshold: f64,
}

impl Default for MovingAverageConfig {
    fn default() -> Self {
        Self {
            window: 7,
            threshold: 2.0,
        }
    }
}

impl MovingAverageConfig {
    pub fn new(window: usize, threshold: f64) -> Self {
        Self { window, threshold }
    }

    pub fn validate(&self) -> Result<()> {
        if self.window < 2 {
            return Err(AnomalyError::invalid_parameter(
                "moving_average.window",
                "must be at least 2",
            ));
        }
        positive("moving_average.threshold", self.threshold)
    }
}

/// Isolation forest configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IsolationForestConfig {
    /// Expected fraction of anomalous rows, in (0, 1) (default: 0.05).
    pub contamination: f64,
    /// Number of isolation trees (default: 100).
    pub n_trees: usize,
    /// Rows sampled per tree, capped at the batch size (default: 256).
    pub max_samples: usize,
    /// Random seed (default: 42).
    pub seed: u64,
}

impl Default for IsolationForestConfig {
    fn default() -> Self {
        Self {
            contamination: 0.05,
            n_trees: 100,
            max_samples: 256,
            seed: 42,
        }
    }
}

impl IsolationForestConfig {
    pub fn with_contamination(contamination: f64) -> Self {
        Self {
            contamination,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0 < self.contamination && self.contamination < 1.0) {
            return Err(AnomalyError::invalid_parameter(
                "isolation_forest.contamination",
                "must be in (0, 1)",
            ));
        }
        if self.n_trees == 0 {
            return Err(AnomalyError::invalid_parameter(
                "isolation_forest.n_trees",
                "must be at least 1",
            ));
        }
        if self.max_samples < 2 {
            return Err(AnomalyError::invalid_parameter(
                "isolation_forest.max_samples",
                "must be at least 2",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Ensemble Configuration
// ============================================================================

/// Which detectors the ensemble runs and how each is tuned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnsembleConfig {
    /// Methods to run; disabled methods are not reported as skipped.
    pub methods: Vec<DetectionMethod>,
    pub zscore: ZScoreConfig,
    pub iqr: IqrConfig,
    pub moving_average: MovingAverageConfig,
    pub isolation_forest: IsolationForestConfig,
}

impl Default for EnsembleConfig {
    fn default() -> Self {
        Self {
            methods: DetectionMethod::ALL.to_vec(),
            zscore: ZScoreConfig::default(),
            iqr: IqrConfig::default(),
            moving_average: MovingAverageConfig::default(),
            isolation_forest: IsolationForestConfig::default(),
        }
    }
}

impl EnsembleConfig {
    pub fn is_enabled(&self, method: DetectionMethod) -> bool {
        self.methods.contains(&method)
    }

    /// Validate the configs of enabled methods.
    pub fn validate(&self) -> Result<()> {
        if self.methods.is_empty() {
            return Err(AnomalyError::invalid_parameter(
                "methods",
                "at least one detection method must be enabled",
            ));
        }
        for method in &self.methods {
            match method {
                DetectionMethod::ZScore => self.zscore.validate()?,
                DetectionMethod::Iqr => self.iqr.validate()?,
                DetectionMethod::MovingAverage => self.moving_average.validate()?,
                DetectionMethod::IsolationForest => self.isolation_forest.validate()?,
            }
        }
        Ok(())
    }
}

fn positive(name: &str, value: f64) -> Result<()> {
    if !(value > 0.0 && value.is_finite()) {
        return Err(AnomalyError::invalid_parameter(name, "must be a finite value > 0"));
    }
    Ok(())
}
