//! Aggregate configuration for a full analysis run.

use crate::error::{InsightError, Result};
use anomaly_facade::EnsembleConfig;
use forecast_facade::{DecompositionConfig, ForecastConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use trend_facade::TrendConfig;

/// Every hyper-parameter of the analysis, grouped by domain.
///
/// ```toml
/// [anomaly.isolation_forest]
/// contamination = 0.02
///
/// [trend]
/// max_lag = 60
///
/// [forecast]
/// horizon = 14
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightConfig {
    pub anomaly: EnsembleConfig,
    pub trend: TrendConfig,
    pub forecast: ForecastConfig,
    pub decomposition: DecompositionConfig,
    /// Skip seasonal decomposition entirely when false (default: true)
    pub decompose: bool,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            anomaly: EnsembleConfig::default(),
            trend: TrendConfig::default(),
            forecast: ForecastConfig::default(),
            decomposition: DecompositionConfig::default(),
            decompose: true,
        }
    }
}

impl InsightConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| InsightError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// The file at `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.anomaly.validate()?;
        self.trend.validate()?;
        self.forecast.validate()?;
        if self.decompose {
            self.decomposition.validate()?;
        }
        Ok(())
    }
}
