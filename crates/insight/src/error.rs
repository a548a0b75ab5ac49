//! Error type for whole-dataset analysis.

use anomaly_facade::AnomalyError;
use forecast_facade::ForecastError;
use std::path::PathBuf;
use thiserror::Error;
use trend_facade::TrendError;

#[derive(Debug, Error)]
pub enum InsightError {
    #[error(transparent)]
    Anomaly(#[from] AnomalyError),

    #[error(transparent)]
    Trend(#[from] TrendError),

    #[error(transparent)]
    Forecast(#[from] ForecastError),

    #[error("Unknown metric column: {0}")]
    UnknownMetric(String),

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type for insight operations
pub type Result<T> = std::result::Result<T, InsightError>;
