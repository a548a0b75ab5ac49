//! Trend direction classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sign of a fitted trend slope relative to a stability band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Upward,
    Downward,
    Stable,
}

impl TrendDirection {
    /// Classify `slope` against a symmetric band of half-width `stable_band`.
    pub fn classify(slope: f64, stable_band: f64) -> Self {
        if slope > stable_band {
            TrendDirection::Upward
        } else if slope < -stable_band {
            TrendDirection::Downward
        } else {
            TrendDirection::Stable
        }
    }

    /// Direction of the negated series.
    pub fn reversed(self) -> Self {
        match self {
            TrendDirection::Upward => TrendDirection::Downward,
            TrendDirection::Downward => TrendDirection::Upward,
            TrendDirection::Stable => TrendDirection::Stable,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Upward => "upward",
            TrendDirection::Downward => "downward",
            TrendDirection::Stable => "stable",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
