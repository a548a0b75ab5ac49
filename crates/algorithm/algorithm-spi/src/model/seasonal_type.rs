//! Seasonal composition of a series.

use serde::{Deserialize, Serialize};

/// How the seasonal component combines with the trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SeasonalType {
    /// Y_t = Trend + Season + Error
    #[default]
    Additive,
    /// Y_t = Trend * Season * Error
    Multiplicative,
}

impl SeasonalType {
    /// The neutral seasonal value (0 for additive, 1 for multiplicative).
    pub fn identity(&self) -> f64 {
        match self {
            SeasonalType::Additive => 0.0,
            SeasonalType::Multiplicative => 1.0,
        }
    }
}
