//! Decomposition result model

use algorithm_spi::SeasonalType;
use serde::{Deserialize, Serialize};

/// Trend, seasonal and residual components of a series, each as long as
/// the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecompositionResult {
    pub model: SeasonalType,
    pub period: usize,
    pub trend: Vec<f64>,
    pub seasonal: Vec<f64>,
    pub residual: Vec<f64>,
}

impl DecompositionResult {
    pub fn len(&self) -> usize {
        self.trend.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trend.is_empty()
    }

    /// One seasonal cycle of indices, starting at the first observation.
    pub fn seasonal_indices(&self) -> &[f64] {
        &self.seasonal[..self.period.min(self.seasonal.len())]
    }

    /// Recombine the components at observation `i`.
    pub fn reconstruct(&self, i: usize) -> f64 {
        match self.model {
            SeasonalType::Additive => self.trend[i] + self.seasonal[i] + self.residual[i],
            SeasonalType::Multiplicative => self.trend[i] * self.seasonal[i] * self.residual[i],
        }
    }
}
