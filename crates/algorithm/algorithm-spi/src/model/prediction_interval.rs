//! Prediction interval model

use serde::{Deserialize, Serialize};

/// Point forecasts with symmetric lower/upper bounds at one confidence level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionInterval {
    /// Point forecast
    pub forecast: Vec<f64>,
    /// Lower bound per step
    pub lower: Vec<f64>,
    /// Upper bound per step
    pub upper: Vec<f64>,
    /// Confidence level (e.g., 0.95 for 95%)
    pub confidence_level: f64,
}

impl PredictionInterval {
    /// Number of forecast steps.
    pub fn len(&self) -> usize {
        self.forecast.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forecast.is_empty()
    }

    /// Width of the interval at each step.
    pub fn widths(&self) -> Vec<f64> {
        self.upper
            .iter()
            .zip(self.lower.iter())
            .map(|(u, l)| u - l)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_widths() {
        let pi = PredictionInterval {
            forecast: vec![100.0, 110.0],
            lower: vec![90.0, 95.0],
            upper: vec![110.0, 125.0],
            confidence_level: 0.95,
        };

        assert_eq!(pi.len(), 2);
        assert!(!pi.is_empty());
        assert_eq!(pi.widths(), vec![20.0, 30.0]);
    }

    #[test]
    fn test_empty_interval() {
        let pi = PredictionInterval {
            forecast: vec![],
            lower: vec![],
            upper: vec![],
            confidence_level: 0.9,
        };
        assert!(pi.is_empty());
        assert!(pi.widths().is_empty());
    }
}
