//! Forecast output of one model.

use super::ForecastModel;
use algorithm_spi::PredictionInterval;
use serde::{Deserialize, Serialize};

/// One future step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Position on the history's index; the first step is `history_len`
    pub index: usize,
    pub value: f64,
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

/// Forecast of one model over a horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub model: ForecastModel,
    pub points: Vec<ForecastPoint>,
    /// Set when the points carry bounds
    pub confidence_level: Option<f64>,
}

impl ForecastResult {
    /// Point forecasts without bounds, starting at index `start`.
    pub fn from_values(model: ForecastModel, start: usize, values: Vec<f64>) -> Self {
        let points = values
            .into_iter()
            .enumerate()
            .map(|(h, value)| ForecastPoint {
                index: start + h,
                value,
                lower: None,
                upper: None,
            })
            .collect();
        Self {
            model,
            points,
            confidence_level: None,
        }
    }

    /// Point forecasts with bounds, starting at index `start`.
    pub fn from_interval(model: ForecastModel, start: usize, interval: PredictionInterval) -> Self {
        let points = interval
            .forecast
            .iter()
            .zip(interval.lower.iter().zip(&interval.upper))
            .enumerate()
            .map(|(h, (&value, (&lower, &upper)))| ForecastPoint {
                index: start + h,
                value,
                lower: Some(lower),
                upper: Some(upper),
            })
            .collect();
        Self {
            model,
            points,
            confidence_level: Some(interval.confidence_level),
        }
    }

    pub fn horizon(&self) -> usize {
        self.points.len()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn has_intervals(&self) -> bool {
        self.confidence_level.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_continue_history() {
        let result = ForecastResult::from_values(ForecastModel::LinearTrend, 10, vec![1.0, 2.0]);

        assert_eq!(result.points[0].index, 10);
        assert_eq!(result.points[1].index, 11);
        assert!(!result.has_intervals());
    }

    #[test]
    fn test_from_interval() {
        let interval = PredictionInterval {
            forecast: vec![5.0, 6.0],
            lower: vec![4.0, 4.5],
            upper: vec![6.0, 7.5],
            confidence_level: 0.9,
        };
        let result = ForecastResult::from_interval(ForecastModel::Arima, 3, interval);

        assert_eq!(result.values(), vec![5.0, 6.0]);
        assert_eq!(result.points[1].lower, Some(4.5));
        assert_eq!(result.confidence_level, Some(0.9));
        assert_eq!(result.horizon(), 2);
    }
}
