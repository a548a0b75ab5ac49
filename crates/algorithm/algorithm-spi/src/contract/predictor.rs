//! Predictor traits for time series models
//!
//! Defines the core trait interfaces that all prediction models implement.

use crate::error::Result;
use crate::model::PredictionInterval;

/// Common trait for all time series predictors
///
/// Follows the fit-predict pattern common in statistical libraries. A fitted
/// model owns everything it learned from one batch; nothing is shared between
/// instances.
///
/// # Example
///
/// ```rust,ignore
/// use algorithm_spi::Predictor;
///
/// fn forecast<P: Predictor>(predictor: &mut P, data: &[f64], horizon: usize) -> algorithm_spi::Result<Vec<f64>> {
///     predictor.fit(data)?;
///     predictor.predict(horizon)
/// }
/// ```
pub trait Predictor {
    /// Fit the model to historical data
    ///
    /// # Arguments
    ///
    /// * `data` - Historical time series data, ordered by time
    fn fit(&mut self, data: &[f64]) -> Result<()>;

    /// Predict the next `steps` values after the fitted history
    fn predict(&self, steps: usize) -> Result<Vec<f64>>;

    /// Check if the model has been fitted
    fn is_fitted(&self) -> bool;
}

/// Predictors that can also quantify forecast uncertainty.
pub trait IntervalPredictor: Predictor {
    /// Point forecasts with symmetric bounds at `confidence_level` (e.g. 0.95).
    fn predict_interval(&self, steps: usize, confidence_level: f64)
        -> Result<PredictionInterval>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TsError;

    /// Repeats the last observation; bounds span the largest one-step move.
    #[derive(Default)]
    struct Naive {
        last: Option<f64>,
        max_step: f64,
    }

    impl Predictor for Naive {
        fn fit(&mut self, data: &[f64]) -> Result<()> {
            if data.len() < 2 {
                return Err(TsError::InsufficientData {
                    required: 2,
                    actual: data.len(),
                });
            }
            self.max_step = data
                .windows(2)
                .map(|w| (w[1] - w[0]).abs())
                .fold(0.0, f64::max);
            self.last = data.last().copied();
            Ok(())
        }

        fn predict(&self, steps: usize) -> Result<Vec<f64>> {
            self.last.map(|v| vec![v; steps]).ok_or(TsError::NotFitted)
        }

        fn is_fitted(&self) -> bool {
            self.last.is_some()
        }
    }

    impl IntervalPredictor for Naive {
        fn predict_interval(
            &self,
            steps: usize,
            confidence_level: f64,
        ) -> Result<PredictionInterval> {
            let forecast = self.predict(steps)?;
            Ok(PredictionInterval {
                lower: forecast.iter().map(|f| f - self.max_step).collect(),
                upper: forecast.iter().map(|f| f + self.max_step).collect(),
                forecast,
                confidence_level,
            })
        }
    }

    #[test]
    fn test_fit_then_predict() {
        let mut model = Naive::default();
        assert_eq!(model.predict(1).unwrap_err(), TsError::NotFitted);

        model.fit(&[3.0, 5.0, 4.0]).unwrap();
        assert!(model.is_fitted());
        assert_eq!(model.predict(2).unwrap(), vec![4.0, 4.0]);
    }

    #[test]
    fn test_short_history_leaves_model_unfitted() {
        let mut model = Naive::default();
        assert_eq!(
            model.fit(&[1.0]).unwrap_err(),
            TsError::InsufficientData {
                required: 2,
                actual: 1
            }
        );
        assert!(!model.is_fitted());
    }

    #[test]
    fn test_interval_through_trait_object() {
        let mut model = Naive::default();
        model.fit(&[10.0, 13.0, 12.0]).unwrap();
        let boxed: Box<dyn IntervalPredictor> = Box::new(model);

        let interval = boxed.predict_interval(2, 0.9).unwrap();
        assert_eq!(interval.lower, vec![9.0, 9.0]);
        assert_eq!(interval.upper, vec![15.0, 15.0]);
        assert_eq!(interval.widths(), vec![6.0, 6.0]);
    }
}
