//! Linear Regression for time series forecasting
//!
//! Uses ordinary least squares (OLS) to fit a linear trend against the
//! sequential observation index.
//!
//! ## When to Use
//!
//! - Data shows a clear linear trend
//! - Quick baseline model
//! - When interpretability is important

use algorithm_spi::{Predictor, Result, TsError};
use serde::{Deserialize, Serialize};

/// Linear Regression model for time series
///
/// Fits y = intercept + slope * t where t is the time index.
///
/// # Example
///
/// ```rust
/// use algorithm_core::prelude::*;
///
/// let data = vec![10.0, 12.0, 14.0, 16.0, 18.0, 20.0];
/// let mut model = LinearRegression::new();
/// model.fit(&data).unwrap();
///
/// let forecast = model.predict(3).unwrap();
/// assert!((forecast[0] - 22.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinearRegression {
    /// Y-intercept
    intercept: f64,
    /// Slope (trend per time unit)
    slope: f64,
    /// Number of observations used in fitting
    n_observations: usize,
    /// R-squared value
    r_squared: f64,
    /// Whether model has been fitted
    fitted: bool,
}

impl LinearRegression {
    /// Create a new linear regression model
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the slope (trend per time unit)
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Get the intercept
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Get R-squared (coefficient of determination), 1.0 for a constant series
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    /// Number of observations the model was fitted on
    pub fn n_observations(&self) -> usize {
        self.n_observations
    }

    /// Predict value at a specific time index
    pub fn predict_at(&self, t: f64) -> Result<f64> {
        if !self.fitted {
            return Err(TsError::NotFitted);
        }
        Ok(self.intercept + self.slope * t)
    }

    /// Get residuals from the fit
    pub fn residuals(&self, data: &[f64]) -> Vec<f64> {
        if !self.fitted {
            return Vec::new();
        }

        data.iter()
            .enumerate()
            .map(|(i, &y)| y - (self.intercept + self.slope * i as f64))
            .collect()
    }
}

impl Predictor for LinearRegression {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        if data.len() < 2 {
            return Err(TsError::InsufficientData {
                required: 2,
                actual: data.len(),
            });
        }
        if data.iter().any(|y| !y.is_finite()) {
            return Err(TsError::InvalidData(
                "linear regression requires finite values".to_string(),
            ));
        }

        let n = data.len() as f64;

        // Time indices: 0, 1, 2, ...
        let sum_t: f64 = (0..data.len()).map(|i| i as f64).sum();
        let sum_y: f64 = data.iter().sum();
        let sum_t2: f64 = (0..data.len()).map(|i| (i * i) as f64).sum();
        let sum_ty: f64 = data.iter().enumerate().map(|(i, &y)| i as f64 * y).sum();

        let denominator = n * sum_t2 - sum_t * sum_t;
        if denominator.abs() < 1e-10 {
            return Err(TsError::NumericalError(
                "Singular matrix in regression".to_string(),
            ));
        }

        let slope = (n * sum_ty - sum_t * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_t) / n;

        let mean_y = sum_y / n;
        let ss_tot: f64 = data.iter().map(|&y| (y - mean_y).powi(2)).sum();
        let ss_res: f64 = data
            .iter()
            .enumerate()
            .map(|(i, &y)| (y - (intercept + slope * i as f64)).powi(2))
            .sum();

        // Relative tolerance keeps large constant levels from reading as noise
        let tolerance = 1e-10 * (1.0 + mean_y * mean_y) * n;
        self.r_squared = if ss_tot > tolerance {
            (1.0 - ss_res / ss_tot).clamp(0.0, 1.0)
        } else {
            1.0
        };
        self.slope = slope;
        self.intercept = intercept;
        self.n_observations = data.len();
        self.fitted = true;
        Ok(())
    }

    fn predict(&self, steps: usize) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(TsError::NotFitted);
        }

        Ok((0..steps)
            .map(|i| {
                let t = (self.n_observations + i) as f64;
                self.intercept + self.slope * t
            })
            .collect())
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_regression_perfect_fit() {
        let data: Vec<f64> = (0..10).map(|i| 100.0 + 10.0 * i as f64).collect();
        let mut model = LinearRegression::new();
        model.fit(&data).unwrap();

        assert!((model.slope() - 10.0).abs() < 1e-9);
        assert!((model.intercept() - 100.0).abs() < 1e-9);
        assert!((model.r_squared() - 1.0).abs() < 1e-12);

        let forecast = model.predict(1).unwrap();
        assert!((forecast[0] - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_constant_series_has_full_strength() {
        let mut model = LinearRegression::new();
        model.fit(&[5000.0; 20]).unwrap();

        assert!(model.slope().abs() < 1e-9);
        assert_eq!(model.r_squared(), 1.0);
    }

    #[test]
    fn test_residuals_sum_to_zero() {
        let data = vec![1.0, 3.0, 2.0, 5.0, 4.0, 6.0];
        let mut model = LinearRegression::new();
        model.fit(&data).unwrap();

        let total: f64 = model.residuals(&data).iter().sum();
        assert!(total.abs() < 1e-9);
        assert!(model.r_squared() > 0.0 && model.r_squared() < 1.0);
    }

    #[test]
    fn test_insufficient_data() {
        let mut model = LinearRegression::new();
        assert!(matches!(
            model.fit(&[1.0]),
            Err(TsError::InsufficientData { required: 2, actual: 1 })
        ));
        assert_eq!(model.predict(1).unwrap_err(), TsError::NotFitted);
    }

    #[test]
    fn test_rejects_missing_values() {
        let mut model = LinearRegression::new();
        assert!(matches!(
            model.fit(&[1.0, f64::NAN, 3.0]),
            Err(TsError::InvalidData(_))
        ));
    }
}
