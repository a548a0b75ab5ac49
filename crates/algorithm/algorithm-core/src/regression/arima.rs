//! ARIMA (AutoRegressive Integrated Moving Average) implementation
//!
//! The model combines three components:
//!
//! - **AR (AutoRegressive)**: Uses past values to predict future values
//! - **I (Integrated)**: Differencing to achieve stationarity
//! - **MA (Moving Average)**: Uses past forecast errors
//!
//! Coefficients are estimated with the Hannan-Rissanen two-stage
//! procedure: a long autoregression supplies residual estimates, then the
//! differenced series is regressed on its own lags and the lagged residuals.
//! Differenced models (`d >= 1`) carry no constant.
//!
//! ## Example
//!
//! ```rust,no_run
//! use algorithm_core::prelude::*;
//!
//! let data: Vec<f64> = (0..60)
//!     .map(|i| 0.5 * i as f64 + (i as f64 * 1.3).sin())
//!     .collect();
//! let mut model = Arima::new(1, 1, 1).unwrap();
//! model.fit(&data).unwrap();
//! let interval = model.predict_interval(3, 0.95).unwrap();
//! assert_eq!(interval.len(), 3);
//! ```

use crate::linalg;
use crate::stats;
use algorithm_spi::{IntervalPredictor, PredictionInterval, Predictor, Result, TsError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// ARIMA model for time series forecasting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arima {
    /// AR order (p)
    p: usize,
    /// Differencing order (d)
    d: usize,
    /// MA order (q)
    q: usize,
    /// AR coefficients
    ar_coeffs: Vec<f64>,
    /// MA coefficients
    ma_coeffs: Vec<f64>,
    /// Mean of the undifferenced series when `d == 0`
    mean: f64,
    /// Innovation variance
    sigma2: f64,
    /// Last value of every differencing level, outermost first
    tails: Vec<f64>,
    /// Demeaned differenced series used to seed forecasts
    history: Vec<f64>,
    /// Residuals aligned with `history`
    residuals: Vec<f64>,
    /// Whether the model has been fitted
    fitted: bool,
}

impl Arima {
    /// Create a new ARIMA model with specified orders
    ///
    /// # Arguments
    ///
    /// * `p` - Order of autoregressive component (0-10)
    /// * `d` - Degree of differencing (0-2)
    /// * `q` - Order of moving average component (0-10)
    pub fn new(p: usize, d: usize, q: usize) -> Result<Self> {
        if p > 10 {
            return Err(TsError::invalid_parameter("p", "AR order must be <= 10"));
        }
        if d > 2 {
            return Err(TsError::invalid_parameter(
                "d",
                "Differencing order must be <= 2",
            ));
        }
        if q > 10 {
            return Err(TsError::invalid_parameter("q", "MA order must be <= 10"));
        }

        Ok(Self {
            p,
            d,
            q,
            ar_coeffs: vec![0.0; p],
            ma_coeffs: vec![0.0; q],
            mean: 0.0,
            sigma2: 0.0,
            tails: Vec::new(),
            history: Vec::new(),
            residuals: Vec::new(),
            fitted: false,
        })
    }

    /// Model orders as `(p, d, q)`
    pub fn order(&self) -> (usize, usize, usize) {
        (self.p, self.d, self.q)
    }

    /// Smallest history this order can be estimated from
    pub fn min_observations(&self) -> usize {
        self.d + 10 + 4 * (self.p + self.q)
    }

    pub fn ar_coefficients(&self) -> &[f64] {
        &self.ar_coeffs
    }

    pub fn ma_coefficients(&self) -> &[f64] {
        &self.ma_coeffs
    }

    /// Estimated innovation variance
    pub fn sigma2(&self) -> f64 {
        self.sigma2
    }

    /// Apply differencing `order` times
    fn difference(data: &[f64], order: usize) -> Vec<f64> {
        let mut result = data.to_vec();
        for _ in 0..order {
            result = result.windows(2).map(|w| w[1] - w[0]).collect();
        }
        result
    }

    /// Reverse differencing using the stored level tails
    fn undifference(&self, forecasts: &[f64]) -> Vec<f64> {
        let mut result = forecasts.to_vec();
        for &last in self.tails.iter().rev() {
            let mut acc = last;
            for value in result.iter_mut() {
                acc += *value;
                *value = acc;
            }
        }
        result
    }

    fn estimate(&self, w: &[f64]) -> Result<(Vec<f64>, Vec<f64>, f64)> {
        let (p, q) = (self.p, self.q);
        let m = w.len();

        if p == 0 && q == 0 {
            let sigma2 = w.iter().map(|x| x * x).sum::<f64>() / m as f64;
            return Ok((Vec::new(), Vec::new(), sigma2));
        }

        // Stage 1: long autoregression for innovation estimates
        let (start, innovations) = if q > 0 {
            let long = (((m as f64).ln().powi(2)).floor() as usize)
                .max(2 * p.max(q))
                .min(m / 4);
            let rows: Vec<Vec<f64>> = (long..m)
                .map(|t| (1..=long).map(|j| w[t - j]).collect())
                .collect();
            let fit = linalg::ols(&rows, &w[long..]).map_err(convergence)?;
            let mut innovations = vec![0.0; m];
            innovations[long..].copy_from_slice(&fit.residuals);
            ((long + q).max(p), innovations)
        } else {
            (p, vec![0.0; m])
        };

        if m <= start + p + q {
            return Err(TsError::InsufficientData {
                required: self.min_observations(),
                actual: m + self.d,
            });
        }

        // Stage 2: regress on own lags and lagged innovations
        let rows: Vec<Vec<f64>> = (start..m)
            .map(|t| {
                (1..=p)
                    .map(|j| w[t - j])
                    .chain((1..=q).map(|j| innovations[t - j]))
                    .collect()
            })
            .collect();
        let fit = linalg::ols(&rows, &w[start..]).map_err(convergence)?;

        let (ar, ma) = fit.coefficients.split_at(p);
        if !is_stationary(ar) {
            return Err(TsError::ConvergenceFailure(format!(
                "non-stationary AR estimate {:?}",
                ar
            )));
        }
        let negated_ma: Vec<f64> = ma.iter().map(|c| -c).collect();
        if !is_stationary(&negated_ma) {
            return Err(TsError::ConvergenceFailure(format!(
                "non-invertible MA estimate {:?}",
                ma
            )));
        }

        let sigma2 = fit.ssr / fit.nobs as f64;
        Ok((ar.to_vec(), ma.to_vec(), sigma2))
    }

    /// Residuals of the fitted recursion over the whole differenced series.
    fn filter_residuals(&self, w: &[f64]) -> Vec<f64> {
        let mut residuals = vec![0.0; w.len()];
        for t in 0..w.len() {
            let mut prediction = 0.0;
            for (j, phi) in self.ar_coeffs.iter().enumerate() {
                if t > j {
                    prediction += phi * w[t - j - 1];
                }
            }
            for (j, theta) in self.ma_coeffs.iter().enumerate() {
                if t > j {
                    prediction += theta * residuals[t - j - 1];
                }
            }
            residuals[t] = w[t] - prediction;
        }
        residuals
    }

    /// Moving-average weights of the integrated process, `psi[0] = 1`.
    fn psi_weights(&self, steps: usize) -> Vec<f64> {
        // phi(B) * (1 - B)^d as 1 + c1 B + c2 B^2 + ...
        let mut poly = vec![1.0];
        poly.extend(self.ar_coeffs.iter().map(|c| -c));
        for _ in 0..self.d {
            let mut next = vec![0.0; poly.len() + 1];
            for (i, c) in poly.iter().enumerate() {
                next[i] += c;
                next[i + 1] -= c;
            }
            poly = next;
        }
        let phi_star: Vec<f64> = poly.iter().skip(1).map(|c| -c).collect();

        let mut psi = vec![0.0; steps];
        if steps == 0 {
            return psi;
        }
        psi[0] = 1.0;
        for j in 1..steps {
            let mut value = self.ma_coeffs.get(j - 1).copied().unwrap_or(0.0);
            for (i, phi) in phi_star.iter().enumerate() {
                if j > i {
                    value += phi * psi[j - i - 1];
                }
            }
            psi[j] = value;
        }
        psi
    }
}

impl Predictor for Arima {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        let required = self.min_observations();
        if data.len() < required {
            return Err(TsError::InsufficientData {
                required,
                actual: data.len(),
            });
        }
        if data.iter().any(|x| !x.is_finite()) {
            return Err(TsError::InvalidData(
                "ARIMA requires finite values".to_string(),
            ));
        }

        let mut tails = Vec::with_capacity(self.d);
        let mut level = data.to_vec();
        for _ in 0..self.d {
            if let Some(&last) = level.last() {
                tails.push(last);
            }
            level = Self::difference(&level, 1);
        }

        let mean = if self.d == 0 {
            stats::mean(&level).unwrap_or(0.0)
        } else {
            0.0
        };
        let w: Vec<f64> = level.iter().map(|x| x - mean).collect();

        let (ar, ma, sigma2) = self.estimate(&w)?;
        self.ar_coeffs = ar;
        self.ma_coeffs = ma;
        self.sigma2 = sigma2;
        self.mean = mean;
        self.tails = tails;
        self.residuals = self.filter_residuals(&w);
        self.history = w;
        self.fitted = true;

        debug!(
            p = self.p,
            d = self.d,
            q = self.q,
            ar = ?self.ar_coeffs,
            ma = ?self.ma_coeffs,
            sigma2 = self.sigma2,
            "ARIMA fitted"
        );
        Ok(())
    }

    fn predict(&self, steps: usize) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(TsError::NotFitted);
        }

        let mut extended = self.history.clone();
        let mut errors = self.residuals.clone();
        let mut forecasts = Vec::with_capacity(steps);

        for _ in 0..steps {
            let t = extended.len();
            let mut value = 0.0;
            for (j, phi) in self.ar_coeffs.iter().enumerate() {
                if t > j {
                    value += phi * extended[t - j - 1];
                }
            }
            for (j, theta) in self.ma_coeffs.iter().enumerate() {
                if t > j {
                    value += theta * errors[t - j - 1];
                }
            }
            extended.push(value);
            errors.push(0.0);
            forecasts.push(value + self.mean);
        }

        Ok(self.undifference(&forecasts))
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

impl IntervalPredictor for Arima {
    fn predict_interval(&self, steps: usize, confidence_level: f64) -> Result<PredictionInterval> {
        if !(0.0 < confidence_level && confidence_level < 1.0) {
            return Err(TsError::invalid_parameter(
                "confidence_level",
                "must be between 0 and 1 (exclusive)",
            ));
        }
        let forecast = self.predict(steps)?;
        let z = stats::z_critical(confidence_level);
        let psi = self.psi_weights(steps);

        let mut cumulative = 0.0;
        let mut lower = Vec::with_capacity(steps);
        let mut upper = Vec::with_capacity(steps);
        for (value, weight) in forecast.iter().zip(&psi) {
            cumulative += weight * weight;
            let half_width = z * (self.sigma2 * cumulative).sqrt();
            lower.push(value - half_width);
            upper.push(value + half_width);
        }

        Ok(PredictionInterval {
            forecast,
            lower,
            upper,
            confidence_level,
        })
    }
}

fn convergence(err: TsError) -> TsError {
    match err {
        TsError::NumericalError(msg) => TsError::ConvergenceFailure(msg),
        other => other,
    }
}

/// Whether `x_t = sum a_j x_{t-j}` is stationary, by the step-down
/// recursion on reflection coefficients.
fn is_stationary(coefficients: &[f64]) -> bool {
    let mut a = coefficients.to_vec();
    while let Some(&k) = a.last() {
        if !(k.abs() < 1.0) {
            return false;
        }
        let m = a.len();
        let denom = 1.0 - k * k;
        a = (0..m - 1).map(|j| (a[j] + k * a[m - 2 - j]) / denom).collect();
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn ar1_walk(n: usize, phi: f64, seed: u64) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut level = 100.0;
        let mut prev_step = 0.0;
        (0..n)
            .map(|_| {
                let step = phi * prev_step + rng.gen_range(-1.0..1.0);
                prev_step = step;
                level += step;
                level
            })
            .collect()
    }

    #[test]
    fn test_arima_new_invalid_orders() {
        assert!(Arima::new(11, 0, 0).is_err());
        assert!(Arima::new(0, 3, 0).is_err());
        assert!(Arima::new(0, 0, 11).is_err());
    }

    #[test]
    fn test_difference_and_undifference() {
        let data = [1.0, 3.0, 6.0, 10.0];
        assert_eq!(Arima::difference(&data, 1), vec![2.0, 3.0, 4.0]);
        assert_eq!(Arima::difference(&data, 2), vec![1.0, 1.0]);

        let mut model = Arima::new(0, 1, 0).unwrap();
        model.tails = vec![10.0];
        assert_eq!(model.undifference(&[1.0, 2.0]), vec![11.0, 13.0]);
    }

    #[test]
    fn test_ar1_recovers_coefficient() {
        let data = ar1_walk(400, 0.6, 7);
        let mut model = Arima::new(1, 1, 0).unwrap();
        model.fit(&data).unwrap();

        let phi = model.ar_coefficients()[0];
        assert!((phi - 0.6).abs() < 0.15, "phi = {phi}");
    }

    #[test]
    fn test_arima_111_forecast_continues_level() {
        let data = ar1_walk(200, 0.3, 11);
        let mut model = Arima::new(1, 1, 1).unwrap();
        model.fit(&data).unwrap();

        let forecast = model.predict(5).unwrap();
        let last = *data.last().unwrap();
        assert_eq!(forecast.len(), 5);
        assert!((forecast[0] - last).abs() < 5.0);
    }

    #[test]
    fn test_interval_widens_with_horizon() {
        let data = ar1_walk(200, 0.3, 3);
        let mut model = Arima::new(1, 1, 1).unwrap();
        model.fit(&data).unwrap();

        let interval = model.predict_interval(10, 0.95).unwrap();
        let widths = interval.widths();
        assert!(widths.windows(2).all(|w| w[1] >= w[0]));
        for i in 0..10 {
            assert!(interval.lower[i] < interval.forecast[i]);
            assert!(interval.upper[i] > interval.forecast[i]);
        }
    }

    #[test]
    fn test_psi_weights_random_walk() {
        let model = Arima::new(0, 1, 0).unwrap();
        assert_eq!(model.psi_weights(4), vec![1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_short_series_is_insufficient() {
        let mut model = Arima::new(1, 1, 1).unwrap();
        assert!(matches!(
            model.fit(&[1.0, 2.0, 3.0]),
            Err(TsError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_constant_differences_fail_to_converge() {
        let data: Vec<f64> = (0..40).map(|i| 100.0 + 10.0 * i as f64).collect();
        let mut model = Arima::new(1, 1, 1).unwrap();
        assert!(matches!(
            model.fit(&data),
            Err(TsError::ConvergenceFailure(_))
        ));
    }

    #[test]
    fn test_stationarity_check() {
        assert!(is_stationary(&[0.5]));
        assert!(!is_stationary(&[1.0]));
        assert!(is_stationary(&[0.5, 0.3]));
        assert!(!is_stationary(&[0.6, 0.5]));
        assert!(is_stationary(&[]));
    }
}
