//! Holt-Winters triple exponential smoothing
//!
//! Level, trend and seasonal components are updated recursively. Smoothing
//! parameters are either supplied directly or chosen by
//! [`HoltWinters::optimized`], which searches a grid for the combination with
//! the smallest one-step-ahead squared error.

use algorithm_spi::{Predictor, Result, SeasonalType, TsError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Candidate values for each smoothing parameter in [`HoltWinters::optimized`].
pub const SMOOTHING_GRID: [f64; 9] = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9];

/// Holt-Winters model with additive or multiplicative seasonality
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoltWinters {
    /// Level smoothing parameter
    alpha: f64,
    /// Trend smoothing parameter
    beta: f64,
    /// Seasonal smoothing parameter
    gamma: f64,
    /// Seasonal period length
    period: usize,
    /// Type of seasonality
    seasonal_type: SeasonalType,
    /// Current level
    level: f64,
    /// Current trend
    trend: f64,
    /// Seasonal components, indexed by position within the cycle
    seasonal: Vec<f64>,
    /// Observations seen during fitting
    n_observations: usize,
    /// Sum of squared one-step-ahead errors over the fitted history
    sse: f64,
    /// Whether model has been fitted
    fitted: bool,
}

impl HoltWinters {
    /// Create a new Holt-Winters model
    ///
    /// # Arguments
    ///
    /// * `alpha` - Level smoothing (0 < alpha < 1)
    /// * `beta` - Trend smoothing (0 < beta < 1)
    /// * `gamma` - Seasonal smoothing (0 < gamma < 1)
    /// * `period` - Number of observations per seasonal cycle
    /// * `seasonal_type` - Additive or Multiplicative seasonality
    pub fn new(
        alpha: f64,
        beta: f64,
        gamma: f64,
        period: usize,
        seasonal_type: SeasonalType,
    ) -> Result<Self> {
        for (name, value) in [("alpha", alpha), ("beta", beta), ("gamma", gamma)] {
            if !(0.0 < value && value < 1.0) {
                return Err(TsError::invalid_parameter(
                    name,
                    "must be between 0 and 1 (exclusive)",
                ));
            }
        }
        if period < 2 {
            return Err(TsError::invalid_parameter("period", "must be at least 2"));
        }

        Ok(Self {
            alpha,
            beta,
            gamma,
            period,
            seasonal_type,
            level: 0.0,
            trend: 0.0,
            seasonal: vec![seasonal_type.identity(); period],
            n_observations: 0,
            sse: 0.0,
            fitted: false,
        })
    }

    /// Fit every grid combination of (alpha, beta, gamma) and keep the one
    /// with the smallest one-step-ahead SSE.
    pub fn optimized(data: &[f64], period: usize, seasonal_type: SeasonalType) -> Result<Self> {
        let mut best: Option<Self> = None;
        for &alpha in &SMOOTHING_GRID {
            for &beta in &SMOOTHING_GRID {
                for &gamma in &SMOOTHING_GRID {
                    let mut candidate = Self::new(alpha, beta, gamma, period, seasonal_type)?;
                    candidate.fit(data)?;
                    if !candidate.sse.is_finite() {
                        continue;
                    }
                    if best.as_ref().map_or(true, |b| candidate.sse < b.sse) {
                        best = Some(candidate);
                    }
                }
            }
        }

        let best = best.ok_or_else(|| {
            TsError::ConvergenceFailure("no finite Holt-Winters fit on the grid".to_string())
        })?;
        debug!(
            alpha = best.alpha,
            beta = best.beta,
            gamma = best.gamma,
            sse = best.sse,
            "Holt-Winters parameters selected"
        );
        Ok(best)
    }

    /// Smoothing parameters as (alpha, beta, gamma)
    pub fn parameters(&self) -> (f64, f64, f64) {
        (self.alpha, self.beta, self.gamma)
    }

    /// Get seasonal components
    pub fn seasonal_components(&self) -> &[f64] {
        &self.seasonal
    }

    /// Get all components: (level, trend, seasonal)
    pub fn components(&self) -> (f64, f64, &[f64]) {
        (self.level, self.trend, &self.seasonal)
    }

    /// Sum of squared one-step-ahead errors from the last fit
    pub fn sse(&self) -> f64 {
        self.sse
    }

    fn initialize(&mut self, data: &[f64]) {
        let p = self.period;
        let first_season_avg = data[..p].iter().sum::<f64>() / p as f64;
        let second_season_avg = data[p..2 * p].iter().sum::<f64>() / p as f64;

        self.level = first_season_avg;
        self.trend = (second_season_avg - first_season_avg) / p as f64;

        for i in 0..p {
            self.seasonal[i] = match self.seasonal_type {
                SeasonalType::Additive => data[i] - self.level,
                SeasonalType::Multiplicative if self.level.abs() > 1e-10 => data[i] / self.level,
                SeasonalType::Multiplicative => 1.0,
            };
        }
    }

    fn one_step(&self, season_idx: usize) -> f64 {
        match self.seasonal_type {
            SeasonalType::Additive => self.level + self.trend + self.seasonal[season_idx],
            SeasonalType::Multiplicative => (self.level + self.trend) * self.seasonal[season_idx],
        }
    }
}

impl Predictor for HoltWinters {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        let min_required = self.period * 2;
        if data.len() < min_required {
            return Err(TsError::InsufficientData {
                required: min_required,
                actual: data.len(),
            });
        }
        if data.iter().any(|x| !x.is_finite()) {
            return Err(TsError::InvalidData(
                "Holt-Winters requires finite values".to_string(),
            ));
        }

        self.initialize(data);
        self.sse = 0.0;

        for (i, &value) in data.iter().enumerate().skip(self.period) {
            let season_idx = i % self.period;
            let error = value - self.one_step(season_idx);
            self.sse += error * error;

            let prev_level = self.level;
            let prev_seasonal = self.seasonal[season_idx];

            match self.seasonal_type {
                SeasonalType::Additive => {
                    self.level = self.alpha * (value - prev_seasonal)
                        + (1.0 - self.alpha) * (self.level + self.trend);
                    self.trend =
                        self.beta * (self.level - prev_level) + (1.0 - self.beta) * self.trend;
                    self.seasonal[season_idx] = self.gamma * (value - self.level)
                        + (1.0 - self.gamma) * prev_seasonal;
                }
                SeasonalType::Multiplicative => {
                    let deseasonalized = if prev_seasonal.abs() > 1e-10 {
                        value / prev_seasonal
                    } else {
                        value
                    };
                    self.level = self.alpha * deseasonalized
                        + (1.0 - self.alpha) * (self.level + self.trend);
                    self.trend =
                        self.beta * (self.level - prev_level) + (1.0 - self.beta) * self.trend;
                    self.seasonal[season_idx] = if self.level.abs() > 1e-10 {
                        self.gamma * (value / self.level) + (1.0 - self.gamma) * prev_seasonal
                    } else {
                        prev_seasonal
                    };
                }
            }
        }

        self.n_observations = data.len();
        self.fitted = true;
        Ok(())
    }

    fn predict(&self, steps: usize) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(TsError::NotFitted);
        }

        Ok((1..=steps)
            .map(|h| {
                let season_idx = (self.n_observations + h - 1) % self.period;
                let level = self.level + h as f64 * self.trend;
                match self.seasonal_type {
                    SeasonalType::Additive => level + self.seasonal[season_idx],
                    SeasonalType::Multiplicative => level * self.seasonal[season_idx],
                }
            })
            .collect())
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}
