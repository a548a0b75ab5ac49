//! Classical seasonal decomposition
//!
//! Trend by centred moving average, extended to both ends by linear
//! extrapolation; seasonal indices by averaging the detrended series at
//! each position of the cycle.

use forecast_spi::{
    Capability, DecompositionResult, Decomposer, ForecastError, Result, SeasonalType,
};
use tracing::debug;

/// Additive (`Y = T + S + R`) or multiplicative (`Y = T · S · R`)
/// decomposition with a fixed model.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicalDecomposer {
    model: SeasonalType,
}

impl ClassicalDecomposer {
    pub fn new(model: SeasonalType) -> Self {
        Self { model }
    }

    pub fn additive() -> Self {
        Self::new(SeasonalType::Additive)
    }

    pub fn multiplicative() -> Self {
        Self::new(SeasonalType::Multiplicative)
    }

    pub fn model(&self) -> SeasonalType {
        self.model
    }
}

impl Decomposer for ClassicalDecomposer {
    /// More than two full cycles of a period of at least 2.
    fn capability(&self, history_len: usize, period: usize) -> Capability {
        let min_history = 2 * period + 1;
        Capability {
            available: period >= 2 && history_len >= min_history,
            min_history,
            intervals: false,
        }
    }

    fn decompose(&self, data: &[f64], period: usize) -> Result<DecompositionResult> {
        decompose(data, period, self.model)
    }
}

/// Decompose `data` with seasonal cycle length `period`.
///
/// Needs more than two full cycles, complete data and, for the
/// multiplicative model, strictly positive values.
pub fn decompose(data: &[f64], period: usize, model: SeasonalType) -> Result<DecompositionResult> {
    let n = data.len();
    if period < 2 {
        return Err(ForecastError::InvalidPeriod(format!(
            "period must be at least 2, got {period}"
        )));
    }
    if 2 * period >= n {
        return Err(ForecastError::InsufficientHistory {
            required: 2 * period + 1,
            actual: n,
        });
    }
    if data.iter().any(|x| !x.is_finite()) {
        return Err(ForecastError::InvalidData(
            "decomposition requires complete data".to_string(),
        ));
    }
    if model == SeasonalType::Multiplicative && data.iter().any(|&x| x <= 0.0) {
        return Err(ForecastError::InvalidData(
            "multiplicative decomposition requires positive values".to_string(),
        ));
    }

    let trend = extrapolated_trend(data, period);

    let detrended: Vec<f64> = match model {
        SeasonalType::Additive => data.iter().zip(&trend).map(|(d, t)| d - t).collect(),
        SeasonalType::Multiplicative => data.iter().zip(&trend).map(|(d, t)| d / t).collect(),
    };

    // Seasonal component (average by period position)
    let mut indices: Vec<f64> = (0..period)
        .map(|pos| {
            let values: Vec<f64> = detrended.iter().skip(pos).step_by(period).copied().collect();
            values.iter().sum::<f64>() / values.len() as f64
        })
        .collect();
    let centre = indices.iter().sum::<f64>() / period as f64;
    match model {
        SeasonalType::Additive => indices.iter_mut().for_each(|s| *s -= centre),
        SeasonalType::Multiplicative => indices.iter_mut().for_each(|s| *s /= centre),
    }
    let seasonal: Vec<f64> = (0..n).map(|i| indices[i % period]).collect();

    let residual: Vec<f64> = data
        .iter()
        .zip(trend.iter())
        .zip(seasonal.iter())
        .map(|((d, t), s)| match model {
            SeasonalType::Additive => d - t - s,
            SeasonalType::Multiplicative => d / (t * s),
        })
        .collect();

    debug!(len = n, period, ?model, "series decomposed");
    Ok(DecompositionResult {
        model,
        period,
        trend,
        seasonal,
        residual,
    })
}

/// Centred moving average of one cycle (2×m for even periods), with the
/// undefined ends filled by a line through the nearest `period` values.
fn extrapolated_trend(data: &[f64], period: usize) -> Vec<f64> {
    let n = data.len();
    let weights: Vec<f64> = if period % 2 == 0 {
        let mut w = vec![1.0 / period as f64; period + 1];
        w[0] /= 2.0;
        w[period] /= 2.0;
        w
    } else {
        vec![1.0 / period as f64; period]
    };
    let half = weights.len() / 2;

    let mut trend = vec![0.0; n];
    for i in half..(n - half) {
        trend[i] = weights
            .iter()
            .zip(&data[i - half..])
            .map(|(w, x)| w * x)
            .sum();
    }

    // Extend trend at edges
    let front = half;
    let (intercept, slope) = line_through(&trend, front, front + period);
    for (i, t) in trend.iter_mut().enumerate().take(front) {
        *t = intercept + slope * i as f64;
    }
    let back = n - half;
    let (intercept, slope) = line_through(&trend, back - period, back);
    for (i, t) in trend.iter_mut().enumerate().skip(back) {
        *t = intercept + slope * i as f64;
    }
    trend
}

/// Least squares line through `values[start..end]` against the index.
fn line_through(values: &[f64], start: usize, end: usize) -> (f64, f64) {
    let n = (end - start) as f64;
    let mean_x = (start + end - 1) as f64 / 2.0;
    let mean_y = values[start..end].iter().sum::<f64>() / n;
    let (sxy, sxx) = (start..end).fold((0.0, 0.0), |(sxy, sxx), i| {
        let dx = i as f64 - mean_x;
        (sxy + dx * (values[i] - mean_y), sxx + dx * dx)
    });
    let slope = if sxx > 0.0 { sxy / sxx } else { 0.0 };
    (mean_y - slope * mean_x, slope)
}
