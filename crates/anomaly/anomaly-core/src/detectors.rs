//! Univariate anomaly detectors.
//!
//! Each detector exists both as a free function over one column and as a
//! configured [`UnivariateDetector`] for the ensemble.

use algorithm_core::stats;
use anomaly_api::{IqrConfig, MovingAverageConfig, ZScoreConfig};
use anomaly_spi::{
    AnomalyError, AnomalyResult, DetectionMethod, IqrBounds, Result, UnivariateDetector,
};

fn require_present(series: &[f64]) -> Result<()> {
    if stats::count_present(series) == 0 {
        return Err(AnomalyError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    Ok(())
}

// ============================================================================
// Z-Score
// ============================================================================

/// Flag values whose absolute z-score exceeds `threshold`.
///
/// Mean and (population) standard deviation ignore missing entries. A zero
/// standard deviation yields no flags; missing entries get no verdict.
pub fn zscore(series: &[f64], threshold: f64) -> Result<AnomalyResult> {
    require_present(series)?;
    let mean = stats::mean(series).unwrap_or(0.0);
    let std_dev = stats::std_dev(series, 0).unwrap_or(0.0);
    let degenerate = stats::is_negligible_spread(std_dev * std_dev, mean);

    let (flags, scores) = series
        .iter()
        .map(|&x| {
            if x.is_nan() {
                (None, None)
            } else if degenerate {
                (Some(false), Some(0.0))
            } else {
                let z = (x - mean) / std_dev;
                (Some(z.abs() > threshold), Some(z))
            }
        })
        .unzip();

    Ok(AnomalyResult::new(flags, scores, threshold))
}

/// Z-Score based anomaly detector.
///
/// Detects anomalies based on standard deviation from the mean.
#[derive(Debug, Clone)]
pub struct ZScoreDetector {
    threshold: f64,
}

impl ZScoreDetector {
    /// Create a new Z-Score detector with given threshold.
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Create from configuration.
    pub fn from_config(config: &ZScoreConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.threshold))
    }
}

impl Default for ZScoreDetector {
    fn default() -> Self {
        Self::new(ZScoreConfig::default().threshold)
    }
}

impl UnivariateDetector for ZScoreDetector {
    fn method(&self) -> DetectionMethod {
        DetectionMethod::ZScore
    }

    fn detect(&self, series: &[f64]) -> Result<AnomalyResult> {
        zscore(series, self.threshold)
    }
}

// ============================================================================
// IQR
// ============================================================================

/// Flag values outside `[Q1 - k·IQR, Q3 + k·IQR]` computed over the whole
/// series. Scores are the distance beyond the nearest fence in IQR units
/// (raw units when the IQR is zero).
pub fn iqr_bounds(series: &[f64], multiplier: f64) -> Result<AnomalyResult> {
    require_present(series)?;
    let q1 = stats::quantile(series, 0.25).unwrap_or(0.0);
    let q3 = stats::quantile(series, 0.75).unwrap_or(0.0);
    let iqr = q3 - q1;
    let bounds = IqrBounds {
        q1,
        q3,
        iqr,
        lower: q1 - multiplier * iqr,
        upper: q3 + multiplier * iqr,
    };
    let unit = if iqr > 0.0 { iqr } else { 1.0 };

    let (flags, scores) = series
        .iter()
        .map(|&x| {
            if x.is_nan() {
                return (None, None);
            }
            let excess = if x < bounds.lower {
                bounds.lower - x
            } else if x > bounds.upper {
                x - bounds.upper
            } else {
                0.0
            };
            (Some(excess > 0.0), Some(excess / unit))
        })
        .unzip();

    Ok(AnomalyResult::new(flags, scores, multiplier).with_bounds(bounds))
}

/// IQR-based anomaly detector.
///
/// Detects anomalies based on interquartile range.
#[derive(Debug, Clone)]
pub struct IqrDetector {
    multiplier: f64,
}

impl IqrDetector {
    /// Create a new IQR detector with given multiplier.
    pub fn new(multiplier: f64) -> Self {
        Self { multiplier }
    }

    /// Create from configuration.
    pub fn from_config(config: &IqrConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.multiplier))
    }
}

impl Default for IqrDetector {
    fn default() -> Self {
        Self::new(IqrConfig::default().multiplier)
    }
}

impl UnivariateDetector for IqrDetector {
    fn method(&self) -> DetectionMethod {
        DetectionMethod::Iqr
    }

    fn detect(&self, series: &[f64]) -> Result<AnomalyResult> {
        iqr_bounds(series, self.multiplier)
    }
}

// ============================================================================
// Moving average deviation
// ============================================================================

/// Flag values that stray more than `threshold` rolling standard deviations
/// from the mean of the `window` values preceding them.
///
/// The first `window` rows, and rows whose own value or window has a missing
/// entry, are disqualified. Scores are the deviation in rolling standard
/// deviations (`None` when that deviation is zero).
pub fn moving_average_deviation(
    series: &[f64],
    window: usize,
    threshold: f64,
) -> Result<AnomalyResult> {
    if window < 2 {
        return Err(AnomalyError::invalid_parameter(
            "window",
            "must be at least 2",
        ));
    }
    if series.len() <= window {
        return Err(AnomalyError::InsufficientData {
            required: window + 1,
            actual: series.len(),
        });
    }

    let mut flags = vec![None; series.len()];
    let mut scores = vec![None; series.len()];
    for i in window..series.len() {
        let x = series[i];
        let trailing = &series[i - window..i];
        if x.is_nan() || trailing.iter().any(|v| v.is_nan()) {
            continue;
        }
        let (Some(mean), Some(std_dev)) = (stats::mean(trailing), stats::std_dev(trailing, 1))
        else {
            continue;
        };
        let deviation = (x - mean).abs();
        flags[i] = Some(deviation > threshold * std_dev);
        scores[i] = (std_dev > 0.0).then(|| deviation / std_dev);
    }

    Ok(AnomalyResult::new(flags, scores, threshold))
}

/// Trailing moving-average deviation detector.
#[derive(Debug, Clone)]
pub struct MovingAverageDetector {
    window: usize,
    threshold: f64,
}

impl MovingAverageDetector {
    pub fn new(window: usize, threshold: f64) -> Self {
        Self { window, threshold }
    }

    /// Create from configuration.
    pub fn from_config(config: &MovingAverageConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.window, config.threshold))
    }
}

impl Default for MovingAverageDetector {
    fn default() -> Self {
        let config = MovingAverageConfig::default();
        Self::new(config.window, config.threshold)
    }
}

impl UnivariateDetector for MovingAverageDetector {
    fn method(&self) -> DetectionMethod {
        DetectionMethod::MovingAverage
    }

    fn detect(&self, series: &[f64]) -> Result<AnomalyResult> {
        moving_average_deviation(series, self.window, self.threshold)
    }
}
