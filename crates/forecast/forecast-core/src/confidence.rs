//! Confidence interval construction
//!
//! Builds symmetric normal-theory intervals from per-step standard errors
//! or from in-sample residuals.

use algorithm_core::{stats, PredictionInterval};

/// Interval `forecast ± z·se` at `confidence_level`.
pub fn interval_from_standard_errors(
    forecast: Vec<f64>,
    std_errors: &[f64],
    confidence_level: f64,
) -> PredictionInterval {
    let z = stats::z_critical(confidence_level);

    let lower = forecast
        .iter()
        .zip(std_errors.iter())
        .map(|(&f, &se)| f - z * se)
        .collect();

    let upper = forecast
        .iter()
        .zip(std_errors.iter())
        .map(|(&f, &se)| f + z * se)
        .collect();

    PredictionInterval {
        forecast,
        lower,
        upper,
        confidence_level,
    }
}

/// Interval from in-sample residuals, widening with the square root of the
/// step: `se_h = σ·√h`.
pub fn interval_from_residuals(
    forecast: Vec<f64>,
    residuals: &[f64],
    confidence_level: f64,
) -> PredictionInterval {
    let std_dev = stats::std_dev(residuals, 0).unwrap_or(0.0);

    let std_errors: Vec<f64> = (0..forecast.len())
        .map(|h| std_dev * ((h + 1) as f64).sqrt())
        .collect();

    interval_from_standard_errors(forecast, &std_errors, confidence_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_standard_errors() {
        let interval = interval_from_standard_errors(vec![100.0, 110.0], &[5.0, 10.0], 0.95);

        assert!((interval.lower[0] - (100.0 - 1.959964 * 5.0)).abs() < 1e-3);
        assert!((interval.upper[1] - (110.0 + 1.959964 * 10.0)).abs() < 1e-3);
        assert_eq!(interval.confidence_level, 0.95);
    }

    #[test]
    fn test_from_residuals_widens() {
        let residuals = [1.0, -1.0, 2.0, -2.0, 0.5, -0.5];
        let interval = interval_from_residuals(vec![10.0; 4], &residuals, 0.9);

        let widths = interval.widths();
        assert!(widths.windows(2).all(|w| w[1] > w[0]));
        assert!((widths[3] / widths[0] - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_residuals_collapse() {
        let interval = interval_from_residuals(vec![3.0, 4.0], &[0.0; 5], 0.95);
        assert_eq!(interval.lower, interval.forecast);
        assert_eq!(interval.upper, interval.forecast);
    }
}
