//! Per-batch feature standardisation.

use algorithm_core::stats;
use anomaly_spi::FeatureMatrix;

/// Zero-mean, unit-variance scaling fitted on one batch.
///
/// Missing entries are imputed to `0.0` before the statistics are computed.
/// Columns with zero variance are centred but not rescaled.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    means: Vec<f64>,
    scales: Vec<f64>,
}

impl StandardScaler {
    /// Impute, fit and transform in one pass, returning row-major data.
    pub fn fit_transform(matrix: &FeatureMatrix) -> (Self, Vec<Vec<f64>>) {
        let imputed: Vec<Vec<f64>> = matrix
            .features()
            .map(|(_, column)| {
                column
                    .iter()
                    .map(|&x| if x.is_nan() { 0.0 } else { x })
                    .collect()
            })
            .collect();

        let means: Vec<f64> = imputed
            .iter()
            .map(|c| stats::mean(c).unwrap_or(0.0))
            .collect();
        let scales: Vec<f64> = imputed
            .iter()
            .zip(&means)
            .map(|(c, &m)| {
                let variance = stats::variance(c, 0).unwrap_or(0.0);
                if stats::is_negligible_spread(variance, m) {
                    1.0
                } else {
                    variance.sqrt()
                }
            })
            .collect();

        let rows = (0..matrix.n_rows())
            .map(|i| {
                imputed
                    .iter()
                    .zip(means.iter().zip(&scales))
                    .map(|(c, (m, s))| (c[i] - m) / s)
                    .collect()
            })
            .collect();

        (Self { means, scales }, rows)
    }

    pub fn means(&self) -> &[f64] {
        &self.means
    }

    pub fn scales(&self) -> &[f64] {
        &self.scales
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standardises_columns() {
        let matrix = FeatureMatrix::new([
            ("a", vec![1.0, 2.0, 3.0, 4.0]),
            ("b", vec![10.0, 10.0, 10.0, 10.0]),
        ])
        .unwrap();

        let (scaler, rows) = StandardScaler::fit_transform(&matrix);

        assert_eq!(scaler.means(), &[2.5, 10.0]);
        assert_eq!(scaler.scales()[1], 1.0);
        let col_a: Vec<f64> = rows.iter().map(|r| r[0]).collect();
        assert!(col_a.iter().sum::<f64>().abs() < 1e-12);
        assert!(rows.iter().all(|r| r[1] == 0.0));
    }

    #[test]
    fn test_missing_imputed_before_scaling() {
        let matrix = FeatureMatrix::new([("a", vec![2.0, f64::NAN, 4.0])]).unwrap();
        let (scaler, rows) = StandardScaler::fit_transform(&matrix);

        assert_eq!(scaler.means(), &[2.0]);
        assert!(rows.iter().all(|r| r[0].is_finite()));
    }
}
