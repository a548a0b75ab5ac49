//! Small dense least squares.
//!
//! Regression problems in this workspace have a handful of columns, so the
//! normal equations are formed explicitly and solved by Gauss-Jordan
//! elimination with partial pivoting.

use algorithm_spi::{Result, TsError};

/// Ordinary least squares fit of `y` on the columns of a design matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct OlsFit {
    /// One coefficient per design column
    pub coefficients: Vec<f64>,
    /// Standard error per coefficient
    pub std_errors: Vec<f64>,
    /// y - X·beta
    pub residuals: Vec<f64>,
    /// Sum of squared residuals
    pub ssr: f64,
    /// Number of observations
    pub nobs: usize,
}

impl OlsFit {
    /// t statistic of coefficient `i`; `NaN` when its standard error is zero.
    pub fn t_value(&self, i: usize) -> f64 {
        let se = self.std_errors[i];
        if se > 0.0 {
            self.coefficients[i] / se
        } else {
            f64::NAN
        }
    }

    /// Gaussian log-likelihood at the ML variance estimate.
    pub fn log_likelihood(&self) -> f64 {
        let n = self.nobs as f64;
        -0.5 * n * ((2.0 * std::f64::consts::PI).ln() + (self.ssr / n).ln() + 1.0)
    }

    /// Akaike information criterion counting every column as a parameter.
    pub fn aic(&self) -> f64 {
        -2.0 * self.log_likelihood() + 2.0 * self.coefficients.len() as f64
    }
}

/// Fit `y ≈ X·beta` where `rows[i]` is the i-th row of `X`.
pub fn ols(rows: &[Vec<f64>], y: &[f64]) -> Result<OlsFit> {
    let nobs = rows.len();
    if nobs != y.len() {
        return Err(TsError::InvalidData(format!(
            "design has {} rows but response has {}",
            nobs,
            y.len()
        )));
    }
    let k = rows.first().map(|r| r.len()).unwrap_or(0);
    if k == 0 {
        return Err(TsError::invalid_parameter("design", "must have at least one column"));
    }
    if nobs < k {
        return Err(TsError::InsufficientData {
            required: k,
            actual: nobs,
        });
    }

    let mut xtx = vec![vec![0.0; k]; k];
    let mut xty = vec![0.0; k];
    for (row, &target) in rows.iter().zip(y.iter()) {
        for i in 0..k {
            xty[i] += row[i] * target;
            for j in i..k {
                xtx[i][j] += row[i] * row[j];
            }
        }
    }
    for i in 0..k {
        for j in 0..i {
            xtx[i][j] = xtx[j][i];
        }
    }

    let inverse = invert(&xtx)?;
    let coefficients: Vec<f64> = (0..k)
        .map(|i| (0..k).map(|j| inverse[i][j] * xty[j]).sum())
        .collect();

    let residuals: Vec<f64> = rows
        .iter()
        .zip(y.iter())
        .map(|(row, &target)| {
            target - row.iter().zip(&coefficients).map(|(x, b)| x * b).sum::<f64>()
        })
        .collect();
    let ssr: f64 = residuals.iter().map(|r| r * r).sum();

    let dof = nobs - k;
    let sigma2 = if dof > 0 { ssr / dof as f64 } else { 0.0 };
    let std_errors = (0..k)
        .map(|i| (sigma2 * inverse[i][i]).max(0.0).sqrt())
        .collect();

    Ok(OlsFit {
        coefficients,
        std_errors,
        residuals,
        ssr,
        nobs,
    })
}

/// Invert a symmetric positive semi-definite matrix, failing when it is
/// numerically singular.
fn invert(matrix: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
    let k = matrix.len();
    let scale = matrix
        .iter()
        .enumerate()
        .map(|(i, row)| row[i].abs())
        .fold(0.0, f64::max)
        .max(f64::MIN_POSITIVE);

    let mut a: Vec<Vec<f64>> = matrix.to_vec();
    let mut inv: Vec<Vec<f64>> = (0..k)
        .map(|i| (0..k).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
        .collect();

    for col in 0..k {
        let pivot = (col..k)
            .max_by(|&r1, &r2| a[r1][col].abs().total_cmp(&a[r2][col].abs()))
            .unwrap_or(col);
        if a[pivot][col].abs() <= 1e-12 * scale {
            return Err(TsError::NumericalError(
                "singular design matrix".to_string(),
            ));
        }
        a.swap(col, pivot);
        inv.swap(col, pivot);

        let p = a[col][col];
        for j in 0..k {
            a[col][j] /= p;
            inv[col][j] /= p;
        }
        for r in 0..k {
            if r != col {
                let factor = a[r][col];
                if factor != 0.0 {
                    for j in 0..k {
                        a[r][j] -= factor * a[col][j];
                        inv[r][j] -= factor * inv[col][j];
                    }
                }
            }
        }
    }

    Ok(inv)
}
