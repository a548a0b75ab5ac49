//! Descriptive statistics over `f64` slices.
//!
//! Missing observations are encoded as `NaN` and are skipped by every
//! function here unless stated otherwise.

/// Iterate over the non-missing values of a slice.
pub fn present(data: &[f64]) -> impl Iterator<Item = f64> + '_ {
    data.iter().copied().filter(|x| !x.is_nan())
}

/// Number of non-missing values.
pub fn count_present(data: &[f64]) -> usize {
    present(data).count()
}

/// Fill non-finite entries by linear interpolation between the nearest
/// finite neighbours, keeping every value at its original index.
///
/// Leading and trailing gaps take the nearest finite value. `None` when
/// nothing is finite.
pub fn interpolate_missing(data: &[f64]) -> Option<Vec<f64>> {
    let known: Vec<usize> = (0..data.len()).filter(|&i| data[i].is_finite()).collect();
    let (&first, &last) = (known.first()?, known.last()?);

    let mut filled = data.to_vec();
    filled[..first].fill(data[first]);
    filled[last + 1..].fill(data[last]);
    for pair in known.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let step = (data[b] - data[a]) / (b - a) as f64;
        for (offset, slot) in filled[a + 1..b].iter_mut().enumerate() {
            *slot = data[a] + step * (offset + 1) as f64;
        }
    }
    Some(filled)
}

/// Arithmetic mean of the non-missing values, `None` if there are none.
pub fn mean(data: &[f64]) -> Option<f64> {
    let (sum, count) = present(data).fold((0.0, 0usize), |(s, c), x| (s + x, c + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Variance with `ddof` delta degrees of freedom (0 = population, 1 = sample).
///
/// Returns `None` when fewer than `ddof + 1` values are present.
pub fn variance(data: &[f64], ddof: usize) -> Option<f64> {
    let count = count_present(data);
    if count <= ddof {
        return None;
    }
    let m = mean(data)?;
    let ss: f64 = present(data).map(|x| (x - m).powi(2)).sum();
    Some(ss / (count - ddof) as f64)
}

/// Standard deviation with `ddof` delta degrees of freedom.
pub fn std_dev(data: &[f64], ddof: usize) -> Option<f64> {
    variance(data, ddof).map(f64::sqrt)
}

/// Minimum and maximum of the non-missing values.
pub fn min_max(data: &[f64]) -> Option<(f64, f64)> {
    present(data).fold(None, |acc, x| match acc {
        None => Some((x, x)),
        Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
    })
}

/// Quantile `q` in `[0, 1]` using linear interpolation between order
/// statistics (the "linear" method of most dataframe libraries).
pub fn quantile(data: &[f64], q: f64) -> Option<f64> {
    let mut sorted: Vec<f64> = present(data).collect();
    if sorted.is_empty() || !(0.0..=1.0).contains(&q) {
        return None;
    }
    sorted.sort_by(f64::total_cmp);
    Some(quantile_sorted(&sorted, q))
}

/// Quantile of an already sorted, NaN-free slice.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = q * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Pearson correlation of two equally long slices, skipping pairs where
/// either side is missing. `NaN` when undefined (fewer than two pairs or a
/// zero-variance side).
pub fn pearson(a: &[f64], b: &[f64]) -> f64 {
    let pairs: Vec<(f64, f64)> = a
        .iter()
        .zip(b.iter())
        .filter(|(x, y)| !x.is_nan() && !y.is_nan())
        .map(|(&x, &y)| (x, y))
        .collect();
    if pairs.len() < 2 {
        return f64::NAN;
    }

    let n = pairs.len() as f64;
    let mean_a = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_b = pairs.iter().map(|p| p.1).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (x, y) in &pairs {
        cov += (x - mean_a) * (y - mean_b);
        var_a += (x - mean_a).powi(2);
        var_b += (y - mean_b).powi(2);
    }

    if is_negligible_spread(var_a / n, mean_a) || is_negligible_spread(var_b / n, mean_b) {
        return f64::NAN;
    }
    cov / (var_a * var_b).sqrt()
}

/// Whether a variance is indistinguishable from zero relative to the
/// magnitude of the values (rounding noise around a constant).
pub fn is_negligible_spread(variance: f64, mean: f64) -> bool {
    let scale = 1e-10 * mean.abs().max(1.0);
    !(variance > scale * scale)
}

/// Lag-`k` autocorrelation as the Pearson correlation of `x[k..]` with
/// `x[..n-k]`.
pub fn lagged_autocorrelation(data: &[f64], lag: usize) -> f64 {
    if lag == 0 {
        return 1.0;
    }
    if lag >= data.len() {
        return f64::NAN;
    }
    pearson(&data[lag..], &data[..data.len() - lag])
}

/// Step-over-step relative change; the first entry is `NaN`, as is any
/// entry whose previous value is zero or missing.
pub fn pct_change(data: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(data.len());
    if data.is_empty() {
        return out;
    }
    out.push(f64::NAN);
    for w in data.windows(2) {
        let (prev, cur) = (w[0], w[1]);
        let change = if prev == 0.0 || prev.is_nan() || cur.is_nan() {
            f64::NAN
        } else {
            cur / prev - 1.0
        };
        out.push(change);
    }
    out
}

/// Error function (Abramowitz & Stegun 7.1.26, |error| < 1.5e-7).
pub fn erf(x: f64) -> f64 {
    let a1 = 0.254829592;
    let a2 = -0.284496736;
    let a3 = 1.421413741;
    let a4 = -1.453152027;
    let a5 = 1.061405429;
    let p = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + p * x);
    let y = 1.0 - (((((a5 * t + a4) * t) + a3) * t + a2) * t + a1) * t * (-x * x).exp();

    sign * y
}

/// Standard normal CDF.
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}

/// Inverse standard normal CDF (Acklam's rational approximation).
///
/// Returns `NaN` outside `(0, 1)`.
pub fn normal_quantile(p: f64) -> f64 {
    if !(0.0 < p && p < 1.0) {
        return f64::NAN;
    }

    const A: [f64; 6] = [
        -3.969683028665376e1,
        2.209460984245205e2,
        -2.759285104469687e2,
        1.383577518672690e2,
        -3.066479806614716e1,
        2.506628277459239,
    ];
    const B: [f64; 5] = [
        -5.447609879822406e1,
        1.615858368580409e2,
        -1.556989798598866e2,
        6.680131188771972e1,
        -1.328068155288572e1,
    ];
    const C: [f64; 6] = [
        -7.784894002430293e-3,
        -3.223964580411365e-1,
        -2.400758277161838,
        -2.549732539343734,
        4.374664141464968,
        2.938163982698783,
    ];
    const D: [f64; 4] = [
        7.784695709041462e-3,
        3.224671290700398e-1,
        2.445134137142996,
        3.754408661907416,
    ];
    const P_LOW: f64 = 0.02425;

    if p < P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    } else if p <= 1.0 - P_LOW {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        -normal_quantile(1.0 - p)
    }
}

/// Two-sided critical value of the standard normal for a confidence level.
pub fn z_critical(confidence_level: f64) -> f64 {
    normal_quantile(0.5 + confidence_level / 2.0)
}
