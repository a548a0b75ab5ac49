//! Growth rate metrics.

use algorithm_core::stats;
use trend_spi::GrowthMetrics;

/// Observations per year for year-over-year and CAGR; daily data assumed.
pub const PERIODS_PER_YEAR: usize = 365;

/// Growth rates of a series, in percent.
///
/// Month-over-month is the last step-over-step change. Year-over-year and
/// CAGR need a full year of history, and CAGR a strictly positive first
/// value. A year-over-year base of zero yields `None`. The average rate
/// is the mean of all defined step changes.
/// Returns `None` for an empty series.
pub fn growth_metrics(series: &[f64]) -> Option<GrowthMetrics> {
    let (&start_value, &current_value) = (series.first()?, series.last()?);
    let n = series.len();
    let changes = stats::pct_change(series);

    let month_over_month = changes
        .last()
        .copied()
        .filter(|c| c.is_finite())
        .map(|c| c * 100.0);

    let year_over_year = (n >= PERIODS_PER_YEAR)
        .then(|| series[n - PERIODS_PER_YEAR])
        .filter(|&base| base != 0.0 && base.is_finite())
        .map(|base| (current_value - base) / base * 100.0)
        .filter(|r| r.is_finite());

    let cagr = (n >= PERIODS_PER_YEAR && start_value > 0.0)
        .then(|| {
            let years = n as f64 / PERIODS_PER_YEAR as f64;
            ((current_value / start_value).powf(1.0 / years) - 1.0) * 100.0
        })
        .filter(|r| r.is_finite());

    let defined: Vec<f64> = changes.into_iter().filter(|c| c.is_finite()).collect();
    let average_growth_rate = stats::mean(&defined).map(|m| m * 100.0);

    Some(GrowthMetrics {
        current_value,
        start_value,
        month_over_month,
        year_over_year,
        cagr,
        average_growth_rate,
    })
}
