//! Peak and trough location on raw values.

use algorithm_core::{find_peaks, stats, PeakOptions};
use trend_spi::{ExtremaReport, Extremum};

/// Share of the value range used as the default minimum prominence.
pub const DEFAULT_PROMINENCE_FRACTION: f64 = 0.1;

/// Locate peaks and troughs whose prominence is at least `min_prominence`
/// (10% of the value range when `None`). Troughs are the peaks of the
/// negated series.
pub fn locate_extrema(series: &[f64], min_prominence: Option<f64>) -> ExtremaReport {
    let min_prominence = min_prominence.unwrap_or_else(|| {
        stats::min_max(series)
            .map(|(lo, hi)| DEFAULT_PROMINENCE_FRACTION * (hi - lo))
            .unwrap_or(0.0)
    });
    let options = PeakOptions::with_prominence(min_prominence);

    let peaks = find_peaks(series, options)
        .into_iter()
        .map(|p| Extremum {
            index: p.index,
            value: p.value,
            prominence: p.prominence,
        })
        .collect();

    let negated: Vec<f64> = series.iter().map(|x| -x).collect();
    let troughs = find_peaks(&negated, options)
        .into_iter()
        .map(|p| Extremum {
            index: p.index,
            value: -p.value,
            prominence: p.prominence,
        })
        .collect();

    ExtremaReport {
        peaks,
        troughs,
        min_prominence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peaks_and_troughs() {
        let data = [5.0, 9.0, 5.0, 1.0, 5.0, 9.5, 5.0];
        let report = locate_extrema(&data, None);

        assert_eq!(report.peak_indices(), vec![1, 5]);
        assert_eq!(report.trough_indices(), vec![3]);
        assert_eq!(report.troughs[0].value, 1.0);
        assert!((report.min_prominence - 0.85).abs() < 1e-12);
    }

    #[test]
    fn test_default_prominence_filters_noise() {
        let data = [0.0, 10.0, 9.8, 10.1, 0.0, 5.0, 0.0];
        let report = locate_extrema(&data, None);

        // the 9.8 dip and its 10.0 shoulder are within 10% of the range
        assert_eq!(report.peak_indices(), vec![3, 5]);
        assert_eq!(report.trough_count(), 1);
    }

    #[test]
    fn test_explicit_prominence() {
        let data = [0.0, 10.0, 9.8, 10.1, 0.0, 5.0, 0.0];
        let report = locate_extrema(&data, Some(0.0));

        assert_eq!(report.peak_count(), 3);
        assert_eq!(report.trough_indices(), vec![2, 4]);
    }

    #[test]
    fn test_flat_series() {
        let report = locate_extrema(&[2.0; 10], None);
        assert_eq!(report.peak_count(), 0);
        assert_eq!(report.trough_count(), 0);
    }
}
