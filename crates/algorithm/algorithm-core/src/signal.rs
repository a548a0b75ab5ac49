//! Local extrema search with height and prominence filters.

use serde::{Deserialize, Serialize};

/// A local maximum located by [`find_peaks`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Peak {
    /// Index of the peak; the midpoint for flat-topped peaks
    pub index: usize,
    /// Sample value at `index`
    pub value: f64,
    /// Vertical distance to the higher of the two surrounding bases
    pub prominence: f64,
}

/// Filters applied by [`find_peaks`]. `None` disables a filter.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PeakOptions {
    /// Minimum sample value of a peak
    pub height: Option<f64>,
    /// Minimum prominence of a peak
    pub prominence: Option<f64>,
}

impl PeakOptions {
    pub fn with_height(height: f64) -> Self {
        Self {
            height: Some(height),
            prominence: None,
        }
    }

    pub fn with_prominence(prominence: f64) -> Self {
        Self {
            height: None,
            prominence: Some(prominence),
        }
    }
}

/// Find local maxima of `data`.
///
/// A peak is a sample (or run of equal samples) strictly greater than both
/// neighbours; the first and last samples are never peaks. Missing values
/// never compare as greater, so they neither form nor extend peaks.
pub fn find_peaks(data: &[f64], options: PeakOptions) -> Vec<Peak> {
    local_maxima(data)
        .into_iter()
        .filter(|&i| options.height.map_or(true, |h| data[i] >= h))
        .map(|i| Peak {
            index: i,
            value: data[i],
            prominence: prominence(data, i),
        })
        .filter(|p| options.prominence.map_or(true, |min| p.prominence >= min))
        .collect()
}

fn local_maxima(data: &[f64]) -> Vec<usize> {
    let n = data.len();
    let mut peaks = Vec::new();
    if n < 3 {
        return peaks;
    }

    let mut i = 1;
    while i < n - 1 {
        if data[i - 1] < data[i] {
            let mut ahead = i + 1;
            while ahead < n - 1 && data[ahead] == data[i] {
                ahead += 1;
            }
            if data[ahead] < data[i] {
                let right_edge = ahead - 1;
                peaks.push((i + right_edge) / 2);
                i = ahead;
                continue;
            }
        }
        i += 1;
    }
    peaks
}

fn prominence(data: &[f64], peak: usize) -> f64 {
    let height = data[peak];

    let mut left_min = height;
    let mut i = peak;
    loop {
        if !(data[i] <= height) {
            break;
        }
        left_min = left_min.min(data[i]);
        if i == 0 {
            break;
        }
        i -= 1;
    }

    let mut right_min = height;
    for &value in &data[peak..] {
        if !(value <= height) {
            break;
        }
        right_min = right_min.min(value);
    }

    height - left_min.max(right_min)
}
