//! Peaks and troughs of a raw series.

use serde::{Deserialize, Serialize};

/// One local extremum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extremum {
    pub index: usize,
    /// Value in the original series (not negated for troughs)
    pub value: f64,
    pub prominence: f64,
}

/// Peaks and troughs that cleared a prominence filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtremaReport {
    pub peaks: Vec<Extremum>,
    pub troughs: Vec<Extremum>,
    /// Prominence threshold that was applied
    pub min_prominence: f64,
}

impl ExtremaReport {
    pub fn peak_count(&self) -> usize {
        self.peaks.len()
    }

    pub fn trough_count(&self) -> usize {
        self.troughs.len()
    }

    pub fn peak_indices(&self) -> Vec<usize> {
        self.peaks.iter().map(|e| e.index).collect()
    }

    pub fn trough_indices(&self) -> Vec<usize> {
        self.troughs.iter().map(|e| e.index).collect()
    }
}
