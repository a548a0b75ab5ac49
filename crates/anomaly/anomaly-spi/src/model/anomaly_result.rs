//! Anomaly detection result types.

use serde::{Deserialize, Serialize};

/// Tukey fences reported alongside IQR flags.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IqrBounds {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower: f64,
    pub upper: f64,
}

/// Output of one detector over one batch.
///
/// `flags[i]` is `None` when the detector is not applicable to row `i`
/// (missing value, not enough history); such rows never receive its vote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyResult {
    /// Per-row verdict.
    pub flags: Vec<Option<bool>>,
    /// Per-row score; its scale is specific to the method.
    pub scores: Vec<Option<f64>>,
    /// Threshold the scores were compared with.
    pub threshold: f64,
    /// Fences, for IQR results only.
    pub bounds: Option<IqrBounds>,
}

impl AnomalyResult {
    /// Create a new anomaly result.
    pub fn new(flags: Vec<Option<bool>>, scores: Vec<Option<f64>>, threshold: f64) -> Self {
        Self {
            flags,
            scores,
            threshold,
            bounds: None,
        }
    }

    pub fn with_bounds(mut self, bounds: IqrBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Whether row `i` was flagged (`false` when not applicable).
    pub fn is_anomaly(&self, i: usize) -> bool {
        matches!(self.flags.get(i), Some(Some(true)))
    }

    /// Get indices of detected anomalies.
    pub fn anomaly_indices(&self) -> Vec<usize> {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(i, flag)| (*flag == Some(true)).then_some(i))
            .collect()
    }

    /// Count of detected anomalies.
    pub fn anomaly_count(&self) -> usize {
        self.flags.iter().filter(|f| **f == Some(true)).count()
    }

    /// Rows the detector produced a verdict for.
    pub fn applicable_count(&self) -> usize {
        self.flags.iter().filter(|f| f.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_ignore_disqualified_rows() {
        let result = AnomalyResult::new(
            vec![None, Some(false), Some(true), None, Some(true)],
            vec![None, Some(0.1), Some(4.0), None, Some(5.0)],
            3.0,
        );

        assert_eq!(result.anomaly_indices(), vec![2, 4]);
        assert_eq!(result.anomaly_count(), 2);
        assert_eq!(result.applicable_count(), 3);
        assert!(!result.is_anomaly(0));
        assert!(result.is_anomaly(2));
        assert!(!result.is_anomaly(99));
    }
}
