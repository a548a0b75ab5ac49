//! Per-row flags of every detector that ran.

use super::{AnomalyResult, DetectorId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from detector to its result over the same batch of rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnomalyFlagSet {
    n_rows: usize,
    results: BTreeMap<DetectorId, AnomalyResult>,
}

impl AnomalyFlagSet {
    pub fn new(n_rows: usize) -> Self {
        Self {
            n_rows,
            results: BTreeMap::new(),
        }
    }

    /// Record a detector's result; results of the wrong length are ignored
    /// and `false` is returned.
    pub fn insert(&mut self, id: DetectorId, result: AnomalyResult) -> bool {
        if result.len() != self.n_rows {
            return false;
        }
        self.results.insert(id, result);
        true
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn get(&self, id: &DetectorId) -> Option<&AnomalyResult> {
        self.results.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DetectorId, &AnomalyResult)> {
        self.results.iter()
    }

    /// Number of detectors that flagged row `i`.
    pub fn vote_count(&self, i: usize) -> usize {
        self.results.values().filter(|r| r.is_anomaly(i)).count()
    }

    /// Number of detectors that produced a verdict for row `i`.
    pub fn applicable_count(&self, i: usize) -> usize {
        self.results
            .values()
            .filter(|r| matches!(r.flags.get(i), Some(Some(_))))
            .count()
    }

    /// True-flag count per detector.
    pub fn method_counts(&self) -> BTreeMap<DetectorId, usize> {
        self.results
            .iter()
            .map(|(id, r)| (id.clone(), r.anomaly_count()))
            .collect()
    }
}
