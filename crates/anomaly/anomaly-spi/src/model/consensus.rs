//! Ensemble verdicts and their summary.

use super::{AnomalyFlagSet, DetectorId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Votes a row needs to be a consensus anomaly, regardless of how many
/// detectors ran.
pub const CONSENSUS_THRESHOLD: usize = 2;

/// A detector that did not contribute, and why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedMethod {
    pub detector: DetectorId,
    pub reason: String,
}

/// Summary statistics of one ensemble run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalySummary {
    pub total_records: usize,
    pub method_counts: BTreeMap<DetectorId, usize>,
    pub consensus_anomalies: usize,
    pub skipped: Vec<SkippedMethod>,
}

/// Full ensemble output: detector flags plus the per-row vote tally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusResult {
    pub flag_set: AnomalyFlagSet,
    pub vote_counts: Vec<usize>,
    pub applicable_counts: Vec<usize>,
    pub consensus: Vec<bool>,
    pub skipped: Vec<SkippedMethod>,
}

impl ConsensusResult {
    /// Tally votes over a flag set.
    pub fn from_flag_set(flag_set: AnomalyFlagSet, skipped: Vec<SkippedMethod>) -> Self {
        let n = flag_set.n_rows();
        let vote_counts: Vec<usize> = (0..n).map(|i| flag_set.vote_count(i)).collect();
        let applicable_counts: Vec<usize> = (0..n).map(|i| flag_set.applicable_count(i)).collect();
        let consensus = vote_counts
            .iter()
            .map(|&votes| votes >= CONSENSUS_THRESHOLD)
            .collect();
        Self {
            flag_set,
            vote_counts,
            applicable_counts,
            consensus,
            skipped,
        }
    }

    pub fn consensus_indices(&self) -> Vec<usize> {
        self.consensus
            .iter()
            .enumerate()
            .filter_map(|(i, &c)| c.then_some(i))
            .collect()
    }

    pub fn consensus_count(&self) -> usize {
        self.consensus.iter().filter(|&&c| c).count()
    }

    pub fn summary(&self) -> AnomalySummary {
        AnomalySummary {
            total_records: self.flag_set.n_rows(),
            method_counts: self.flag_set.method_counts(),
            consensus_anomalies: self.consensus_count(),
            skipped: self.skipped.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnomalyResult, DetectionMethod};

    #[test]
    fn test_consensus_requires_two_votes() {
        let mut set = AnomalyFlagSet::new(3);
        set.insert(
            DetectorId::univariate(DetectionMethod::ZScore, "x"),
            AnomalyResult::new(vec![Some(true), Some(true), Some(false)], vec![None; 3], 3.0),
        );
        set.insert(
            DetectorId::univariate(DetectionMethod::Iqr, "x"),
            AnomalyResult::new(vec![Some(true), Some(false), Some(false)], vec![None; 3], 1.5),
        );

        let result = ConsensusResult::from_flag_set(set, Vec::new());

        assert_eq!(result.consensus, vec![true, false, false]);
        assert_eq!(result.consensus_indices(), vec![0]);

        let summary = result.summary();
        assert_eq!(summary.total_records, 3);
        assert_eq!(summary.consensus_anomalies, 1);
        assert_eq!(
            summary.method_counts[&DetectorId::univariate(DetectionMethod::ZScore, "x")],
            2
        );
    }
}
