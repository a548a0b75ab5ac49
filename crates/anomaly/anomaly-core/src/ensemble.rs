//! Consensus engine: run every enabled detector, then tally votes.

use crate::detectors::{IqrDetector, MovingAverageDetector, ZScoreDetector};
use crate::isolation_forest::IsolationForestDetector;
use anomaly_api::EnsembleConfig;
use anomaly_spi::{
    AnomalyError, AnomalyFlagSet, AnomalyResult, ConsensusResult, DetectionMethod, DetectorId,
    FeatureMatrix, MultivariateDetector, Result, SkippedMethod, UnivariateDetector,
};
use tracing::{debug, warn};

/// Runs univariate detectors on every feature column and multivariate
/// detectors once on the whole matrix.
///
/// A failing detector is recorded as skipped and the rest still vote; only
/// a run where nothing produced a result is an error.
pub struct ConsensusEngine {
    univariate: Vec<Box<dyn UnivariateDetector>>,
    multivariate: Vec<Box<dyn MultivariateDetector>>,
}

impl ConsensusEngine {
    /// Build the detectors enabled in `config`.
    pub fn new(config: &EnsembleConfig) -> Result<Self> {
        config.validate()?;
        let mut engine = Self::empty();
        for method in &config.methods {
            match method {
                DetectionMethod::ZScore => {
                    engine = engine.with_univariate(ZScoreDetector::from_config(&config.zscore)?)
                }
                DetectionMethod::Iqr => {
                    engine = engine.with_univariate(IqrDetector::from_config(&config.iqr)?)
                }
                DetectionMethod::MovingAverage => {
                    engine = engine.with_univariate(MovingAverageDetector::from_config(
                        &config.moving_average,
                    )?)
                }
                DetectionMethod::IsolationForest => {
                    engine = engine.with_multivariate(IsolationForestDetector::new(
                        config.isolation_forest.clone(),
                    )?)
                }
            }
        }
        Ok(engine)
    }

    /// An engine with no detectors registered.
    pub fn empty() -> Self {
        Self {
            univariate: Vec::new(),
            multivariate: Vec::new(),
        }
    }

    pub fn with_univariate(mut self, detector: impl UnivariateDetector + 'static) -> Self {
        self.univariate.push(Box::new(detector));
        self
    }

    pub fn with_multivariate(mut self, detector: impl MultivariateDetector + 'static) -> Self {
        self.multivariate.push(Box::new(detector));
        self
    }

    /// Methods this engine will attempt, in run order.
    pub fn methods(&self) -> Vec<DetectionMethod> {
        self.univariate
            .iter()
            .map(|d| d.method())
            .chain(self.multivariate.iter().map(|d| d.method()))
            .collect()
    }

    pub fn run(&self, matrix: &FeatureMatrix) -> Result<ConsensusResult> {
        let mut flag_set = AnomalyFlagSet::new(matrix.n_rows());
        let mut skipped = Vec::new();

        for (feature, column) in matrix.features() {
            for detector in &self.univariate {
                let id = DetectorId::univariate(detector.method(), feature);
                if detector.method().is_sequential() && !matrix.is_time_indexed() {
                    skip(&mut skipped, id, "rows carry no time ordering".to_string());
                    continue;
                }
                record(&mut flag_set, &mut skipped, id, detector.detect(column));
            }
        }

        for detector in &self.multivariate {
            let id = DetectorId::multivariate(detector.method());
            record(&mut flag_set, &mut skipped, id, detector.detect(matrix));
        }

        if flag_set.is_empty() {
            return Err(AnomalyError::NoDetectorSucceeded {
                skipped: skipped.len(),
            });
        }

        let result = ConsensusResult::from_flag_set(flag_set, skipped);
        debug!(
            rows = matrix.n_rows(),
            detectors = result.flag_set.len(),
            skipped = result.skipped.len(),
            consensus = result.consensus_count(),
            "consensus computed"
        );
        Ok(result)
    }
}

impl Default for ConsensusEngine {
    fn default() -> Self {
        Self::empty()
            .with_univariate(ZScoreDetector::default())
            .with_univariate(IqrDetector::default())
            .with_univariate(MovingAverageDetector::default())
            .with_multivariate(IsolationForestDetector::default())
    }
}

fn record(
    flag_set: &mut AnomalyFlagSet,
    skipped: &mut Vec<SkippedMethod>,
    id: DetectorId,
    outcome: Result<AnomalyResult>,
) {
    match outcome {
        Ok(result) => {
            if !flag_set.insert(id.clone(), result) {
                skip(skipped, id, "result length does not match the batch".to_string());
            }
        }
        Err(err) => skip(skipped, id, err.to_string()),
    }
}

fn skip(skipped: &mut Vec<SkippedMethod>, detector: DetectorId, reason: String) {
    warn!(detector = %detector, reason = %reason, "detector skipped");
    skipped.push(SkippedMethod { detector, reason });
}
