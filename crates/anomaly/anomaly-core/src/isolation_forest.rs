//! Isolation forest over a standardised feature matrix.
//!
//! The scaler and every tree are built inside one `detect` call and dropped
//! when it returns; the detector itself carries only configuration.

use crate::scaling::StandardScaler;
use algorithm_core::stats;
use anomaly_api::IsolationForestConfig;
use anomaly_spi::{
    AnomalyError, AnomalyResult, DetectionMethod, FeatureMatrix, MultivariateDetector, Result,
};
use rand::rngs::StdRng;
use rand::{seq::index, Rng, SeedableRng};
use tracing::debug;

const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// Expected path length of an unsuccessful search in a binary search tree
/// of `n` nodes, used to normalise isolation depths.
pub fn average_path_length(n: usize) -> f64 {
    match n {
        0 | 1 => 0.0,
        2 => 1.0,
        _ => {
            let n = n as f64;
            2.0 * ((n - 1.0).ln() + EULER_GAMMA) - 2.0 * (n - 1.0) / n
        }
    }
}

#[derive(Debug, Clone)]
enum Node {
    Internal {
        feature: usize,
        split: f64,
        left: usize,
        right: usize,
    },
    External {
        size: usize,
    },
}

/// One randomised partitioning tree, stored as an arena of nodes.
#[derive(Debug, Clone)]
struct IsolationTree {
    nodes: Vec<Node>,
}

impl IsolationTree {
    fn build(rows: &[Vec<f64>], sample: Vec<usize>, max_depth: usize, rng: &mut StdRng) -> Self {
        let mut tree = Self { nodes: Vec::new() };
        tree.grow(rows, sample, 0, max_depth, rng);
        tree
    }

    fn grow(
        &mut self,
        rows: &[Vec<f64>],
        sample: Vec<usize>,
        depth: usize,
        max_depth: usize,
        rng: &mut StdRng,
    ) -> usize {
        let id = self.nodes.len();
        self.nodes.push(Node::External { size: sample.len() });
        if depth >= max_depth || sample.len() <= 1 {
            return id;
        }

        // Only features that still vary within this node can split it
        let n_features = rows[sample[0]].len();
        let candidates: Vec<(usize, f64, f64)> = (0..n_features)
            .filter_map(|f| {
                let (lo, hi) = sample
                    .iter()
                    .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &r| {
                        (lo.min(rows[r][f]), hi.max(rows[r][f]))
                    });
                (hi > lo).then_some((f, lo, hi))
            })
            .collect();
        if candidates.is_empty() {
            return id;
        }

        let (feature, lo, hi) = candidates[rng.gen_range(0..candidates.len())];
        let split = rng.gen_range(lo..hi);
        let (left_rows, right_rows): (Vec<usize>, Vec<usize>) =
            sample.into_iter().partition(|&r| rows[r][feature] < split);

        let left = self.grow(rows, left_rows, depth + 1, max_depth, rng);
        let right = self.grow(rows, right_rows, depth + 1, max_depth, rng);
        self.nodes[id] = Node::Internal {
            feature,
            split,
            left,
            right,
        };
        id
    }

    fn path_length(&self, point: &[f64]) -> f64 {
        let mut id = 0;
        let mut depth = 0.0;
        loop {
            match &self.nodes[id] {
                Node::External { size } => return depth + average_path_length(*size),
                Node::Internal {
                    feature,
                    split,
                    left,
                    right,
                } => {
                    id = if point[*feature] < *split { *left } else { *right };
                    depth += 1.0;
                }
            }
        }
    }
}

/// Multivariate outlier detector.
///
/// Scores are `-2^(-E[h(x)] / c(ψ))` where `h` is the isolation depth and
/// `ψ` the per-tree subsample size; lower is more anomalous. A row is an
/// outlier when its score falls below the `contamination` quantile of the
/// batch.
#[derive(Debug, Clone)]
pub struct IsolationForestDetector {
    config: IsolationForestConfig,
}

impl IsolationForestDetector {
    pub fn new(config: IsolationForestConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &IsolationForestConfig {
        &self.config
    }

    /// Anomaly score of every row, without thresholding.
    pub fn score_samples(&self, matrix: &FeatureMatrix) -> Result<Vec<f64>> {
        let n = matrix.n_rows();
        if n < 2 {
            return Err(AnomalyError::InsufficientData {
                required: 2,
                actual: n,
            });
        }
        if matrix.n_features() == 0 {
            return Err(AnomalyError::invalid_parameter(
                "features",
                "at least one feature column is required",
            ));
        }

        let (_scaler, rows) = StandardScaler::fit_transform(matrix);
        let psi = self.config.max_samples.min(n);
        let max_depth = (psi as f64).log2().ceil() as usize;

        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let trees: Vec<IsolationTree> = (0..self.config.n_trees)
            .map(|_| {
                let sample = index::sample(&mut rng, n, psi).into_vec();
                IsolationTree::build(&rows, sample, max_depth, &mut rng)
            })
            .collect();

        let normaliser = average_path_length(psi);
        let scores = rows
            .iter()
            .map(|row| {
                let mean_depth =
                    trees.iter().map(|t| t.path_length(row)).sum::<f64>() / trees.len() as f64;
                -(2.0_f64).powf(-mean_depth / normaliser)
            })
            .collect();

        debug!(
            rows = n,
            features = matrix.n_features(),
            trees = trees.len(),
            subsample = psi,
            "isolation forest scored"
        );
        Ok(scores)
    }
}

impl Default for IsolationForestDetector {
    fn default() -> Self {
        Self {
            config: IsolationForestConfig::default(),
        }
    }
}

impl MultivariateDetector for IsolationForestDetector {
    fn method(&self) -> DetectionMethod {
        DetectionMethod::IsolationForest
    }

    fn detect(&self, matrix: &FeatureMatrix) -> Result<AnomalyResult> {
        let scores = self.score_samples(matrix)?;
        let offset = stats::quantile(&scores, self.config.contamination).ok_or_else(|| {
            AnomalyError::ModelConvergence("isolation scores are undefined".to_string())
        })?;

        let flags = scores.iter().map(|&s| Some(s < offset)).collect();
        let scores = scores.into_iter().map(Some).collect();
        Ok(AnomalyResult::new(flags, scores, offset))
    }
}
