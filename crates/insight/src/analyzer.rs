//! Whole-dataset analysis: anomaly consensus across metrics plus a trend,
//! decomposition and forecast bundle per metric.

use crate::config::InsightConfig;
use crate::dataset::Dataset;
use crate::error::{InsightError, Result};
use anomaly_facade::{ConsensusEngine, ConsensusResult};
use chrono::NaiveDate;
use forecast_facade::{
    interpolate_missing, ClassicalDecomposer, Decomposer, DecompositionResult, ForecastBundle,
    Forecaster,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use trend_facade::{ExtremaReport, TrendAnalyzer, TrendReport};

/// Trend analysis bundle for one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricAnalysis {
    pub metric: String,
    pub trend: TrendReport,
    pub extrema: ExtremaReport,
    pub decomposition: Option<DecompositionResult>,
    /// Why decomposition produced nothing, when it was attempted
    pub decomposition_error: Option<String>,
    pub forecasts: ForecastBundle,
}

/// A metric whose trend analysis could not run at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricFailure {
    pub metric: String,
    pub reason: String,
}

/// Everything one analysis call produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightReport {
    pub total_records: usize,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    pub anomalies: ConsensusResult,
    pub metrics: Vec<MetricAnalysis>,
    pub failures: Vec<MetricFailure>,
}

impl InsightReport {
    pub fn metric(&self, name: &str) -> Option<&MetricAnalysis> {
        self.metrics.iter().find(|m| m.metric == name)
    }
}

/// Runs the anomaly ensemble and the per-metric trend analyses.
///
/// Holds configuration only. Every call builds its own detectors,
/// analyzers and forecasters, so one `InsightAnalyzer` can serve
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct InsightAnalyzer {
    config: InsightConfig,
}

impl InsightAnalyzer {
    pub fn new(config: InsightConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &InsightConfig {
        &self.config
    }

    /// Consensus over every metric column of `dataset`.
    pub fn detect_anomalies(&self, dataset: &Dataset) -> Result<ConsensusResult> {
        let matrix = dataset.to_feature_matrix()?;
        let result = ConsensusEngine::new(&self.config.anomaly)?.run(&matrix)?;
        Ok(result)
    }

    /// Trend report, extrema, decomposition and forecasts for one series.
    ///
    /// Trend analysis handles missing entries itself. Decomposition and
    /// forecasting see gaps filled by linear interpolation, so components
    /// stay aligned with the dataset rows and forecasts start at
    /// `series.len()`.
    pub fn analyze_metric(&self, metric: &str, series: &[f64]) -> Result<MetricAnalysis> {
        let analyzer = TrendAnalyzer::new(self.config.trend.clone())?;
        let trend = analyzer.analyze(series)?;
        let extrema = analyzer.extrema(series);

        let filled = interpolate_missing(series).unwrap_or_default();

        let (decomposition, decomposition_error) = if self.config.decompose {
            self.decompose(metric, &filled)
        } else {
            (None, None)
        };

        let forecasts = Forecaster::new(&self.config.forecast)?.forecast_all(&filled);

        debug!(
            metric,
            direction = %trend.direction(),
            forecasts = forecasts.results.len(),
            "metric analysed"
        );
        Ok(MetricAnalysis {
            metric: metric.to_string(),
            trend,
            extrema,
            decomposition,
            decomposition_error,
            forecasts,
        })
    }

    fn decompose(
        &self,
        metric: &str,
        series: &[f64],
    ) -> (Option<DecompositionResult>, Option<String>) {
        let decomposer = ClassicalDecomposer::new(self.config.decomposition.model);
        let period = self.config.decomposition.period;
        let capability = decomposer.capability(series.len(), period);
        if !capability.available {
            debug!(metric, period, len = series.len(), "decomposition skipped");
            return (
                None,
                Some(format!(
                    "needs at least {} observations for period {}, got {}",
                    capability.min_history,
                    period,
                    series.len()
                )),
            );
        }
        match decomposer.decompose(series, period) {
            Ok(result) => (Some(result), None),
            Err(err) => {
                warn!(metric, error = %err, "decomposition failed");
                (None, Some(err.to_string()))
            }
        }
    }

    /// Analyse a whole dataset.
    ///
    /// Rows must be in time order. Metrics are analysed in parallel; a
    /// metric that fails is reported in [`InsightReport::failures`]. Only
    /// a failure of the whole anomaly ensemble is fatal.
    pub fn analyze(&self, dataset: &Dataset) -> Result<InsightReport> {
        if dataset.is_empty() || dataset.metrics().is_empty() {
            return Err(InsightError::InvalidDataset(
                "dataset has no rows or no metric columns".to_string(),
            ));
        }
        if !dataset.is_sorted() {
            return Err(InsightError::InvalidDataset(
                "rows are not in time order".to_string(),
            ));
        }
        info!(
            rows = dataset.len(),
            metrics = dataset.metrics().len(),
            "analysis started"
        );

        let anomalies = self.detect_anomalies(dataset)?;
        info!(
            consensus = anomalies.consensus_count(),
            skipped = anomalies.skipped.len(),
            "anomaly consensus computed"
        );

        let outcomes: Vec<std::result::Result<MetricAnalysis, MetricFailure>> = dataset
            .metrics()
            .par_iter()
            .map(|m| {
                self.analyze_metric(&m.name, &m.values).map_err(|err| {
                    warn!(metric = %m.name, error = %err, "metric analysis failed");
                    MetricFailure {
                        metric: m.name.clone(),
                        reason: err.to_string(),
                    }
                })
            })
            .collect();

        let mut metrics = Vec::new();
        let mut failures = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(analysis) => metrics.push(analysis),
                Err(failure) => failures.push(failure),
            }
        }

        info!(
            analysed = metrics.len(),
            failed = failures.len(),
            "analysis finished"
        );
        Ok(InsightReport {
            total_records: dataset.len(),
            date_range: dataset.date_range(),
            anomalies,
            metrics,
            failures,
        })
    }
}

impl Default for InsightAnalyzer {
    fn default() -> Self {
        Self {
            config: InsightConfig::default(),
        }
    }
}
