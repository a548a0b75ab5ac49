//! Summary payloads for the distribution layer.

use crate::analyzer::{InsightReport, MetricAnalysis, MetricFailure};
use anomaly_facade::{DetectorId, SkippedMethod};
use chrono::NaiveDate;
use forecast_facade::ForecastModel;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::fmt::Write;
use trend_facade::TrendDirection;

/// Headline figures for one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    pub metric: String,
    pub direction: TrendDirection,
    pub slope: f64,
    pub strength: f64,
    pub current_value: f64,
    pub month_over_month: Option<f64>,
    pub year_over_year: Option<f64>,
    pub cagr: Option<f64>,
    pub seasonal_period: Option<usize>,
    pub is_stationary: Option<bool>,
    pub p_value: Option<f64>,
    pub forecasts_produced: Vec<ForecastModel>,
    pub forecasts_failed: Vec<ForecastModel>,
}

impl From<&MetricAnalysis> for MetricSummary {
    fn from(analysis: &MetricAnalysis) -> Self {
        let report = &analysis.trend;
        Self {
            metric: analysis.metric.clone(),
            direction: report.direction(),
            slope: report.trend.slope,
            strength: report.trend.strength,
            current_value: report.growth.current_value,
            month_over_month: report.growth.month_over_month,
            year_over_year: report.growth.year_over_year,
            cagr: report.growth.cagr,
            seasonal_period: report.seasonality.primary_period,
            is_stationary: report.is_stationary(),
            p_value: report.stationarity.as_ref().map(|s| s.p_value),
            forecasts_produced: analysis.forecasts.produced(),
            forecasts_failed: analysis.forecasts.failed(),
        }
    }
}

/// What an analysis found, reduced to what a report needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightSummary {
    pub total_records: usize,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    pub consensus_anomalies: usize,
    pub consensus_indices: Vec<usize>,
    pub method_counts: BTreeMap<DetectorId, usize>,
    pub skipped: Vec<SkippedMethod>,
    pub metrics: Vec<MetricSummary>,
    pub failed_metrics: Vec<MetricFailure>,
}

impl From<&InsightReport> for InsightSummary {
    fn from(report: &InsightReport) -> Self {
        let anomalies = report.anomalies.summary();
        Self {
            total_records: report.total_records,
            date_range: report.date_range,
            consensus_anomalies: anomalies.consensus_anomalies,
            consensus_indices: report.anomalies.consensus_indices(),
            method_counts: anomalies.method_counts,
            skipped: anomalies.skipped,
            metrics: report.metrics.iter().map(MetricSummary::from).collect(),
            failed_metrics: report.failures.clone(),
        }
    }
}

impl InsightSummary {
    /// Flat key to value map, ordered by key.
    ///
    /// Per-metric entries are keyed `<metric>.<field>`.
    pub fn structured(&self) -> BTreeMap<String, Value> {
        let mut out = BTreeMap::new();
        out.insert("total_records".to_string(), json!(self.total_records));
        out.insert(
            "consensus_anomalies".to_string(),
            json!(self.consensus_anomalies),
        );
        let counts: BTreeMap<String, usize> = self
            .method_counts
            .iter()
            .map(|(id, &count)| (id.to_string(), count))
            .collect();
        out.insert("method_counts".to_string(), json!(counts));
        let skipped: Vec<String> = self.skipped.iter().map(|s| s.detector.to_string()).collect();
        out.insert("skipped_methods".to_string(), json!(skipped));
        if let Some((first, last)) = self.date_range {
            out.insert("date_from".to_string(), json!(first.to_string()));
            out.insert("date_to".to_string(), json!(last.to_string()));
        }

        for m in &self.metrics {
            let key = |field: &str| format!("{}.{}", m.metric, field);
            out.insert(key("direction"), json!(m.direction.as_str()));
            out.insert(key("slope"), json!(m.slope));
            out.insert(key("strength"), json!(m.strength));
            out.insert(key("current_value"), json!(m.current_value));
            out.insert(key("month_over_month"), json!(m.month_over_month));
            out.insert(key("year_over_year"), json!(m.year_over_year));
            out.insert(key("cagr"), json!(m.cagr));
            out.insert(key("seasonal_period"), json!(m.seasonal_period));
            out.insert(key("is_stationary"), json!(m.is_stationary));
            out.insert(key("forecast_models"), json!(m.forecasts_produced));
            out.insert(key("forecast_failures"), json!(m.forecasts_failed));
        }
        for f in &self.failed_metrics {
            out.insert(format!("{}.error", f.metric), json!(f.reason));
        }
        out
    }

    /// Human readable digest, one line per finding.
    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        match self.date_range {
            Some((first, last)) => {
                let _ = writeln!(
                    text,
                    "Analysed {} records from {} to {}.",
                    self.total_records, first, last
                );
            }
            None => {
                let _ = writeln!(text, "Analysed {} records.", self.total_records);
            }
        }
        let _ = writeln!(
            text,
            "{} consensus anomalies (flagged by at least two methods).",
            self.consensus_anomalies
        );
        for skipped in &self.skipped {
            let _ = writeln!(text, "Skipped {}: {}.", skipped.detector, skipped.reason);
        }

        for m in &self.metrics {
            let _ = writeln!(
                text,
                "{}: {} trend (slope {:.4}, R² {:.2}), month-over-month {}, year-over-year {}.",
                m.metric,
                m.direction,
                m.slope,
                m.strength,
                percent(m.month_over_month),
                percent(m.year_over_year)
            );
            if let Some(period) = m.seasonal_period {
                let _ = writeln!(text, "  seasonal cycle of {period} observations");
            }
            if let Some(stationary) = m.is_stationary {
                let verdict = if stationary { "stationary" } else { "not stationary" };
                let _ = writeln!(text, "  {verdict}");
            }
            if !m.forecasts_produced.is_empty() {
                let _ = writeln!(text, "  forecasts: {}", join(&m.forecasts_produced));
            }
        }
        for f in &self.failed_metrics {
            let _ = writeln!(text, "{}: not analysed ({}).", f.metric, f.reason);
        }
        text
    }
}

fn percent(rate: Option<f64>) -> String {
    match rate {
        Some(r) => format!("{r:+.1}%"),
        None => "n/a".to_string(),
    }
}

fn join(models: &[ForecastModel]) -> String {
    models
        .iter()
        .map(ForecastModel::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
