//! Insight
//!
//! Business metric analysis over a dated, multi-column dataset:
//!
//! - [`Dataset`]: metric columns keyed by date, ratio derivation, time
//!   ordering and feature matrix construction
//! - [`InsightAnalyzer`]: anomaly consensus across all metrics, plus trend,
//!   extrema, decomposition and forecasts per metric
//! - [`InsightSummary`]: structured and plain-language payloads
//! - [`InsightConfig`]: every hyper-parameter, loadable from TOML
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use insight::{Dataset, InsightAnalyzer, InsightSummary};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let dates = (0..60).map(|i| start + chrono::Duration::days(i)).collect();
//! let sales: Vec<f64> = (0..60).map(|i| 100.0 + (i % 7) as f64 * 3.0).collect();
//!
//! let dataset = Dataset::new(dates).with_metric("sales", sales).unwrap();
//! let report = InsightAnalyzer::default().analyze(&dataset).unwrap();
//! let summary = InsightSummary::from(&report);
//! assert_eq!(summary.total_records, 60);
//! ```

mod analyzer;
mod config;
mod dataset;
mod error;
mod summary;

pub use analyzer::{InsightAnalyzer, InsightReport, MetricAnalysis, MetricFailure};
pub use config::InsightConfig;
pub use dataset::{Dataset, Metric};
pub use error::{InsightError, Result};
pub use summary::{InsightSummary, MetricSummary};

// Domain facades, for callers that need the component types
pub use anomaly_facade as anomaly;
pub use forecast_facade as forecast;
pub use trend_facade as trend;
