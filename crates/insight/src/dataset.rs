//! Tabular business dataset: one date column plus named metric columns.

use crate::error::{InsightError, Result};
use anomaly_facade::FeatureMatrix;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named, time-indexed metric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,
    /// One value per row; missing values are `NaN`
    pub values: Vec<f64>,
}

/// Rows of dated observations across several metrics.
///
/// Rows keep the order they were supplied in; call
/// [`sorted_by_time`](Dataset::sorted_by_time) before any sequential
/// analysis if the source is not already ordered. Missing calendar days
/// are never inserted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    timestamps: Vec<NaiveDate>,
    metrics: Vec<Metric>,
}

impl Dataset {
    pub fn new(timestamps: Vec<NaiveDate>) -> Self {
        Self {
            timestamps,
            metrics: Vec::new(),
        }
    }

    /// Add a metric column. Names must be unique and lengths must match.
    pub fn with_metric(mut self, name: impl Into<String>, values: Vec<f64>) -> Result<Self> {
        let name = name.into();
        if self.metrics.iter().any(|m| m.name == name) {
            return Err(InsightError::InvalidDataset(format!(
                "duplicate metric '{name}'"
            )));
        }
        if values.len() != self.timestamps.len() {
            return Err(InsightError::InvalidDataset(format!(
                "metric '{}' has {} rows, expected {}",
                name,
                values.len(),
                self.timestamps.len()
            )));
        }
        self.metrics.push(Metric { name, values });
        Ok(self)
    }

    /// Derive `name = numerator / denominator` row by row.
    ///
    /// A zero or missing denominator yields a missing value.
    pub fn with_ratio(
        self,
        name: impl Into<String>,
        numerator: &str,
        denominator: &str,
    ) -> Result<Self> {
        let values = {
            let top = self.series(numerator)?;
            let bottom = self.series(denominator)?;
            top.iter()
                .zip(bottom)
                .map(|(&a, &b)| if b == 0.0 { f64::NAN } else { a / b })
                .collect()
        };
        self.with_metric(name, values)
    }

    /// Stable sort of every column by timestamp.
    pub fn sorted_by_time(mut self) -> Self {
        let mut order: Vec<usize> = (0..self.timestamps.len()).collect();
        order.sort_by_key(|&i| self.timestamps[i]);
        self.timestamps = order.iter().map(|&i| self.timestamps[i]).collect();
        for metric in &mut self.metrics {
            metric.values = order.iter().map(|&i| metric.values[i]).collect();
        }
        self
    }

    pub fn is_sorted(&self) -> bool {
        self.timestamps.windows(2).all(|w| w[0] <= w[1])
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn timestamps(&self) -> &[NaiveDate] {
        &self.timestamps
    }

    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    pub fn metric_names(&self) -> Vec<&str> {
        self.metrics.iter().map(|m| m.name.as_str()).collect()
    }

    pub fn series(&self, name: &str) -> Result<&[f64]> {
        self.metrics
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.values.as_slice())
            .ok_or_else(|| InsightError::UnknownMetric(name.to_string()))
    }

    /// First and last timestamp, in row order.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((*self.timestamps.first()?, *self.timestamps.last()?))
    }

    /// Feature matrix over every metric.
    ///
    /// The matrix is marked time indexed only when the rows are sorted, so
    /// sequential detectors are skipped on unordered data.
    pub fn to_feature_matrix(&self) -> Result<FeatureMatrix> {
        let matrix = FeatureMatrix::new(
            self.metrics
                .iter()
                .map(|m| (m.name.clone(), m.values.clone())),
        )?;
        Ok(if self.is_sorted() {
            matrix.with_time_index()
        } else {
            matrix
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn sample() -> Dataset {
        Dataset::new(vec![day(3), day(1), day(2)])
            .with_metric("revenue", vec![300.0, 100.0, 200.0])
            .unwrap()
            .with_metric("orders", vec![3.0, 0.0, 4.0])
            .unwrap()
    }

    #[test]
    fn test_ratio_metric() {
        let data = sample().with_ratio("aov", "revenue", "orders").unwrap();
        let aov = data.series("aov").unwrap();

        assert_eq!(aov[0], 100.0);
        assert!(aov[1].is_nan());
        assert_eq!(aov[2], 50.0);
    }

    #[test]
    fn test_sorted_by_time() {
        let data = sample().sorted_by_time();

        assert!(data.is_sorted());
        assert_eq!(data.timestamps(), &[day(1), day(2), day(3)]);
        assert_eq!(data.series("revenue").unwrap(), &[100.0, 200.0, 300.0]);
        assert_eq!(data.series("orders").unwrap(), &[0.0, 4.0, 3.0]);
        assert_eq!(data.date_range(), Some((day(1), day(3))));
    }

    #[test]
    fn test_feature_matrix_time_index_follows_order() {
        let unordered = sample();
        assert!(!unordered.to_feature_matrix().unwrap().is_time_indexed());

        let matrix = unordered.sorted_by_time().to_feature_matrix().unwrap();
        assert!(matrix.is_time_indexed());
        assert_eq!(matrix.names(), &["revenue".to_string(), "orders".to_string()]);
    }

    #[test]
    fn test_invalid_columns() {
        assert!(matches!(
            sample().with_metric("revenue", vec![1.0, 2.0, 3.0]),
            Err(InsightError::InvalidDataset(_))
        ));
        assert!(matches!(
            sample().with_metric("cost", vec![1.0]),
            Err(InsightError::InvalidDataset(_))
        ));
        assert!(matches!(
            sample().with_ratio("x", "revenue", "visits"),
            Err(InsightError::UnknownMetric(_))
        ));
    }
}
