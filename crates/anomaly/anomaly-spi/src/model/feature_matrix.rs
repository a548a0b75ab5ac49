//! Column-major table of named numeric features.

use crate::error::{AnomalyError, Result};
use serde::{Deserialize, Serialize};

/// Rows are observations, columns are named numeric features.
///
/// Every column has one entry per row; missing entries are `NaN`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureMatrix {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
    time_indexed: bool,
}

impl FeatureMatrix {
    /// Build a matrix from `(name, column)` pairs.
    pub fn new<I, S>(features: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        let mut names = Vec::new();
        let mut columns: Vec<Vec<f64>> = Vec::new();
        for (name, column) in features {
            let name = name.into();
            if names.contains(&name) {
                return Err(AnomalyError::invalid_parameter(
                    "features",
                    format!("duplicate column '{name}'"),
                ));
            }
            if let Some(first) = columns.first() {
                if first.len() != column.len() {
                    return Err(AnomalyError::invalid_parameter(
                        "features",
                        format!(
                            "column '{}' has {} rows, expected {}",
                            name,
                            column.len(),
                            first.len()
                        ),
                    ));
                }
            }
            names.push(name);
            columns.push(column);
        }
        Ok(Self {
            names,
            columns,
            time_indexed: false,
        })
    }

    /// Mark the rows as sorted by timestamp, enabling sequential methods.
    pub fn with_time_index(mut self) -> Self {
        self.time_indexed = true;
        self
    }

    pub fn is_time_indexed(&self) -> bool {
        self.time_indexed
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn n_features(&self) -> usize {
        self.names.len()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterate `(name, column)` pairs in declaration order.
    pub fn features(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter().map(Vec::as_slice))
    }

    pub fn column(&self, name: &str) -> Result<&[f64]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.columns[i].as_slice())
            .ok_or_else(|| AnomalyError::UnknownFeature(name.to_string()))
    }

    /// Values of row `i` across all features.
    pub fn row(&self, i: usize) -> Vec<f64> {
        self.columns.iter().map(|c| c[i]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_and_access() {
        let matrix = FeatureMatrix::new([
            ("sales", vec![1.0, 2.0, 3.0]),
            ("orders", vec![10.0, f64::NAN, 30.0]),
        ])
        .unwrap();

        assert_eq!(matrix.n_rows(), 3);
        assert_eq!(matrix.n_features(), 2);
        assert_eq!(matrix.column("sales").unwrap(), &[1.0, 2.0, 3.0]);
        assert_eq!(matrix.row(2), vec![3.0, 30.0]);
        assert!(!matrix.is_time_indexed());
        assert!(matrix.with_time_index().is_time_indexed());
    }

    #[test]
    fn test_ragged_columns_rejected() {
        let result = FeatureMatrix::new([("a", vec![1.0, 2.0]), ("b", vec![1.0])]);
        assert!(matches!(result, Err(AnomalyError::InvalidParameter { .. })));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = FeatureMatrix::new([("a", vec![1.0]), ("a", vec![2.0])]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_column() {
        let matrix = FeatureMatrix::new([("a", vec![1.0])]).unwrap();
        assert_eq!(
            matrix.column("b").unwrap_err(),
            AnomalyError::UnknownFeature("b".to_string())
        );
    }
}
