//! Typed identifiers for detector outputs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A statistical lens that votes on whether a row is anomalous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    #[serde(rename = "zscore")]
    ZScore,
    Iqr,
    MovingAverage,
    IsolationForest,
}

impl DetectionMethod {
    pub const ALL: [DetectionMethod; 4] = [
        DetectionMethod::ZScore,
        DetectionMethod::Iqr,
        DetectionMethod::MovingAverage,
        DetectionMethod::IsolationForest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionMethod::ZScore => "zscore",
            DetectionMethod::Iqr => "iqr",
            DetectionMethod::MovingAverage => "moving_average",
            DetectionMethod::IsolationForest => "isolation_forest",
        }
    }

    /// Whether the method scores one column at a time.
    pub fn is_univariate(&self) -> bool {
        !matches!(self, DetectionMethod::IsolationForest)
    }

    /// Whether the method needs rows in time order.
    pub fn is_sequential(&self) -> bool {
        matches!(self, DetectionMethod::MovingAverage)
    }
}

impl fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DetectionMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DetectionMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| format!("unknown detection method '{s}'"))
    }
}

/// One flag column of the ensemble: a method, plus the feature it ran on
/// for univariate methods.
///
/// Serializes as `method` or `method:feature` so it can key JSON maps.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct DetectorId {
    pub method: DetectionMethod,
    pub feature: Option<String>,
}

impl DetectorId {
    pub fn univariate(method: DetectionMethod, feature: impl Into<String>) -> Self {
        Self {
            method,
            feature: Some(feature.into()),
        }
    }

    pub fn multivariate(method: DetectionMethod) -> Self {
        Self {
            method,
            feature: None,
        }
    }
}

impl fmt::Display for DetectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.feature {
            Some(feature) => write!(f, "{}:{}", self.method, feature),
            None => write!(f, "{}", self.method),
        }
    }
}

impl From<DetectorId> for String {
    fn from(id: DetectorId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for DetectorId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.split_once(':') {
            Some((method, feature)) => Ok(DetectorId::univariate(method.parse()?, feature)),
            None => Ok(DetectorId::multivariate(value.parse()?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse() {
        let id = DetectorId::univariate(DetectionMethod::ZScore, "revenue");
        assert_eq!(id.to_string(), "zscore:revenue");
        assert_eq!(DetectorId::try_from("zscore:revenue".to_string()).unwrap(), id);

        let forest = DetectorId::multivariate(DetectionMethod::IsolationForest);
        assert_eq!(forest.to_string(), "isolation_forest");
        assert_eq!(
            DetectorId::try_from("isolation_forest".to_string()).unwrap(),
            forest
        );
    }

    #[test]
    fn test_unknown_method_rejected() {
        assert!(DetectorId::try_from("lof:revenue".to_string()).is_err());
    }

    #[test]
    fn test_as_json_map_key() {
        let mut counts = std::collections::BTreeMap::new();
        counts.insert(DetectorId::univariate(DetectionMethod::Iqr, "sales"), 3usize);
        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(json, r#"{"iqr:sales":3}"#);
    }

    #[test]
    fn test_method_kinds() {
        assert!(DetectionMethod::ZScore.is_univariate());
        assert!(!DetectionMethod::IsolationForest.is_univariate());
        assert!(DetectionMethod::MovingAverage.is_sequential());
    }
}
