//! Forecast model identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The forecasting models a caller can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastModel {
    LinearTrend,
    ExponentialSmoothing,
    Arima,
}

impl ForecastModel {
    pub const ALL: [ForecastModel; 3] = [
        ForecastModel::LinearTrend,
        ForecastModel::ExponentialSmoothing,
        ForecastModel::Arima,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ForecastModel::LinearTrend => "linear_trend",
            ForecastModel::ExponentialSmoothing => "exponential_smoothing",
            ForecastModel::Arima => "arima",
        }
    }
}

impl fmt::Display for ForecastModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ForecastModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ForecastModel::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| format!("unknown forecast model '{s}'"))
    }
}
