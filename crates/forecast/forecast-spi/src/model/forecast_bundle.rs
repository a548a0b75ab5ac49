//! Merged output of several forecast strategies.

use super::{ForecastModel, ForecastResult};
use serde::{Deserialize, Serialize};

/// A strategy that produced no forecast, and why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastFailure {
    pub model: ForecastModel,
    pub reason: String,
}

/// Results of every strategy that succeeded plus the failures of the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastBundle {
    pub results: Vec<ForecastResult>,
    pub failures: Vec<ForecastFailure>,
}

impl ForecastBundle {
    pub fn get(&self, model: ForecastModel) -> Option<&ForecastResult> {
        self.results.iter().find(|r| r.model == model)
    }

    pub fn produced(&self) -> Vec<ForecastModel> {
        self.results.iter().map(|r| r.model).collect()
    }

    pub fn failed(&self) -> Vec<ForecastModel> {
        self.failures.iter().map(|f| f.model).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
