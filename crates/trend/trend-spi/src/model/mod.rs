//! Data models for trend characterisation.

mod direction;
mod extrema;
mod report;
mod stationarity;

pub use direction::TrendDirection;
pub use extrema::{ExtremaReport, Extremum};
pub use report::{GrowthMetrics, SeasonalityReport, TrendFit, TrendReport};
pub use stationarity::{CriticalValues, StationarityReport};
