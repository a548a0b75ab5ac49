//! Trend Characterisation Service Provider Interface
//!
//! Report models produced by trend analysis (direction, seasonality,
//! growth, stationarity, extrema), the [`StationarityTest`] contract and
//! the [`TrendError`] type.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::StationarityTest;
pub use error::{Result, TrendError};
pub use model::{
    CriticalValues, ExtremaReport, Extremum, GrowthMetrics, SeasonalityReport,
    StationarityReport, TrendDirection, TrendFit, TrendReport,
};
