//! Shared model types.

mod prediction_interval;
mod seasonal_type;

pub use prediction_interval::PredictionInterval;
pub use seasonal_type::SeasonalType;
