//! Data models for forecasting.

mod capability;
mod decomposition_result;
mod forecast_bundle;
mod forecast_model;
mod forecast_result;

pub use capability::Capability;
pub use decomposition_result::DecompositionResult;
pub use forecast_bundle::{ForecastBundle, ForecastFailure};
pub use forecast_model::ForecastModel;
pub use forecast_result::{ForecastPoint, ForecastResult};
