//! Forecast Consumer API
//!
//! Configuration for the forecasting strategies and for seasonal
//! decomposition.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use forecast_spi::{ForecastError, ForecastModel, Result, SeasonalType};

/// Configuration for multi-model forecasting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Steps to forecast (default: 30)
    pub horizon: usize,
    /// Seasonal cycle length for exponential smoothing (default: 7)
    pub seasonal_period: usize,
    /// ARIMA (p, d, q) order (default: (1, 1, 1))
    pub arima_order: (usize, usize, usize),
    /// Confidence level for interval forecasts (default: 0.95)
    pub confidence_level: f64,
    /// Models to run (default: all)
    pub models: Vec<ForecastModel>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon: 30,
            seasonal_period: 7,
            arima_order: (1, 1, 1),
            confidence_level: 0.95,
            models: ForecastModel::ALL.to_vec(),
        }
    }
}

impl ForecastConfig {
    pub fn validate(&self) -> Result<()> {
        if self.horizon == 0 {
            return Err(ForecastError::invalid_parameter(
                "forecast.horizon",
                "must be positive",
            ));
        }
        if self.seasonal_period < 2 {
            return Err(ForecastError::InvalidPeriod(format!(
                "seasonal period must be at least 2, got {}",
                self.seasonal_period
            )));
        }
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(ForecastError::invalid_parameter(
                "forecast.confidence_level",
                "must be in (0, 1)",
            ));
        }
        Ok(())
    }
}

/// Configuration for decomposition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecompositionConfig {
    /// Seasonality period (default: 7)
    pub period: usize,
    /// How the seasonal component combines with the trend
    pub model: SeasonalType,
}

impl Default for DecompositionConfig {
    fn default() -> Self {
        Self {
            period: 7,
            model: SeasonalType::Additive,
        }
    }
}

impl DecompositionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.period < 2 {
            return Err(ForecastError::InvalidPeriod(format!(
                "period must be at least 2, got {}",
                self.period
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_defaults() {
        let config = ForecastConfig::default();
        assert_eq!(config.horizon, 30);
        assert_eq!(config.arima_order, (1, 1, 1));
        assert_eq!(config.models.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_forecast_from_toml() {
        let config: ForecastConfig = toml::from_str(
            r#"
            horizon = 14
            arima_order = [2, 1, 0]
            models = ["linear_trend", "arima"]
            "#,
        )
        .unwrap();

        assert_eq!(config.horizon, 14);
        assert_eq!(config.arima_order, (2, 1, 0));
        assert_eq!(
            config.models,
            vec![ForecastModel::LinearTrend, ForecastModel::Arima]
        );
        assert_eq!(config.seasonal_period, 7);
    }

    #[test]
    fn test_decomposition_from_toml() {
        let config: DecompositionConfig = toml::from_str(
            r#"
            period = 12
            model = "multiplicative"
            "#,
        )
        .unwrap();
        assert_eq!(config.period, 12);
        assert_eq!(config.model, SeasonalType::Multiplicative);
    }

    #[test]
    fn test_invalid_configs() {
        let config = ForecastConfig {
            horizon: 0,
            ..ForecastConfig::default()
        };
        assert!(config.validate().is_err());

        let config = DecompositionConfig {
            period: 1,
            ..DecompositionConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ForecastError::InvalidPeriod(_))
        ));
    }
}
