use super::traits::ConfigSection;
use crate::error::ChaosimError;
use serde::{Deserialize, Serialize};

/// Shape parameters of the chaotic recurrence.
///
/// The three rates are fractions in [0, 1]; `min_value`/`max_value` bound
/// every generated value, and the enhancement pass may overshoot up to
/// twice the ceiling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub volatility: f64,
    pub trend_strength: f64,
    pub mean_reversion: f64,
    pub min_value: i64,
    pub max_value: i64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            volatility: 0.7,
            trend_strength: 0.3,
            mean_reversion: 0.2,
            min_value: 1,
            max_value: 1000,
        }
    }
}

impl ConfigSection for GeneratorConfig {
    fn section_name() -> &'static str {
        "generator"
    }

    fn validate(&self) -> Result<(), ChaosimError> {
        if !(0.0..=1.0).contains(&self.volatility) {
            return Err(ChaosimError::Configuration(
                "Volatility must be between 0 and 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.trend_strength) {
            return Err(ChaosimError::Configuration(
                "Trend strength must be between 0 and 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mean_reversion) {
            return Err(ChaosimError::Configuration(
                "Mean reversion must be between 0 and 1".to_string(),
            ));
        }
        if self.min_value >= self.max_value {
            return Err(ChaosimError::Configuration(
                "min_value must be strictly below max_value".to_string(),
            ));
        }
        Ok(())
    }
}
