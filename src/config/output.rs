use super::traits::ConfigSection;
use crate::error::ChaosimError;
use serde::{Deserialize, Serialize};

/// Report destination and console echo settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub report_path: String,
    pub sample_size: usize,
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_path: "chaotic_transaction_analysis.json".to_string(),
            sample_size: 10,
            pretty: true,
        }
    }
}

impl ConfigSection for OutputConfig {
    fn section_name() -> &'static str {
        "output"
    }

    fn validate(&self) -> Result<(), ChaosimError> {
        if self.report_path.is_empty() {
            return Err(ChaosimError::Configuration(
                "Report path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_report_path() {
        let mut config = OutputConfig::default();
        config.report_path = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_sample_size_allowed() {
        // 0 means "skip the console echo"
        let config = OutputConfig {
            sample_size: 0,
            ..OutputConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
