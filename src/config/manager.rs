use super::{generator::GeneratorConfig, output::OutputConfig, traits::ConfigSection};
use crate::error::ChaosimError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level application configuration, persisted as TOML.
///
/// Missing sections or fields in a file fall back to their defaults, so a
/// partial file overriding a single section is enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub generator: GeneratorConfig,
    pub output: OutputConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ChaosimError> {
        self.generator.validate()?;
        self.output.validate()?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ChaosimError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ChaosimError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| ChaosimError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ChaosimError> {
        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| ChaosimError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| ChaosimError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [generator]
            volatility = 0.9
            trend_strength = 0.5
            mean_reversion = 0.1
            min_value = 5
            max_value = 50
            "#,
        )
        .unwrap();

        assert_eq!(config.generator.volatility, 0.9);
        assert_eq!(config.generator.min_value, 5);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = AppConfig::default();
        config.generator.max_value = 500;
        config.output.sample_size = 3;

        let rendered = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_section_names_match_toml_layout() {
        assert_eq!(GeneratorConfig::section_name(), "generator");
        assert_eq!(OutputConfig::section_name(), "output");

        let rendered = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(rendered.contains("[generator]"));
        assert!(rendered.contains("[output]"));
    }

    #[test]
    fn test_validate_rejects_bad_sections() {
        let mut config = AppConfig::default();
        config.generator.volatility = 2.0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.output.report_path = String::new();
        assert!(config.validate().is_err());
    }
}
