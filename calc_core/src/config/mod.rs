//! Configuration loading from TOML files

mod constants;
mod profile;

pub use constants::FormulaConstants;
pub use profile::DefaultProfile;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// The complete configuration surface: seed defaults plus formula constants
///
/// Both sections fall back to their defaults when absent, so an empty file is
/// a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalcConfig {
    #[serde(default)]
    pub profile: DefaultProfile,
    #[serde(default)]
    pub constants: FormulaConstants,
}

impl CalcConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        load_toml(path)
    }
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config: CalcConfig = parse_toml("").unwrap();
        assert_eq!(config, CalcConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[profile]
scaling_attribute = 3500
crit_rate = 70
crit_damage = 140

[constants]
unbroken_toughness = 0.85
"#;

        let config: CalcConfig = parse_toml(toml).unwrap();
        assert!((config.profile.scaling_attribute - 3500.0).abs() < f64::EPSILON);
        assert!((config.profile.crit_rate - 70.0).abs() < f64::EPSILON);
        // Untouched keys keep their defaults
        assert!((config.profile.character_level - 50.0).abs() < f64::EPSILON);
        assert!((config.constants.def_flat - 200.0).abs() < f64::EPSILON);
        assert!((config.constants.unbroken_toughness - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let result: Result<CalcConfig, ConfigError> = parse_toml("[profile\nbad =");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
