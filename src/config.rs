//! Configuration management
//!
//! Loads resolver settings from config.toml with environment overrides;
//! built-in defaults apply when no configuration file is present.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::resolver::DEFAULT_MAX_ATTEMPTS;

/// Tunable resolver behavior
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Settings {
    /// Cap on strategy consultations per resolver call
    pub max_attempts: usize,

    /// Default overwrite policy when the caller does not pass one
    /// Environment: OUTPUT_GUARD_OVERWRITE
    pub overwrite: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            overwrite: false,
        }
    }
}

impl Settings {
    /// Load settings from ./config.toml (optional) with OUTPUT_GUARD_* overrides
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("OUTPUT_GUARD").try_parsing(true))
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::Message(
                "max_attempts must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert!(!settings.overwrite);
    }

    #[test]
    fn test_validate_rejects_zero_attempts() {
        let settings = Settings {
            max_attempts: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(Settings::default().validate().is_ok());
    }
}
