//! Greeter configuration.
//!
//! The defaults answer `Hello <name>` and fall back to `Nobody`. Setting
//! `GREETER_CONFIG` or `GREETER_CONFIG_PATH` overrides those words, which
//! departs from the default greeting contract.

use serde::{Deserialize, Serialize};
use std::env::VarError;
use tracing::info;

use crate::errors::{ConfigError, Result};

pub const CONFIG_ENV_VAR: &str = "GREETER_CONFIG";
pub const CONFIG_PATH_ENV_VAR: &str = "GREETER_CONFIG_PATH";

pub const DEFAULT_GREETING: &str = "Hello";
pub const DEFAULT_FALLBACK_NAME: &str = "Nobody";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GreeterConfig {
    /// Word placed before the name, e.g. `Hello` in `Hello Ada`.
    pub greeting: String,
    /// Name used when the request carries no usable `name` parameter.
    pub fallback_name: String,
}

impl Default for GreeterConfig {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.to_string(),
            fallback_name: DEFAULT_FALLBACK_NAME.to_string(),
        }
    }
}

/// Loads from `config_path` when given, otherwise from the environment.
pub fn load_config(config_path: Option<&str>) -> Result<GreeterConfig> {
    let config = match config_path {
        Some(path) => {
            info!(path, "Loading greeter config from file");
            GreeterConfig::from_file(path)?
        }
        None => GreeterConfig::from_env()?,
    };
    config.validate()?;
    Ok(config)
}

impl GreeterConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            location: path.to_string(),
            error: Box::new(e),
        })?;
        Self::from_yaml(&content)
    }

    /// Reads inline YAML from `GREETER_CONFIG`. An unset variable yields the defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_env_value(std::env::var(CONFIG_ENV_VAR))
    }

    /// Interprets the result of looking up `GREETER_CONFIG`.
    pub fn from_env_value(value: std::result::Result<String, VarError>) -> Result<Self> {
        match value {
            Ok(config_str) => Self::from_yaml(&config_str),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(e) => Err(ConfigError::LoadFailed {
                location: CONFIG_ENV_VAR.to_string(),
                error: Box::new(e),
            }
            .into()),
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // serde_yaml rejects an empty document, but an empty file means "defaults".
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: GreeterConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.greeting.is_empty() {
            return Err(ConfigError::ValidationFailed {
                reason: "greeting cannot be empty".to_string(),
            }
            .into());
        }
        if self.fallback_name.is_empty() {
            return Err(ConfigError::ValidationFailed {
                reason: "fallback_name cannot be empty".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
