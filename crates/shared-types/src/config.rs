use serde::{Deserialize, Serialize};

use crate::AppError;

fn default_level() -> String {
    "info".to_string()
}

/// Logging settings. The level is any `tracing` level name
/// (`trace`, `debug`, `info`, `warn`, `error`), case-insensitive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
///
/// Every field has a default so that a missing or partial file is valid.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(contents)?)
    }
}
