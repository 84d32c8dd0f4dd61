//! Takeout CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                  | Default                       |
//! |---------------------------|-------------------------------|
//! | `TAKEOUT_RESTAURANT_NAME` | `Generic Take Out Restaurant` |
//! | `TAKEOUT_MENU`            | `meals` (or `desserts`)       |
//! | `TAKEOUT_RECEIPT_FORMAT`  | `text` (or `json`)            |
//!
//! Log filtering is separate and uses `RUST_LOG` (see `init_tracing` in main).

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::menus::MenuChoice;

pub const DEFAULT_RESTAURANT_NAME: &str = "Generic Take Out Restaurant";

/// How the final receipt is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptFormat {
    /// Aligned columns for people.
    #[default]
    Text,
    /// Pretty-printed JSON for scripts.
    Json,
}

impl FromStr for ReceiptFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ReceiptFormat::Text),
            "json" => Ok(ReceiptFormat::Json),
            _ => Err(s.to_string()),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Shown in the welcome banner
    pub restaurant_name: String,

    /// Which compiled-in menu to serve
    pub menu: MenuChoice,

    /// Receipt output format
    pub receipt_format: ReceiptFormat,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key → value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = AppConfig {
            restaurant_name: lookup("TAKEOUT_RESTAURANT_NAME")
                .unwrap_or_else(|| DEFAULT_RESTAURANT_NAME.to_string())
                .trim()
                .to_string(),

            menu: lookup("TAKEOUT_MENU")
                .map(|raw| raw.parse::<MenuChoice>())
                .transpose()
                .map_err(|_| ConfigError::InvalidValue("TAKEOUT_MENU".to_string()))?
                .unwrap_or_default(),

            receipt_format: lookup("TAKEOUT_RECEIPT_FORMAT")
                .map(|raw| raw.parse::<ReceiptFormat>())
                .transpose()
                .map_err(|_| ConfigError::InvalidValue("TAKEOUT_RECEIPT_FORMAT".to_string()))?
                .unwrap_or_default(),
        };

        if config.restaurant_name.is_empty() {
            return Err(ConfigError::MissingRequired(
                "TAKEOUT_RESTAURANT_NAME".to_string(),
            ));
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}
