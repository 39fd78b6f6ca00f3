//! Configuration
//!
//! Shop settings read from YAML. Every field has a default, so an empty
//! document is a valid configuration.

use serde::Deserialize;
use thiserror::Error;

use crate::{
    catalog::pagination::DEFAULT_PAGE_SIZE, notifications::NotificationDefaults,
    storage::DEFAULT_CART_KEY,
};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing error
    #[error("Failed to parse config YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A value parsed but is not usable
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// What happens to the cart once checkout completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutPolicy {
    /// Empty the cart after the receipt is taken.
    #[default]
    ClearCart,

    /// Leave the cart as it was.
    KeepCart,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `shopfront=debug`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Shop configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Key the cart snapshot is stored under
    pub storage_key: String,

    /// Products per catalog page
    pub page_size: usize,

    /// Cart handling after checkout
    pub checkout: CheckoutPolicy,

    /// Message display times
    pub notifications: NotificationDefaults,

    /// Log output
    pub logging: LoggingConfig,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_CART_KEY.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            checkout: CheckoutPolicy::default(),
            notifications: NotificationDefaults::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ShopConfig {
    /// Parse and validate a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] for malformed input and
    /// [`ConfigError::Invalid`] for an empty storage key or zero page size.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_norway::from_str(yaml)?;

        config.validate()?;

        Ok(config)
    }

    /// Check values serde cannot rule out.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "storage_key must not be empty".to_string(),
            ));
        }

        if self.page_size == 0 {
            return Err(ConfigError::Invalid(
                "page_size must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
