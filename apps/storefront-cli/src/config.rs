//! Shell configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                         | Default    |
//! |----------------------------------|------------|
//! | `STOREFRONT_STORE_NAME`          | `Best Buy` |
//! | `STOREFRONT_SHIPPING_FEE_CENTS`  | `1000`     |

use serde::{Deserialize, Serialize};
use std::env;
use storefront_core::{StoreConfig, DEFAULT_SHIPPING_FEE_CENTS};

pub const DEFAULT_STORE_NAME: &str = "Best Buy";

/// Shell configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Shown in the menu banner
    pub store_name: String,

    /// Flat shipping fee in cents
    pub shipping_fee_cents: i64,
}

impl ShellConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_name = lookup("STOREFRONT_STORE_NAME")
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_STORE_NAME.to_string());

        let shipping_fee_cents = match lookup("STOREFRONT_SHIPPING_FEE_CENTS") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|cents| *cents >= 0)
                .ok_or_else(|| {
                    ConfigError::InvalidValue("STOREFRONT_SHIPPING_FEE_CENTS".to_string())
                })?,
            None => DEFAULT_SHIPPING_FEE_CENTS,
        };

        Ok(ShellConfig {
            store_name,
            shipping_fee_cents,
        })
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            shipping_fee_cents: self.shipping_fee_cents,
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            store_name: DEFAULT_STORE_NAME.to_string(),
            shipping_fee_cents: DEFAULT_SHIPPING_FEE_CENTS,
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ShellConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.store_config(), StoreConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = ShellConfig::from_lookup(lookup_from(&[
            ("STOREFRONT_STORE_NAME", "Corner Shop"),
            ("STOREFRONT_SHIPPING_FEE_CENTS", "499"),
        ]))
        .unwrap();
        assert_eq!(config.store_name, "Corner Shop");
        assert_eq!(config.store_config().shipping_fee().cents(), 499);
    }

    #[test]
    fn test_invalid_fee() {
        for raw in ["ten", "-1", ""] {
            let err = ShellConfig::from_lookup(lookup_from(&[(
                "STOREFRONT_SHIPPING_FEE_CENTS",
                raw,
            )]))
            .unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue(_)));
        }
    }

    #[test]
    fn test_blank_name_falls_back() {
        let config =
            ShellConfig::from_lookup(lookup_from(&[("STOREFRONT_STORE_NAME", "  ")])).unwrap();
        assert_eq!(config.store_name, DEFAULT_STORE_NAME);
    }
}
