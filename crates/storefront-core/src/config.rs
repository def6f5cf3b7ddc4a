//! # Store Configuration
//!
//! Plain data describing how a [`Store`](crate::store::Store) charges.
//! Loading it from the environment is the shell's job; the core only
//! defines the shape and the defaults.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::DEFAULT_SHIPPING_FEE_CENTS;

/// Store-level settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Flat fee added once per order, in cents.
    #[serde(default = "default_shipping_fee_cents")]
    pub shipping_fee_cents: i64,
}

fn default_shipping_fee_cents() -> i64 {
    DEFAULT_SHIPPING_FEE_CENTS
}

impl StoreConfig {
    #[inline]
    pub fn shipping_fee(&self) -> Money {
        Money::from_cents(self.shipping_fee_cents)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            shipping_fee_cents: DEFAULT_SHIPPING_FEE_CENTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shipping_fee() {
        let config = StoreConfig::default();
        assert_eq!(config.shipping_fee(), Money::from_cents(1000));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: StoreConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, StoreConfig::default());

        let config: StoreConfig = serde_json::from_str(r#"{"shippingFeeCents": 499}"#).unwrap();
        assert_eq!(config.shipping_fee().cents(), 499);
    }
}
