//! # Domain Types
//!
//! Small value types shared by products, promotions and the store.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   ProductId     │   │  DiscountRate   │   │  StockPolicy    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  UUID v4        │   │  bps (u32)      │   │  Standard       │       │
//! │  │  identity key   │   │  3000 = 30%     │   │  Unlimited      │       │
//! │  │                 │   │                 │   │  Limited { max }│       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every product has:
//! - `id`: UUID v4 - immutable, what order lines refer to
//! - `name`: human-readable label, not required to be unique

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{CoreResult, ValidationError};

// =============================================================================
// Product Id
// =============================================================================

/// Identity of a product inside a store.
///
/// Generated once at construction. Cloning a product keeps its id, so a clone
/// stands for the same catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Generates a fresh random identity.
    pub fn new() -> Self {
        ProductId(Uuid::new_v4())
    }

    #[inline]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ProductId {
    fn default() -> Self {
        ProductId::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 3000 bps = 30% off. Integer bps keep the discount math in integer cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Upper bound: 100% off.
    pub const MAX_BPS: u32 = 10_000;

    /// Creates a discount rate from basis points.
    ///
    /// Fails with a validation error above 10000 bps (more than 100% off).
    pub fn from_bps(bps: u32) -> CoreResult<Self> {
        if bps > Self::MAX_BPS {
            return Err(ValidationError::OutOfRange {
                field: "percent".to_string(),
                min: 0,
                max: 100,
            }
            .into());
        }
        Ok(DiscountRate(bps))
    }

    /// Creates a discount rate from a percentage (`30.0` = 30% off).
    ///
    /// Rounds to the nearest basis point, so precision beyond two decimals
    /// is dropped: `33.333` builds the same rate as `33.33`.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::types::DiscountRate;
    ///
    /// let rate = DiscountRate::from_percentage(30.0).unwrap();
    /// assert_eq!(rate.bps(), 3000);
    /// assert!(DiscountRate::from_percentage(120.0).is_err());
    /// assert!(DiscountRate::from_percentage(-5.0).is_err());
    /// ```
    pub fn from_percentage(pct: f64) -> CoreResult<Self> {
        if !(0.0..=100.0).contains(&pct) {
            return Err(ValidationError::OutOfRange {
                field: "percent".to_string(),
                min: 0,
                max: 100,
            }
            .into());
        }
        Self::from_bps((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Stock Policy
// =============================================================================

/// How a product's stock reacts to purchases.
///
/// ```text
///   Standard   quantity -= bought; inactive at 0
///   Unlimited  quantity is a fixed 0 sentinel; never checked, never changed
///   Limited    Standard + no single purchase above `maximum`
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StockPolicy {
    Standard,
    Unlimited,
    Limited { maximum: i64 },
}

impl StockPolicy {
    /// Whether purchases debit the stored quantity.
    #[inline]
    pub const fn is_stock_tracked(&self) -> bool {
        !matches!(self, StockPolicy::Unlimited)
    }

    /// Per-order cap, for limited products only.
    #[inline]
    pub const fn maximum(&self) -> Option<i64> {
        match self {
            StockPolicy::Limited { maximum } => Some(*maximum),
            _ => None,
        }
    }
}

impl Default for StockPolicy {
    fn default() -> Self {
        StockPolicy::Standard
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
