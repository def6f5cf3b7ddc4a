//! # storefront-core: Pure Business Logic for the Storefront
//!
//! This crate contains the pricing and inventory model of a small retail
//! storefront: products with different stocking rules, promotions applied at
//! purchase time, and a store that turns shopping lists into charged orders.
//! It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 storefront-cli (text menu)                      │   │
//! │  │    List products ──► Total stock ──► Make an order ──► Quit    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain function calls                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ promotion │  │  product  │  │   store   │  │ validation│  │   │
//! │  │   │  Percent  │  │ Standard  │  │  Catalog  │  │   rules   │  │   │
//! │  │   │ HalfPrice │  │ Unlimited │  │  Orders   │  │  checks   │  │   │
//! │  │   │ ThirdFree │  │  Limited  │  │  Receipt  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO GLOBAL STATE                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Small value types (ProductId, DiscountRate, StockPolicy)
//! - [`promotion`] - Pricing rules and the best-price policy
//! - [`product`] - Products and their purchase operation
//! - [`store`] - Catalog ownership and order placement
//! - [`config`] - Store settings
//! - [`error`] - Domain error types
//! - [`validation`] - Argument validation
//!
//! ## Design Principles
//!
//! 1. **Single-threaded**: the store is a plain value; wrap it in a lock if a
//!    multi-client front end ever shares one
//! 2. **No I/O**: reading input and printing belong to the shell
//! 3. **Integer Money**: all monetary values are in cents (i64)
//! 4. **Explicit Errors**: all errors are typed and returned, never logged here
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Money, OrderLine, Product, Promotion, Store};
//!
//! let mut macbook = Product::new("MacBook Air M2", Money::from_major_minor(1450, 0), 100).unwrap();
//! macbook.add_promotion(Promotion::percent_discount("30% off!", 30.0).unwrap());
//! let id = macbook.id();
//!
//! let mut store = Store::new(vec![macbook]);
//! let receipt = store.place_order(&[OrderLine::new(id, 2)], true).unwrap();
//!
//! // 2 × $1450 at 30% off + $10 shipping
//! assert_eq!(receipt.total, Money::from_major_minor(2040, 0));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod money;
pub mod product;
pub mod promotion;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use storefront_core::Money` instead of
// `use storefront_core::money::Money`

pub use config::StoreConfig;
pub use error::{CoreError, CoreResult, ErrorKind, ValidationError};
pub use money::Money;
pub use product::Product;
pub use promotion::{Promotion, PromotionRule};
pub use store::{OrderDetail, OrderLine, OrderReceipt, Store};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Flat shipping fee charged once per order unless configured otherwise.
pub const DEFAULT_SHIPPING_FEE_CENTS: i64 = 1000;
