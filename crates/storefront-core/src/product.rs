//! # Products
//!
//! A catalog entry with stock, an active flag and attached promotions.
//!
//! ## Stocking Variants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  purchase(qty)                                                          │
//! │       │                                                                 │
//! │       ├── qty <= 0?            → InvalidArgument                        │
//! │       ├── inactive?            → InvalidState                           │
//! │       ├── Standard / Limited:                                           │
//! │       │     qty > stock?       → InsufficientStock                      │
//! │       ├── Limited:                                                      │
//! │       │     qty > maximum?     → LimitExceeded                          │
//! │       │                                                                 │
//! │       ├── cost = min(promotion totals) or price × qty                   │
//! │       │     too big for Money? → InvalidArgument                        │
//! │       └── Standard / Limited: stock -= qty; stock == 0 → inactive       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Active State
//! Active → Inactive when stock reaches zero or on `deactivate()`.
//! Inactive → Active only through `activate()`; purchases never reactivate.
//! A stock-tracked product built with quantity 0 still starts active and
//! only flips when `set_quantity` or a purchase touches its stock.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::promotion::{best_price, Promotion};
use crate::types::{ProductId, StockPolicy};
use crate::validation::{
    validate_maximum, validate_price, validate_product_name, validate_purchase_quantity,
    validate_stock_level,
};

/// A product available for sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Identity (UUID v4), what order lines refer to.
    id: ProductId,

    /// Display name, not necessarily unique.
    name: String,

    /// Unit price before promotions.
    price: Money,

    /// Units on hand. Always 0 for unlimited products.
    quantity: i64,

    active: bool,

    policy: StockPolicy,

    /// Insertion order; irrelevant to pricing since the minimum wins.
    promotions: Vec<Promotion>,
}

impl Product {
    /// Creates a standard stock-tracked product.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    /// use storefront_core::product::Product;
    ///
    /// let mut pixel = Product::new("Google Pixel 7", Money::from_major_minor(500, 0), 250).unwrap();
    /// let cost = pixel.purchase(2).unwrap();
    /// assert_eq!(cost.cents(), 100_000);
    /// assert_eq!(pixel.quantity(), 248);
    /// ```
    pub fn new(name: impl Into<String>, price: Money, quantity: i64) -> CoreResult<Self> {
        Self::build(name.into(), price, quantity, StockPolicy::Standard)
    }

    /// Creates a non-stocked product that can be bought in any amount.
    pub fn unlimited(name: impl Into<String>, price: Money) -> CoreResult<Self> {
        Self::build(name.into(), price, 0, StockPolicy::Unlimited)
    }

    /// Creates a stock-tracked product capped at `maximum` units per purchase.
    pub fn limited(
        name: impl Into<String>,
        price: Money,
        quantity: i64,
        maximum: i64,
    ) -> CoreResult<Self> {
        validate_maximum(maximum)?;
        Self::build(name.into(), price, quantity, StockPolicy::Limited { maximum })
    }

    fn build(name: String, price: Money, quantity: i64, policy: StockPolicy) -> CoreResult<Self> {
        validate_product_name(&name)?;
        validate_price(price)?;
        validate_stock_level(quantity)?;

        Ok(Product {
            id: ProductId::new(),
            name,
            price,
            quantity,
            active: true,
            policy,
            promotions: Vec::new(),
        })
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[inline]
    pub fn id(&self) -> ProductId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn policy(&self) -> StockPolicy {
        self.policy
    }

    /// Per-order cap, `Some` only for limited products.
    #[inline]
    pub fn maximum(&self) -> Option<i64> {
        self.policy.maximum()
    }

    #[inline]
    pub fn is_stock_tracked(&self) -> bool {
        self.policy.is_stock_tracked()
    }

    /// Current stock. Meaningless (always 0) for unlimited products.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Replaces the stock level.
    ///
    /// Negative values are rejected. Setting 0 deactivates the product;
    /// setting a positive value does NOT reactivate it. Unlimited products
    /// ignore the request entirely.
    pub fn set_quantity(&mut self, quantity: i64) -> CoreResult<()> {
        if !self.is_stock_tracked() {
            return Ok(());
        }

        validate_stock_level(quantity)?;
        self.quantity = quantity;
        if self.quantity == 0 {
            self.active = false;
        }
        Ok(())
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    #[inline]
    pub fn promotions(&self) -> &[Promotion] {
        &self.promotions
    }

    pub fn add_promotion(&mut self, promotion: Promotion) {
        self.promotions.push(promotion);
    }

    pub fn clear_promotions(&mut self) {
        self.promotions.clear();
    }

    // -------------------------------------------------------------------------
    // Pricing & Purchase
    // -------------------------------------------------------------------------

    /// Cost of `quantity` units right now, without touching stock.
    ///
    /// Does not check stock, limits or the active flag; see [`purchase`].
    /// Fails with `AmountTooLarge` when the cost does not fit in [`Money`].
    ///
    /// [`purchase`]: Product::purchase
    pub fn quote(&self, quantity: i64) -> CoreResult<Money> {
        best_price(&self.promotions, self.price, quantity).ok_or_else(|| {
            CoreError::AmountTooLarge {
                what: format!("Cost of {} x {}", quantity, self.name),
            }
        })
    }

    /// Runs every purchase check and prices the request, leaving the product
    /// untouched. Succeeds exactly when [`purchase`] would, with the same cost.
    ///
    /// [`purchase`]: Product::purchase
    pub fn check_purchase(&self, quantity: i64) -> CoreResult<Money> {
        validate_purchase_quantity(quantity)?;

        if !self.active {
            return Err(CoreError::InactiveProduct {
                name: self.name.clone(),
            });
        }

        if self.is_stock_tracked() && quantity > self.quantity {
            return Err(CoreError::InsufficientStock {
                name: self.name.clone(),
                available: self.quantity,
                requested: quantity,
            });
        }

        if let Some(maximum) = self.maximum() {
            if quantity > maximum {
                return Err(CoreError::LimitExceeded {
                    name: self.name.clone(),
                    maximum,
                    requested: quantity,
                });
            }
        }

        self.quote(quantity)
    }

    /// Buys `quantity` units and returns the amount charged.
    ///
    /// The charge is not rounded beyond the cent; formatting is the
    /// caller's concern. On error nothing changes.
    pub fn purchase(&mut self, quantity: i64) -> CoreResult<Money> {
        let cost = self.check_purchase(quantity)?;

        if self.is_stock_tracked() {
            self.quantity -= quantity;
            if self.quantity == 0 {
                self.active = false;
            }
        }

        debug!(
            product = %self.name,
            quantity,
            cost = %cost,
            remaining = self.quantity,
            "Purchased product"
        );

        Ok(cost)
    }

    // -------------------------------------------------------------------------
    // Display
    // -------------------------------------------------------------------------

    /// One-line human summary.
    ///
    /// ```text
    /// MacBook Air M2, Price: $1450.00, Quantity: 100, Promotions: 30% off!
    /// Windows License, Price: $125.00, Non-Stocked (Unlimited)
    /// USB Drive, Price: $50.00, Quantity: 10, Max per order: 2
    /// ```
    pub fn describe(&self) -> String {
        let mut summary = match self.policy {
            StockPolicy::Standard => format!(
                "{}, Price: {}, Quantity: {}",
                self.name, self.price, self.quantity
            ),
            StockPolicy::Unlimited => format!(
                "{}, Price: {}, Non-Stocked (Unlimited)",
                self.name, self.price
            ),
            StockPolicy::Limited { maximum } => format!(
                "{}, Price: {}, Quantity: {}, Max per order: {}",
                self.name, self.price, self.quantity, maximum
            ),
        };

        if !self.promotions.is_empty() {
            let names: Vec<&str> = self.promotions.iter().map(Promotion::name).collect();
            summary.push_str(", Promotions: ");
            summary.push_str(&names.join(", "));
        }

        summary
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn dollars(amount: i64) -> Money {
        Money::from_major_minor(amount, 0)
    }

    #[test]
    fn test_create_normal_product() {
        let product = Product::new("Test Product", dollars(100), 50).unwrap();
        assert_eq!(product.name(), "Test Product");
        assert_eq!(product.price(), dollars(100));
        assert_eq!(product.quantity(), 50);
        assert!(product.is_active());
        assert_eq!(product.maximum(), None);
    }

    #[test]
    fn test_create_product_with_invalid_arguments() {
        let err = Product::new("", dollars(1450), 100).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = Product::new("MacBook Air M2", dollars(-10), 100).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = Product::new("MacBook Air M2", dollars(10), -1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = Product::limited("USB Drive", dollars(50), 10, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_product_purchase() {
        let mut product = Product::new("Test Product", dollars(10), 5).unwrap();
        assert_eq!(product.purchase(3).unwrap(), dollars(30));
        assert_eq!(product.quantity(), 2);
        assert!(product.is_active());
    }

    #[test]
    fn test_product_reaches_zero_quantity() {
        let mut product = Product::new("Test Product", dollars(10), 1).unwrap();
        assert_eq!(product.purchase(1).unwrap(), dollars(10));
        assert_eq!(product.quantity(), 0);
        assert!(!product.is_active());

        let err = product.purchase(1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn test_buy_larger_quantity_than_available() {
        let mut product = Product::new("Test Product", dollars(100), 5).unwrap();
        let err = product.purchase(6).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientStock {
                available: 5,
                requested: 6,
                ..
            }
        ));
        assert_eq!(product.quantity(), 5);
        assert!(product.is_active());
    }

    #[test]
    fn test_purchase_rejects_non_positive_quantity() {
        let mut product = Product::new("Test Product", dollars(100), 5).unwrap();
        assert_eq!(
            product.purchase(0).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            product.purchase(-2).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(product.quantity(), 5);
    }

    #[test]
    fn test_deactivated_product_cannot_be_bought() {
        let mut product = Product::new("Test Product", dollars(100), 5).unwrap();
        product.deactivate();
        assert_eq!(
            product.purchase(1).unwrap_err().kind(),
            ErrorKind::InvalidState
        );

        product.activate();
        assert!(product.purchase(1).is_ok());
    }

    #[test]
    fn test_zero_stock_product_starts_active() {
        let mut product = Product::new("Empty", dollars(5), 0).unwrap();
        assert!(product.is_active());

        // The stock check fires before anything flips the flag
        let err = product.purchase(1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientStock);
        assert!(product.is_active());

        product.set_quantity(0).unwrap();
        assert!(!product.is_active());
    }

    #[test]
    fn test_set_quantity() {
        let mut product = Product::new("Test Product", dollars(100), 5).unwrap();
        product.set_quantity(20).unwrap();
        assert_eq!(product.quantity(), 20);

        let err = product.set_quantity(-1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(product.quantity(), 20);

        product.set_quantity(0).unwrap();
        assert!(!product.is_active());

        // Restocking does not reactivate
        product.set_quantity(3).unwrap();
        assert!(!product.is_active());
    }

    #[test]
    fn test_unlimited_product() {
        let mut license = Product::unlimited("Windows License", dollars(125)).unwrap();
        assert_eq!(license.quantity(), 0);
        assert!(license.is_active());
        assert!(!license.is_stock_tracked());

        assert_eq!(license.purchase(1000).unwrap(), dollars(125_000));
        assert_eq!(license.quantity(), 0);
        assert!(license.is_active());

        license.set_quantity(50).unwrap();
        assert_eq!(license.quantity(), 0);
        license.set_quantity(-50).unwrap();
        assert!(license.is_active());

        license.deactivate();
        assert_eq!(
            license.purchase(1).unwrap_err().kind(),
            ErrorKind::InvalidState
        );
    }

    #[test]
    fn test_limited_product() {
        let mut drive = Product::limited("USB Drive", dollars(50), 10, 2).unwrap();
        assert_eq!(drive.maximum(), Some(2));

        let err = drive.purchase(3).unwrap_err();
        assert!(matches!(
            err,
            CoreError::LimitExceeded {
                maximum: 2,
                requested: 3,
                ..
            }
        ));
        assert_eq!(drive.quantity(), 10);

        assert_eq!(drive.purchase(2).unwrap(), dollars(100));
        assert_eq!(drive.quantity(), 8);
    }

    #[test]
    fn test_limited_product_checks_stock_before_limit() {
        let mut drive = Product::limited("USB Drive", dollars(50), 1, 2).unwrap();
        let err = drive.purchase(3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientStock);

        assert_eq!(drive.purchase(1).unwrap(), dollars(50));
        assert!(!drive.is_active());
    }

    #[test]
    fn test_purchase_charges_best_promotion() {
        let mut macbook = Product::new("MacBook Air M2", dollars(1450), 100).unwrap();
        macbook.add_promotion(Promotion::second_half_price("Second item for half price!"));
        macbook.add_promotion(Promotion::percent_discount("30% off!", 30.0).unwrap());

        assert_eq!(macbook.quote(2).unwrap(), dollars(2030));
        assert_eq!(macbook.purchase(2).unwrap(), dollars(2030));
        assert_eq!(macbook.quantity(), 98);

        macbook.clear_promotions();
        assert!(macbook.promotions().is_empty());
        assert_eq!(macbook.purchase(2).unwrap(), dollars(2900));
    }

    #[test]
    fn test_huge_unlimited_purchase_is_rejected() {
        let mut license = Product::unlimited("Windows License", dollars(125)).unwrap();
        let huge = 1_000_000_000_000_000;

        let err = license.purchase(huge).unwrap_err();
        assert!(matches!(err, CoreError::AmountTooLarge { .. }));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(license.is_active());

        // still sellable afterwards
        assert_eq!(license.purchase(2).unwrap(), dollars(250));

        // a promotion that brings the cost back into range is honored
        license.add_promotion(Promotion::third_one_free("Third One Is Free!"));
        let cost = license.purchase(huge).unwrap();
        assert_eq!(cost.cents(), 12_500 * 666_666_666_666_667);
        assert!(!cost.is_negative());
    }

    #[test]
    fn test_check_purchase_matches_purchase_without_mutating() {
        let mut drive = Product::limited("USB Drive", dollars(50), 10, 2).unwrap();
        assert_eq!(drive.check_purchase(2).unwrap(), dollars(100));
        assert_eq!(drive.quantity(), 10);
        assert_eq!(
            drive.check_purchase(3).unwrap_err().kind(),
            ErrorKind::LimitExceeded
        );
        assert_eq!(drive.purchase(2).unwrap(), dollars(100));
        assert_eq!(drive.quantity(), 8);
    }

    #[test]
    fn test_describe() {
        let mut macbook = Product::new("MacBook Air M2", dollars(1450), 100).unwrap();
        assert_eq!(
            macbook.describe(),
            "MacBook Air M2, Price: $1450.00, Quantity: 100"
        );

        macbook.add_promotion(Promotion::second_half_price("Second item for half price!"));
        macbook.add_promotion(Promotion::percent_discount("30% off!", 30.0).unwrap());
        assert_eq!(
            macbook.describe(),
            "MacBook Air M2, Price: $1450.00, Quantity: 100, \
             Promotions: Second item for half price!, 30% off!"
        );

        let license = Product::unlimited("Windows License", dollars(125)).unwrap();
        assert_eq!(
            license.describe(),
            "Windows License, Price: $125.00, Non-Stocked (Unlimited)"
        );

        let drive = Product::limited("USB Drive", dollars(50), 10, 2).unwrap();
        assert_eq!(
            drive.describe(),
            "USB Drive, Price: $50.00, Quantity: 10, Max per order: 2"
        );
    }

    #[test]
    fn test_same_name_products_are_distinct() {
        let a = Product::new("Twin", dollars(1), 1).unwrap();
        let b = Product::new("Twin", dollars(1), 1).unwrap();
        assert_ne!(a.id(), b.id());
        assert_eq!(a.clone().id(), a.id());
    }
}
