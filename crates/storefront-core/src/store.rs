//! # Store
//!
//! Owns the catalog and turns shopping lists into charged orders.
//!
//! ## Order Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  place_order([(id, qty), ...], include_shipping)                        │
//! │                                                                         │
//! │  for each line, in order:                                               │
//! │     ├── id not in store or product inactive → ProductUnavailable        │
//! │     ├── product.check_purchase(qty)?  (price, nothing debited yet)      │
//! │     ├── total + cost overflows?      → AmountTooLarge                   │
//! │     ├── product.purchase(qty)         (stock debited immediately)       │
//! │     └── details.push(Item)                                              │
//! │                                                                         │
//! │  include_shipping && lines non-empty:                                   │
//! │     └── total += fee; details.push(ShippingFee)                         │
//! │                                                                         │
//! │  NOTE: a failing line aborts the order but lines before it STAY         │
//! │        applied. Use `preview_order` first when that matters.           │
//! │                                                                         │
//! │  Each line is rounded to the cent on its own, so two lines of a        │
//! │  half-cent cost each round up: 2 × $1.485 is charged $2.98.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::StoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::product::Product;
use crate::types::ProductId;
use crate::validation::validate_shipping_fee;

/// Label used for the synthetic shipping entry on receipts.
pub const SHIPPING_FEE_LABEL: &str = "Shipping Fee";

// =============================================================================
// Order Types
// =============================================================================

/// One `(product, quantity)` request within an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product: ProductId,
    pub quantity: i64,
}

impl OrderLine {
    pub fn new(product: ProductId, quantity: i64) -> Self {
        OrderLine { product, quantity }
    }
}

/// One entry on a receipt: either a purchased product or the shipping fee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OrderDetail {
    Item {
        product: ProductId,
        /// Name at time of sale (frozen).
        name: String,
        quantity: i64,
        cost: Money,
    },
    ShippingFee {
        cost: Money,
    },
}

impl OrderDetail {
    pub fn label(&self) -> &str {
        match self {
            OrderDetail::Item { name, .. } => name,
            OrderDetail::ShippingFee { .. } => SHIPPING_FEE_LABEL,
        }
    }

    /// Units on this entry; shipping counts as 1.
    pub fn quantity(&self) -> i64 {
        match self {
            OrderDetail::Item { quantity, .. } => *quantity,
            OrderDetail::ShippingFee { .. } => 1,
        }
    }

    pub fn cost(&self) -> Money {
        match self {
            OrderDetail::Item { cost, .. } | OrderDetail::ShippingFee { cost } => *cost,
        }
    }

    /// Effective price per unit after promotions, rounded to the cent.
    pub fn unit_price(&self) -> Money {
        self.cost()
            .checked_mul_ratio(1, self.quantity())
            .unwrap_or_else(|| self.cost())
    }

    pub fn is_shipping(&self) -> bool {
        matches!(self, OrderDetail::ShippingFee { .. })
    }
}

/// Result of a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub total: Money,
    pub details: Vec<OrderDetail>,
    pub placed_at: DateTime<Utc>,
}

impl OrderReceipt {
    /// The flat shipping fee charged on this order, if any.
    pub fn shipping_fee(&self) -> Option<Money> {
        self.details
            .iter()
            .find(|detail| detail.is_shipping())
            .map(OrderDetail::cost)
    }
}

// =============================================================================
// Store
// =============================================================================

/// The storefront: an ordered catalog plus a flat shipping fee.
///
/// ## Invariants
/// - Products are owned by the store; callers refer to them by `ProductId`
/// - Catalog order is insertion order and is preserved by every listing
/// - The shipping fee is never negative
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    products: Vec<Product>,
    shipping_fee: Money,
}

impl Store {
    /// Creates a store with the default configuration ($10.00 shipping).
    pub fn new(products: Vec<Product>) -> Self {
        Store {
            products,
            shipping_fee: StoreConfig::default().shipping_fee(),
        }
    }

    /// Creates a store with explicit settings.
    pub fn with_config(products: Vec<Product>, config: StoreConfig) -> CoreResult<Self> {
        let shipping_fee = config.shipping_fee();
        validate_shipping_fee(shipping_fee)?;
        Ok(Store {
            products,
            shipping_fee,
        })
    }

    #[inline]
    pub fn shipping_fee(&self) -> Money {
        self.shipping_fee
    }

    // -------------------------------------------------------------------------
    // Catalog
    // -------------------------------------------------------------------------

    /// Adds a product and returns its id.
    pub fn add_product(&mut self, product: Product) -> ProductId {
        let id = product.id();
        debug!(id = %id, name = %product.name(), "Adding product");
        self.products.push(product);
        id
    }

    /// Removes a product by id. Absent ids are a no-op and return `None`.
    pub fn remove_product(&mut self, id: ProductId) -> Option<Product> {
        let index = self.position(id)?;
        debug!(id = %id, "Removing product");
        Some(self.products.remove(index))
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id() == id)
    }

    pub fn product_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|product| product.id() == id)
    }

    /// All products, active or not, in catalog order.
    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Sum of every product's quantity, active or not.
    ///
    /// Widened to `i128` so any number of `i64` stock levels adds up exactly.
    pub fn total_quantity(&self) -> i128 {
        self.products
            .iter()
            .map(|product| i128::from(product.quantity()))
            .sum()
    }

    /// Active products in catalog order.
    pub fn active_products(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| product.is_active())
            .collect()
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|product| product.id() == id)
    }

    // -------------------------------------------------------------------------
    // Orders
    // -------------------------------------------------------------------------

    /// Buys every line in order and returns the charged receipt.
    ///
    /// Not atomic: when line N fails, lines before N have already debited
    /// stock and stay that way. Line N itself is never debited. The same
    /// product may appear on several lines.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    /// use storefront_core::product::Product;
    /// use storefront_core::store::{OrderLine, Store};
    ///
    /// let pixel = Product::new("Google Pixel 7", Money::from_major_minor(500, 0), 250).unwrap();
    /// let id = pixel.id();
    /// let mut store = Store::new(vec![pixel]);
    ///
    /// let receipt = store.place_order(&[OrderLine::new(id, 2)], true).unwrap();
    /// assert_eq!(receipt.total, Money::from_major_minor(1010, 0));
    /// assert_eq!(receipt.details.len(), 2);
    /// ```
    pub fn place_order(
        &mut self,
        lines: &[OrderLine],
        include_shipping: bool,
    ) -> CoreResult<OrderReceipt> {
        let mut total = Money::zero();
        let mut details = Vec::with_capacity(lines.len() + 1);

        for line in lines {
            let index = self
                .position(line.product)
                .filter(|&index| self.products[index].is_active());

            let Some(index) = index else {
                return Err(self.unavailable(line.product));
            };

            let product = &mut self.products[index];
            let cost = product.check_purchase(line.quantity)?;
            total = total
                .checked_add(cost)
                .ok_or_else(order_total_too_large)?;
            product.purchase(line.quantity)?;
            details.push(OrderDetail::Item {
                product: line.product,
                name: product.name().to_string(),
                quantity: line.quantity,
                cost,
            });
        }

        if include_shipping && !lines.is_empty() {
            total = total
                .checked_add(self.shipping_fee)
                .ok_or_else(order_total_too_large)?;
            details.push(OrderDetail::ShippingFee {
                cost: self.shipping_fee,
            });
        }

        debug!(lines = lines.len(), total = %total, "Order placed");

        Ok(OrderReceipt {
            total,
            details,
            placed_at: Utc::now(),
        })
    }

    /// Runs the order against a scratch copy of the catalog.
    ///
    /// Returns exactly what [`place_order`](Store::place_order) would, success
    /// or error, without changing this store.
    pub fn preview_order(
        &self,
        lines: &[OrderLine],
        include_shipping: bool,
    ) -> CoreResult<OrderReceipt> {
        let mut scratch = self.clone();
        scratch.place_order(lines, include_shipping)
    }

    fn unavailable(&self, id: ProductId) -> CoreError {
        let product = match self.product(id) {
            Some(product) => product.name().to_string(),
            None => id.to_string(),
        };
        CoreError::ProductUnavailable { product }
    }

    // -------------------------------------------------------------------------
    // Display
    // -------------------------------------------------------------------------

    /// Numbered listing of active products.
    ///
    /// ```text
    /// Active Products:
    /// 1. Google Pixel 7, Price: $500.00, Quantity: 250 (Available: 250)
    /// 2. Windows License, Price: $125.00, Non-Stocked (Unlimited) (Available: 0)
    /// ```
    pub fn render_catalog(&self) -> String {
        let active = self.active_products();
        if active.is_empty() {
            return "No active products available.".to_string();
        }

        let mut listing = String::from("Active Products:");
        for (index, product) in active.iter().enumerate() {
            listing.push_str(&format!(
                "\n{}. {} (Available: {})",
                index + 1,
                product.describe(),
                product.quantity()
            ));
        }
        listing
    }
}

fn order_total_too_large() -> CoreError {
    CoreError::AmountTooLarge {
        what: "Order total".to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
