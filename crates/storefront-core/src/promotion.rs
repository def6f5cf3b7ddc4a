//! # Promotions
//!
//! Pricing rules that reduce the cost of buying N units of one product.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PercentDiscount   unit × qty × (1 − percent/100)                      │
//! │  SecondHalfPrice   every pair billed at 1.5 × unit, odd unit full price │
//! │  ThirdOneFree      every group of 3 billed at 2 × unit, rest full price │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A product may carry several promotions. They never stack: the product
//! charges the cheapest single result (see [`best_price`]).

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::DiscountRate;

/// The pricing rule behind a promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PromotionRule {
    PercentDiscount { rate: DiscountRate },
    SecondHalfPrice,
    ThirdOneFree,
}

impl PromotionRule {
    /// Total cost of `quantity` units at `unit_price` under this rule.
    ///
    /// Pure. `quantity` is expected to be positive; callers validate it.
    /// `None` when the total does not fit in [`Money`].
    pub fn apply(&self, unit_price: Money, quantity: i64) -> Option<Money> {
        match self {
            PromotionRule::PercentDiscount { rate } => Some(
                unit_price
                    .checked_multiply_quantity(quantity)?
                    .apply_percentage_discount(rate.bps()),
            ),
            PromotionRule::SecondHalfPrice => {
                let pairs = quantity / 2;
                let odd = quantity % 2;
                unit_price
                    .checked_mul_ratio(pairs.checked_mul(3)?, 2)?
                    .checked_add(unit_price.checked_multiply_quantity(odd)?)
            }
            PromotionRule::ThirdOneFree => {
                let groups = quantity / 3;
                let remainder = quantity % 3;
                unit_price.checked_multiply_quantity(groups.checked_mul(2)?.checked_add(remainder)?)
            }
        }
    }
}

/// A named promotion, e.g. "30% off!".
///
/// Immutable once built; attach the same promotion to several products by
/// cloning it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promotion {
    name: String,
    rule: PromotionRule,
}

impl Promotion {
    pub fn new(name: impl Into<String>, rule: PromotionRule) -> Self {
        Promotion {
            name: name.into(),
            rule,
        }
    }

    /// Percentage off the whole line. Fails outside `0..=100`.
    ///
    /// The rate is stored in whole basis points, so `percent` is rounded to
    /// the nearest hundredth of a percent: `33.333` behaves as `33.33`.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    /// use storefront_core::promotion::Promotion;
    ///
    /// let promo = Promotion::percent_discount("30% off!", 30.0).unwrap();
    /// assert_eq!(promo.apply(Money::from_cents(10_000), 2).unwrap().cents(), 14_000);
    /// ```
    pub fn percent_discount(name: impl Into<String>, percent: f64) -> CoreResult<Self> {
        let rate = DiscountRate::from_percentage(percent)?;
        Ok(Promotion::new(name, PromotionRule::PercentDiscount { rate }))
    }

    pub fn second_half_price(name: impl Into<String>) -> Self {
        Promotion::new(name, PromotionRule::SecondHalfPrice)
    }

    pub fn third_one_free(name: impl Into<String>) -> Self {
        Promotion::new(name, PromotionRule::ThirdOneFree)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn rule(&self) -> &PromotionRule {
        &self.rule
    }

    #[inline]
    pub fn apply(&self, unit_price: Money, quantity: i64) -> Option<Money> {
        self.rule.apply(unit_price, quantity)
    }
}

/// Cheapest total among `promotions`, or `unit_price × quantity` when there
/// are none. `None` only when every candidate total overflows.
///
/// ## Example
/// ```rust
/// use storefront_core::money::Money;
/// use storefront_core::promotion::{best_price, Promotion};
///
/// let price = Money::from_cents(145_000);
/// let promos = vec![
///     Promotion::second_half_price("Second item for half price!"),
///     Promotion::percent_discount("30% off!", 30.0).unwrap(),
/// ];
/// // 2 units: half price gives $2175.00, 30% off gives $2030.00
/// assert_eq!(best_price(&promos, price, 2).unwrap().cents(), 203_000);
/// assert_eq!(best_price(&[], price, 2).unwrap().cents(), 290_000);
/// ```
pub fn best_price(promotions: &[Promotion], unit_price: Money, quantity: i64) -> Option<Money> {
    if promotions.is_empty() {
        return unit_price.checked_multiply_quantity(quantity);
    }
    // A candidate that overflows is larger than any that fits.
    promotions
        .iter()
        .filter_map(|promotion| promotion.apply(unit_price, quantity))
        .min()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dollars(amount: i64) -> Money {
        Money::from_major_minor(amount, 0)
    }

    #[test]
    fn test_percent_discount() {
        let promo = Promotion::percent_discount("30% off!", 30.0).unwrap();
        assert_eq!(promo.apply(dollars(125), 4).unwrap(), dollars(350));
        assert_eq!(promo.name(), "30% off!");

        let nothing_off = Promotion::percent_discount("0%", 0.0).unwrap();
        assert_eq!(nothing_off.apply(dollars(10), 3).unwrap(), dollars(30));

        let free = Promotion::percent_discount("100%", 100.0).unwrap();
        assert_eq!(free.apply(dollars(10), 3).unwrap(), Money::zero());
    }

    #[test]
    fn test_percent_discount_rejects_bad_percent() {
        assert!(Promotion::percent_discount("too much", 150.0).is_err());
        assert!(Promotion::percent_discount("negative", -1.0).is_err());
    }

    #[test]
    fn test_second_half_price() {
        let promo = Promotion::second_half_price("Second item for half price!");
        // 1 pair (150) + 1 single (100)
        assert_eq!(promo.apply(dollars(100), 3).unwrap(), dollars(250));
        assert_eq!(promo.apply(dollars(100), 1).unwrap(), dollars(100));
        assert_eq!(promo.apply(dollars(100), 2).unwrap(), dollars(150));
        assert_eq!(promo.apply(dollars(100), 4).unwrap(), dollars(300));
    }

    #[test]
    fn test_second_half_price_half_cent() {
        let promo = Promotion::second_half_price("half");
        // $0.99 + $0.495 = $1.485 → $1.49
        assert_eq!(promo.apply(Money::from_cents(99), 2).unwrap().cents(), 149);
    }

    #[test]
    fn test_third_one_free() {
        let promo = Promotion::third_one_free("Third One Is Free!");
        // 2 groups (360) + 1 remainder (90)
        assert_eq!(promo.apply(dollars(90), 7).unwrap(), dollars(450));
        assert_eq!(promo.apply(dollars(90), 2).unwrap(), dollars(180));
        assert_eq!(promo.apply(dollars(90), 3).unwrap(), dollars(180));
        assert_eq!(promo.apply(dollars(90), 6).unwrap(), dollars(360));
    }

    #[test]
    fn test_best_price_takes_minimum_not_stack() {
        let promos = vec![
            Promotion::third_one_free("Third One Is Free!"),
            Promotion::percent_discount("10% off", 10.0).unwrap(),
        ];
        // 3 units of $100: third free = 200, 10% off = 270
        assert_eq!(best_price(&promos, dollars(100), 3).unwrap(), dollars(200));
        // 2 units: third free = 200, 10% off = 180
        assert_eq!(best_price(&promos, dollars(100), 2).unwrap(), dollars(180));
    }

    #[test]
    fn test_best_price_order_independent() {
        let a = Promotion::second_half_price("a");
        let b = Promotion::percent_discount("b", 30.0).unwrap();
        let forward = best_price(&[a.clone(), b.clone()], dollars(1450), 5).unwrap();
        let backward = best_price(&[b, a], dollars(1450), 5).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_percent_rounds_to_nearest_basis_point() {
        let promo = Promotion::percent_discount("a third off", 33.333).unwrap();
        assert_eq!(
            promo.rule(),
            &PromotionRule::PercentDiscount {
                rate: DiscountRate::from_bps(3333).unwrap()
            }
        );
        // $100 at 33.33% off
        assert_eq!(promo.apply(dollars(100), 1).unwrap().cents(), 6_667);
    }

    #[test]
    fn test_overflowing_totals_are_none() {
        let license = dollars(125);
        let huge = 1_000_000_000_000_000;
        let half = Promotion::second_half_price("half");
        let percent = Promotion::percent_discount("30%", 30.0).unwrap();
        assert!(half.apply(license, huge).is_none());
        assert!(percent.apply(license, huge).is_none());
        assert!(best_price(&[], license, huge).is_none());
        assert!(best_price(&[half.clone(), percent], license, huge).is_none());

        // two thirds of the list price still fits, so it wins
        let free = Promotion::third_one_free("free");
        let expected = Money::from_cents(12_500 * 666_666_666_666_667);
        assert_eq!(free.apply(license, huge), Some(expected));
        assert_eq!(best_price(&[half, free], license, huge), Some(expected));
    }

    #[test]
    fn test_promotion_serializes_with_kind_tag() {
        let promo = Promotion::percent_discount("30% off!", 30.0).unwrap();
        let json = serde_json::to_value(&promo).unwrap();
        assert_eq!(json["rule"]["kind"], "percent_discount");
        assert_eq!(json["rule"]["rate"], 3000);
    }
}
