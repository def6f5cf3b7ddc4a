//! # Seed Catalog
//!
//! The hardcoded inventory the shell starts with. Nothing is persisted, so
//! every run begins from this list.
//!
//! ## Products
//! ```text
//! ┌─────────────────────────────────────┬──────────┬───────┬────────────────────────────┐
//! │ Product                             │ Price    │ Stock │ Promotions                 │
//! ├─────────────────────────────────────┼──────────┼───────┼────────────────────────────┤
//! │ MacBook Air M2                      │ $1450    │ 100   │ second half price, 30% off │
//! │ Bose QuietComfort Earbuds           │ $250     │ 500   │ third one free             │
//! │ Google Pixel 7                      │ $500     │ 250   │ -                          │
//! │ Windows License                     │ $125     │ ∞     │ 30% off                    │
//! │ Special Edition Pokémon USB Drive   │ $50      │ 10    │ - (max 2 per order)        │
//! └─────────────────────────────────────┴──────────┴───────┴────────────────────────────┘
//! ```

use storefront_core::{CoreResult, Money, Product, Promotion};

/// Builds the starting catalog with promotions attached.
pub fn seed_catalog() -> CoreResult<Vec<Product>> {
    let second_half_price = Promotion::second_half_price("Second item for half price!");
    let third_one_free = Promotion::third_one_free("Third One Is Free!");
    let thirty_percent = Promotion::percent_discount("30% off!", 30.0)?;

    let mut macbook = Product::new("MacBook Air M2", Money::from_major_minor(1450, 0), 100)?;
    macbook.add_promotion(second_half_price);
    macbook.add_promotion(thirty_percent.clone());

    let mut earbuds = Product::new(
        "Bose QuietComfort Earbuds",
        Money::from_major_minor(250, 0),
        500,
    )?;
    earbuds.add_promotion(third_one_free);

    let pixel = Product::new("Google Pixel 7", Money::from_major_minor(500, 0), 250)?;

    let mut license = Product::unlimited("Windows License", Money::from_major_minor(125, 0))?;
    license.add_promotion(thirty_percent);

    let usb_drive = Product::limited(
        "Special Edition Pokémon USB Drive",
        Money::from_major_minor(50, 0),
        10,
        2,
    )?;

    Ok(vec![macbook, earbuds, pixel, license, usb_drive])
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::Store;

    #[test]
    fn test_seed_catalog() {
        let products = seed_catalog().unwrap();
        assert_eq!(products.len(), 5);
        assert!(products.iter().all(Product::is_active));

        assert_eq!(products[0].promotions().len(), 2);
        assert_eq!(products[1].promotions().len(), 1);
        assert!(products[2].promotions().is_empty());
        assert!(!products[3].is_stock_tracked());
        assert_eq!(products[4].maximum(), Some(2));

        let store = Store::new(products);
        assert_eq!(store.total_quantity(), 860);
    }
}
