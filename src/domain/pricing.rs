//! Cart pricing.
//!
//! Each line total is rounded to cents on its own, then the sum is rounded again.
//! Rounding is half away from zero on exact decimals, see [`Money::rounded`].

use super::cart::CartEntry;
use super::money::Money;
use super::product::Product;
use super::transaction::TransactionLineItem;
use crate::error::{PosError, Result};
use std::collections::HashMap;

/// The priced form of a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedCart {
    pub items: Vec<TransactionLineItem>,
    pub total: Money,
}

fn index_catalog(catalog: &[Product]) -> HashMap<&str, &Product> {
    catalog
        .iter()
        .map(|product| (product.id.as_str(), product))
        .collect()
}

fn price_line(product: &Product, entry: &CartEntry) -> Result<TransactionLineItem> {
    let unit_price = product.unit_price(entry.is_member_price);
    let line_total = unit_price
        .checked_times(entry.quantity)
        .ok_or_else(|| PosError::AmountOverflow(entry.product_id.clone()))?
        .rounded();

    Ok(TransactionLineItem {
        product_id: product.id.clone(),
        name: product.name.clone(),
        quantity: entry.quantity,
        unit_price,
        line_total,
        is_member_price: entry.is_member_price,
    })
}

fn sum_total(items: &[TransactionLineItem]) -> Result<Money> {
    Money::checked_sum(items.iter().map(|item| item.line_total))
        .map(Money::rounded)
        .ok_or_else(|| PosError::AmountOverflow("cart total".to_string()))
}

/// Prices every entry against the catalog, in input order.
///
/// Fails on the first entry whose product is missing or inactive, or whose
/// amount does not fit; nothing is returned for the other lines in that case.
pub fn price_cart(catalog: &[Product], entries: &[CartEntry]) -> Result<PricedCart> {
    let products = index_catalog(catalog);

    let items = entries
        .iter()
        .map(|entry| match products.get(entry.product_id.as_str()) {
            Some(product) if product.active => price_line(product, entry),
            _ => Err(PosError::UnknownOrInactiveProduct(entry.product_id.clone())),
        })
        .collect::<Result<Vec<_>>>()?;

    let total = sum_total(&items)?;
    Ok(PricedCart { items, total })
}

/// Running total for display: lines that cannot be priced are dropped instead of failing.
///
/// Only a total too large to represent is an error.
pub fn preview_cart(catalog: &[Product], entries: &[CartEntry]) -> Result<PricedCart> {
    let products = index_catalog(catalog);

    let items: Vec<_> = entries
        .iter()
        .filter_map(|entry| {
            products
                .get(entry.product_id.as_str())
                .filter(|product| product.active)
                .and_then(|product| price_line(product, entry).ok())
        })
        .collect();

    let total = sum_total(&items)?;
    Ok(PricedCart { items, total })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn product(id: &str, member: Decimal, non_member: Decimal, active: bool) -> Product {
        Product {
            id: id.into(),
            name: id.to_uppercase(),
            price_member: Money::new(member),
            price_non_member: Money::new(non_member),
            inventory_count: 10,
            active,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("cola", dec!(1), dec!(1.5), true),
            product("gum", dec!(0.333), dec!(0.335), true),
            product("retired", dec!(2), dec!(3), false),
        ]
    }

    #[test]
    fn test_member_price_line() {
        let priced = price_cart(&catalog(), &[CartEntry::new("cola", 2, true)]).unwrap();
        assert_eq!(priced.items.len(), 1);
        assert_eq!(priced.items[0].unit_price, Money::new(dec!(1)));
        assert_eq!(priced.items[0].line_total, Money::new(dec!(2)));
        assert_eq!(priced.total, Money::new(dec!(2.00)));
    }

    #[test]
    fn test_non_member_price_line() {
        let priced = price_cart(&catalog(), &[CartEntry::new("cola", 3, false)]).unwrap();
        assert_eq!(priced.total, Money::new(dec!(4.50)));
        assert_eq!(priced.items[0].name, "COLA");
    }

    #[test]
    fn test_lines_rounded_before_summing() {
        // 0.333 rounds to 0.33 per line; summing first would give 0.999 -> 1.00.
        let entries = [
            CartEntry::new("gum", 1, true),
            CartEntry::new("gum", 1, true),
            CartEntry::new("gum", 1, true),
        ];
        let priced = price_cart(&catalog(), &entries).unwrap();
        assert!(priced.items.iter().all(|i| i.line_total == Money::new(dec!(0.33))));
        assert_eq!(priced.total, Money::new(dec!(0.99)));
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        let priced = price_cart(&catalog(), &[CartEntry::new("gum", 1, false)]).unwrap();
        assert_eq!(priced.items[0].line_total, Money::new(dec!(0.34)));
    }

    #[test]
    fn test_same_product_two_modes_stays_two_lines() {
        let entries = [CartEntry::new("cola", 1, true), CartEntry::new("cola", 1, false)];
        let priced = price_cart(&catalog(), &entries).unwrap();
        assert_eq!(priced.items.len(), 2);
        assert!(priced.items[0].is_member_price);
        assert!(!priced.items[1].is_member_price);
        assert_eq!(priced.total, Money::new(dec!(2.5)));
    }

    #[test]
    fn test_unknown_product_fails_whole_cart() {
        let entries = [CartEntry::new("cola", 1, true), CartEntry::new("unknown", 1, true)];
        let result = price_cart(&catalog(), &entries);
        assert!(matches!(
            result,
            Err(PosError::UnknownOrInactiveProduct(id)) if id == "unknown"
        ));
    }

    #[test]
    fn test_inactive_product_fails() {
        let result = price_cart(&catalog(), &[CartEntry::new("retired", 1, true)]);
        assert!(matches!(
            result,
            Err(PosError::UnknownOrInactiveProduct(id)) if id == "retired"
        ));
    }

    #[test]
    fn test_preview_skips_unpriceable_lines() {
        let entries = [
            CartEntry::new("retired", 1, true),
            CartEntry::new("cola", 2, false),
            CartEntry::new("unknown", 1, true),
        ];
        let preview = preview_cart(&catalog(), &entries).unwrap();
        assert_eq!(preview.items.len(), 1);
        assert_eq!(preview.total, Money::new(dec!(3)));
    }

    fn ten_to_28() -> Decimal {
        Decimal::from_i128_with_scale(10_i128.pow(28), 0)
    }

    #[test]
    fn test_line_overflow_is_an_error() {
        let catalog = vec![product("yacht", ten_to_28(), ten_to_28(), true)];
        let result = price_cart(&catalog, &[CartEntry::new("yacht", 10, true)]);
        assert!(matches!(
            result,
            Err(PosError::AmountOverflow(id)) if id == "yacht"
        ));
    }

    #[test]
    fn test_total_overflow_is_an_error() {
        let catalog = vec![product("yacht", Decimal::MAX, Decimal::MAX, true)];
        let entries = [CartEntry::new("yacht", 1, true), CartEntry::new("yacht", 1, false)];

        assert!(matches!(
            price_cart(&catalog, &entries),
            Err(PosError::AmountOverflow(_))
        ));
        assert!(matches!(
            preview_cart(&catalog, &entries),
            Err(PosError::AmountOverflow(_))
        ));
    }

    #[test]
    fn test_preview_drops_overflowing_line() {
        let mut catalog = catalog();
        catalog.push(product("yacht", ten_to_28(), ten_to_28(), true));
        let entries = [CartEntry::new("yacht", 10, true), CartEntry::new("cola", 1, true)];

        let preview = preview_cart(&catalog, &entries).unwrap();
        assert_eq!(preview.items.len(), 1);
        assert_eq!(preview.total, Money::new(dec!(1)));
    }

    proptest! {
        #[test]
        fn prop_total_is_rounded_sum_of_rounded_lines(
            lines in prop::collection::vec((0i64..100_000, 0i64..100_000, 1u32..50, any::<bool>()), 1..12)
        ) {
            let catalog: Vec<Product> = lines
                .iter()
                .enumerate()
                .map(|(i, (m, n, _, _))| {
                    product(&format!("p{i}"), Decimal::new(*m, 3), Decimal::new(*n, 3), true)
                })
                .collect();
            let entries: Vec<CartEntry> = lines
                .iter()
                .enumerate()
                .map(|(i, (_, _, qty, member))| CartEntry::new(format!("p{i}"), *qty, *member))
                .collect();

            let priced = price_cart(&catalog, &entries).unwrap();

            let mut expected = Decimal::ZERO;
            for (product, entry) in catalog.iter().zip(&entries) {
                let unit = if entry.is_member_price { product.price_member } else { product.price_non_member };
                let line = (unit.value() * Decimal::from(entry.quantity))
                    .round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
                expected += line;
            }
            prop_assert_eq!(priced.total.value(), expected.round_dp(2));
            prop_assert_eq!(priced.items.len(), entries.len());
            prop_assert!(priced.total.value().scale() <= 2);
        }
    }
}
