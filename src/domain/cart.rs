use serde::{Deserialize, Serialize};

/// One requested line of a checkout. Lines for the same product may coexist
/// when their pricing modes differ.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub product_id: String,
    pub quantity: u32,
    pub is_member_price: bool,
}

impl CartEntry {
    pub fn new(product_id: impl Into<String>, quantity: u32, is_member_price: bool) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
            is_member_price,
        }
    }

    fn same_line(&self, product_id: &str, is_member_price: bool) -> bool {
        self.product_id == product_id && self.is_member_price == is_member_price
    }
}

/// Adjusts the quantity of the line keyed by `(product_id, is_member_price)`.
///
/// Unknown lines are appended. A line whose quantity drops to zero or below is removed.
/// Quantities above `u32::MAX` are clamped to `u32::MAX`.
pub fn update_quantity(
    cart: &[CartEntry],
    product_id: &str,
    delta: i64,
    is_member_price: bool,
) -> Vec<CartEntry> {
    let current = cart
        .iter()
        .find(|entry| entry.same_line(product_id, is_member_price))
        .map_or(0, |entry| i64::from(entry.quantity));
    let next = current.saturating_add(delta);

    let mut updated: Vec<CartEntry> = cart
        .iter()
        .filter(|entry| !entry.same_line(product_id, is_member_price))
        .cloned()
        .collect();

    if next > 0 {
        let quantity = u32::try_from(next.min(i64::from(u32::MAX))).unwrap_or(u32::MAX);
        updated.push(CartEntry::new(product_id, quantity, is_member_price));
    }
    updated
}

/// Applies one pricing mode to every line, for tills that toggle member pricing per sale.
pub fn with_pricing_mode(cart: &[CartEntry], is_member_price: bool) -> Vec<CartEntry> {
    cart.iter()
        .map(|entry| CartEntry {
            is_member_price,
            ..entry.clone()
        })
        .collect()
}
