use super::money::Money;
use serde::{Deserialize, Serialize};

/// A catalog entry. The engine only ever reads products.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price_member: Money,
    pub price_non_member: Money,
    /// Informational only; checkout does not decrement it.
    pub inventory_count: u32,
    pub active: bool,
}

impl Product {
    /// Resolves the unit price for the requested pricing mode.
    pub fn unit_price(&self, is_member_price: bool) -> Money {
        if is_member_price {
            self.price_member
        } else {
            self.price_non_member
        }
    }
}
