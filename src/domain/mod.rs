//! Domain types and the pure pricing rules, independent of storage.

pub mod cart;
pub mod money;
pub mod ports;
pub mod pricing;
pub mod product;
pub mod transaction;
