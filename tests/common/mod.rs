#![allow(dead_code)]

use checkout_engine::application::service::TransactionService;
use checkout_engine::config::DataPaths;
use checkout_engine::domain::money::Money;
use checkout_engine::domain::product::Product;
use checkout_engine::infrastructure::file::{JsonCatalog, JsonLedger};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::path::Path;

pub fn product(id: &str, member: Decimal, non_member: Decimal, active: bool) -> Product {
    Product {
        id: id.to_string(),
        name: id.to_string(),
        price_member: Money::new(member),
        price_non_member: Money::new(non_member),
        inventory_count: 10,
        active,
    }
}

/// The single-product catalog used throughout the checkout scenarios.
pub fn cola() -> Product {
    Product {
        id: "cola".to_string(),
        name: "Cola".to_string(),
        price_member: Money::new(dec!(1)),
        price_non_member: Money::new(dec!(1.5)),
        inventory_count: 10,
        active: true,
    }
}

/// Writes `products` as the catalog document under `data_dir`.
pub fn write_catalog(data_dir: &Path, products: &[Product]) {
    std::fs::create_dir_all(data_dir).unwrap();
    let json = serde_json::to_string_pretty(products).unwrap();
    std::fs::write(DataPaths::new(data_dir).products(), json).unwrap();
}

pub fn file_service(data_dir: &Path) -> TransactionService {
    let paths = DataPaths::new(data_dir);
    TransactionService::new(
        Box::new(JsonCatalog::from_paths(&paths)),
        Box::new(JsonLedger::from_paths(&paths)),
    )
}

pub fn read_ledger_raw(data_dir: &Path) -> serde_json::Value {
    let text = std::fs::read_to_string(DataPaths::new(data_dir).transactions()).unwrap();
    serde_json::from_str(&text).unwrap()
}
