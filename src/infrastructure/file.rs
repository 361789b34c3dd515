use super::json_store::{read_json, write_json};
use crate::config::DataPaths;
use crate::domain::ports::{Catalog, TransactionLedger};
use crate::domain::product::Product;
use crate::domain::transaction::Transaction;
use crate::error::StorageError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Catalog backed by a JSON array of products. A missing file is an empty catalog.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_paths(paths: &DataPaths) -> Self {
        Self::new(paths.products())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl Catalog for JsonCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, StorageError> {
        read_json(&self.path, Vec::new()).await
    }
}

/// Ledger backed by a JSON array of transactions. Every save rewrites the whole file.
#[derive(Debug, Clone)]
pub struct JsonLedger {
    path: PathBuf,
}

impl JsonLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_paths(paths: &DataPaths) -> Self {
        Self::new(paths.transactions())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TransactionLedger for JsonLedger {
    async fn list_transactions(&self) -> Result<Vec<Transaction>, StorageError> {
        read_json(&self.path, Vec::new()).await
    }

    async fn save_transactions(&self, transactions: &[Transaction]) -> Result<(), StorageError> {
        write_json(&self.path, transactions).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Money;
    use crate::domain::transaction::{FinalStatus, TransactionLineItem};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_catalog_is_empty() {
        let dir = tempdir().unwrap();
        let catalog = JsonCatalog::from_paths(&DataPaths::new(dir.path()));

        assert!(catalog.list_products().await.unwrap().is_empty());
        assert_eq!(std::fs::read_to_string(catalog.path()).unwrap(), "[]");
    }

    fn line(unit: Decimal, quantity: u32, line_total: Decimal) -> TransactionLineItem {
        TransactionLineItem {
            product_id: "cola".into(),
            name: "Cola".into(),
            quantity,
            unit_price: Money::new(unit),
            line_total: Money::new(line_total),
            is_member_price: false,
        }
    }

    #[tokio::test]
    async fn test_ledger_round_trip() {
        let dir = tempdir().unwrap();
        let ledger = JsonLedger::from_paths(&DataPaths::new(dir.path()));

        let mut finalized = Transaction::open(
            vec![line(dec!(1.5), 3, dec!(4.5))],
            Money::new(dec!(4.5)),
        );
        finalized.finalize(FinalStatus::Canceled);
        let pending = Transaction::open(finalized.items.clone(), finalized.total);
        let precise = Transaction::open(
            vec![
                line(dec!(1234567.89), 3_999_999_999, dec!(4938271558765432.11)),
                line(dec!(0.01), 1, dec!(0.01)),
                line(dec!(0.333), 7, dec!(2.33)),
            ],
            Money::new(dec!(4938271558765434.45)),
        );
        let huge = Transaction::open(
            vec![line(dec!(79228162514264337593543950.33), 1, dec!(79228162514264337593543950.33))],
            Money::new(dec!(79228162514264337593543950.33)),
        );
        let all = vec![finalized, pending, precise, huge];

        ledger.save_transactions(&all).await.unwrap();
        let read = ledger.list_transactions().await.unwrap();
        assert_eq!(read, all);
        assert_eq!(read[2].total.value(), dec!(4938271558765434.45));
        assert_eq!(read[2].items[2].unit_price.value(), dec!(0.333));

        let raw = std::fs::read_to_string(ledger.path()).unwrap();
        assert!(raw.contains("\"total\": 4938271558765434.45"));
    }
}
