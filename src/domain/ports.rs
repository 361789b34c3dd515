use super::product::Product;
use super::transaction::Transaction;
use crate::error::StorageError;
use async_trait::async_trait;

/// Read-only access to the product catalog.
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>, StorageError>;
}

/// Whole-collection access to the transaction ledger.
///
/// Saves always replace the full ledger; callers read, modify and write back.
#[async_trait]
pub trait TransactionLedger: Send + Sync {
    async fn list_transactions(&self) -> Result<Vec<Transaction>, StorageError>;
    async fn save_transactions(&self, transactions: &[Transaction]) -> Result<(), StorageError>;
}

pub type CatalogBox = Box<dyn Catalog>;
pub type TransactionLedgerBox = Box<dyn TransactionLedger>;
