use crate::domain::ports::{Catalog, TransactionLedger};
use crate::domain::product::Product;
use crate::domain::transaction::Transaction;
use crate::error::StorageError;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A fixed catalog held in memory.
///
/// Useful for tests and for embedding the engine where products come from elsewhere.
#[derive(Default, Clone)]
pub struct InMemoryCatalog {
    products: Arc<Vec<Product>>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(products),
        }
    }
}

#[async_trait]
impl Catalog for InMemoryCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, StorageError> {
        Ok(self.products.as_ref().clone())
    }
}

/// A thread-safe in-memory ledger.
///
/// Clones share the same underlying collection, so a test can keep a handle and
/// inspect what the service persisted.
#[derive(Default, Clone)]
pub struct InMemoryLedger {
    transactions: Arc<RwLock<Vec<Transaction>>>,
    saves: Arc<RwLock<usize>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the ledger has been saved.
    pub async fn save_count(&self) -> usize {
        *self.saves.read().await
    }
}

#[async_trait]
impl TransactionLedger for InMemoryLedger {
    async fn list_transactions(&self) -> Result<Vec<Transaction>, StorageError> {
        Ok(self.transactions.read().await.clone())
    }

    async fn save_transactions(&self, transactions: &[Transaction]) -> Result<(), StorageError> {
        *self.transactions.write().await = transactions.to_vec();
        *self.saves.write().await += 1;
        Ok(())
    }
}
