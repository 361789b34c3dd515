use crate::domain::cart::CartEntry;
use crate::domain::ports::{CatalogBox, TransactionLedgerBox};
use crate::domain::pricing::price_cart;
use crate::domain::product::Product;
use crate::domain::transaction::{FinalStatus, Transaction};
use crate::error::{PosError, Result};
use tokio::sync::Mutex;
use tracing::{info, instrument, warn};

/// Creates and finalizes checkout transactions.
///
/// `TransactionService` owns the catalog and ledger backends. Every ledger
/// read-modify-write goes through `ledger_gate`, so concurrent calls on one
/// service never overwrite each other's changes. The ledger is still re-read
/// on every call and edits made by other processes are picked up.
pub struct TransactionService {
    catalog: CatalogBox,
    ledger: TransactionLedgerBox,
    ledger_gate: Mutex<()>,
}

impl TransactionService {
    /// Creates a new `TransactionService`.
    ///
    /// # Arguments
    ///
    /// * `catalog` - Source of products to price against.
    /// * `ledger` - Store for the full transaction history.
    pub fn new(catalog: CatalogBox, ledger: TransactionLedgerBox) -> Self {
        Self {
            catalog,
            ledger,
            ledger_gate: Mutex::new(()),
        }
    }

    pub async fn list_products(&self) -> Result<Vec<Product>> {
        Ok(self.catalog.list_products().await?)
    }

    pub async fn list_transactions(&self) -> Result<Vec<Transaction>> {
        Ok(self.ledger.list_transactions().await?)
    }

    /// Prices the cart and records it as a new pending transaction.
    ///
    /// Nothing is written if the cart is empty or any line cannot be priced.
    #[instrument(skip_all, fields(lines = entries.len()))]
    pub async fn start_transaction(&self, entries: &[CartEntry]) -> Result<Transaction> {
        if entries.is_empty() {
            warn!("rejected empty cart");
            return Err(PosError::EmptyCart);
        }

        let products = self.catalog.list_products().await?;
        let priced =
            price_cart(&products, entries).inspect_err(|e| warn!(error = %e, "rejected cart"))?;
        let transaction = Transaction::open(priced.items, priced.total);

        let _guard = self.ledger_gate.lock().await;
        let mut transactions = self.ledger.list_transactions().await?;
        transactions.push(transaction.clone());
        self.ledger.save_transactions(&transactions).await?;

        info!(id = %transaction.id, total = %transaction.total, "transaction started");
        Ok(transaction)
    }

    /// Moves a transaction to a terminal status and persists it.
    ///
    /// The status is overwritten even when the transaction was already finalized.
    #[instrument(skip(self))]
    pub async fn finalize_transaction(&self, id: &str, status: FinalStatus) -> Result<Transaction> {
        let _guard = self.ledger_gate.lock().await;
        let mut transactions = self.ledger.list_transactions().await?;

        let Some(transaction) = transactions.iter_mut().find(|tx| tx.id.to_string() == id) else {
            warn!("transaction not found");
            return Err(PosError::TransactionNotFound(id.to_string()));
        };

        let previous = transaction.status;
        transaction.finalize(status);
        let finalized = transaction.clone();

        self.ledger.save_transactions(&transactions).await?;

        info!(%previous, status = %finalized.status, "transaction finalized");
        Ok(finalized)
    }
}
