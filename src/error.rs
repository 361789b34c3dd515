use std::path::PathBuf;
use thiserror::Error;

/// Failures of the durable document store. Always fatal to the operation that hit them.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Corrupt document {}: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn corrupt(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Corrupt {
            path: path.into(),
            source,
        }
    }
}

#[derive(Error, Debug)]
pub enum PosError {
    #[error("Unknown or inactive product: {0}")]
    UnknownOrInactiveProduct(String),
    #[error("Cart is empty")]
    EmptyCart,
    #[error("Transaction not found: {0}")]
    TransactionNotFound(String),
    #[error("Amount too large to represent: {0}")]
    AmountOverflow(String),
    #[error("Invalid status: {0}")]
    InvalidStatus(String),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl PosError {
    /// True for errors caused by the caller's input rather than the environment.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, PosError::Storage(_))
    }
}

pub type Result<T> = std::result::Result<T, PosError>;
