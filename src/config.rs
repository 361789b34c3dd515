use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "data";
pub const PRODUCTS_FILE: &str = "products.json";
pub const TRANSACTIONS_FILE: &str = "transactions.json";

/// Locations of the catalog and ledger documents under one base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    data_dir: PathBuf,
}

impl DataPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn products(&self) -> PathBuf {
        self.data_dir.join(PRODUCTS_FILE)
    }

    pub fn transactions(&self) -> PathBuf {
        self.data_dir.join(TRANSACTIONS_FILE)
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}
