use std::path::{Path, PathBuf};

/// Header row written to a freshly created store, in column order.
pub const STORE_HEADER: [&str; 4] = ["Date", "Category", "Description", "Amount"];

const DEFAULT_STORE_FILE: &str = "expenses.csv";

/// Configuration handed to [`ExpenseLedger`](crate::ledger::ExpenseLedger)
/// at construction: where the store lives and which header row it carries.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    pub store_path: PathBuf,
    pub header: &'static [&'static str],
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_FILE),
            header: &STORE_HEADER,
        }
    }
}

impl LedgerConfig {
    /// Configuration for a store at `path` with the standard header.
    pub fn with_store_path(path: impl Into<PathBuf>) -> Self {
        Self {
            store_path: path.into(),
            ..Self::default()
        }
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }
}
