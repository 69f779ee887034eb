use std::path::PathBuf;

use thiserror::Error;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("expense store not found at `{}`", .0.display())]
    StoreNotFound(PathBuf),
    #[error("invalid amount `{0}`")]
    InvalidAmount(String),
}
