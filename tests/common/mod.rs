use std::sync::Mutex;

use expense_core::{config::LedgerConfig, ledger::ExpenseLedger};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a ledger backed by a unique temporary store for each test.
pub fn setup_ledger() -> ExpenseLedger {
    let temp = TempDir::new().expect("create temp dir");
    let store_path = temp.path().join("expenses.csv");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    ExpenseLedger::new(LedgerConfig::with_store_path(store_path))
}
