//! Ledger domain models, persistence, and aggregation helpers.

pub mod record;
pub mod store;
pub mod summary;

pub use record::{ExpenseRecord, TIMESTAMP_FORMAT};
pub use store::ExpenseLedger;
pub use summary::CategorySummary;
