use std::fs::OpenOptions;
use std::io;

use csv::{Reader, WriterBuilder};

use crate::config::LedgerConfig;
use crate::errors::LedgerError;

use super::record::ExpenseRecord;
use super::summary::CategorySummary;

/// Durable storage and retrieval of expense records.
///
/// Every operation opens the store, does its work, and releases the handle
/// before returning, so repeated short-lived invocations can share the same
/// file. Rows are only ever appended; nothing mutates or deletes them.
pub struct ExpenseLedger {
    config: LedgerConfig,
}

impl ExpenseLedger {
    pub fn new(config: LedgerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Guarantees the store exists with the configured header row.
    ///
    /// A store that is already present is left untouched, whatever its
    /// content; only a missing store is created and given the header.
    pub fn ensure_store(&self) -> Result<(), LedgerError> {
        let created = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.config.store_path);
        match created {
            Ok(file) => {
                let mut writer = csv::Writer::from_writer(file);
                writer.write_record(self.config.header)?;
                writer.flush()?;
                tracing::debug!(path = %self.config.store_path.display(), "created expense store");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Stamps the current local time and appends one row to the store.
    ///
    /// The store (header included) is ensured first, so appending against a
    /// fresh path never produces a headerless file. Returns the record as
    /// stored.
    pub fn append(
        &self,
        category: &str,
        description: &str,
        amount: f64,
    ) -> Result<ExpenseRecord, LedgerError> {
        self.ensure_store()?;
        let record = ExpenseRecord::new(category, description, amount);

        let file = OpenOptions::new()
            .append(true)
            .open(&self.config.store_path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.serialize(&record)?;
        writer.flush()?;
        tracing::debug!(category, amount, "appended expense record");
        Ok(record)
    }

    /// All stored records in append order, header row skipped.
    ///
    /// A store that was never created signals [`LedgerError::StoreNotFound`]
    /// rather than an empty list; a malformed row fails the whole call.
    pub fn list_all(&self) -> Result<Vec<ExpenseRecord>, LedgerError> {
        let mut reader = self.open_reader()?;
        let mut records = Vec::new();
        for row in reader.deserialize() {
            records.push(row?);
        }
        Ok(records)
    }

    /// Scans every record and accumulates per-category sums plus the grand
    /// total. A header-only store yields an empty summary, not an error.
    pub fn summarize(&self) -> Result<CategorySummary, LedgerError> {
        let mut reader = self.open_reader()?;
        let mut summary = CategorySummary::default();
        for row in reader.deserialize() {
            let record: ExpenseRecord = row?;
            summary.add(&record.category, record.amount);
        }
        Ok(summary)
    }

    fn open_reader(&self) -> Result<Reader<std::fs::File>, LedgerError> {
        if !self.config.store_path.exists() {
            return Err(LedgerError::StoreNotFound(self.config.store_path.clone()));
        }
        Ok(Reader::from_path(&self.config.store_path)?)
    }
}
