use chrono::Local;
use serde::{Deserialize, Serialize};

/// Timestamp layout used in the store, local time at second resolution.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One expense entry as persisted in the store.
///
/// Field order matches the stored column order; the serde renames bind the
/// fields to the header row so rows survive a round trip through the store
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    #[serde(rename = "Date")]
    pub timestamp: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Amount")]
    pub amount: f64,
}

impl ExpenseRecord {
    /// Creates a record stamped with the current local time.
    pub fn new(
        category: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            category: category.into(),
            description: description.into(),
            amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn new_stamps_parseable_timestamp() {
        let record = ExpenseRecord::new("Food", "Lunch", 12.5);
        assert!(NaiveDateTime::parse_from_str(&record.timestamp, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(record.category, "Food");
        assert_eq!(record.description, "Lunch");
        assert!((record.amount - 12.5).abs() < f64::EPSILON);
    }
}
