use std::collections::BTreeMap;

/// Per-category totals plus a grand total, computed by a full scan of the
/// store on every request. Categories iterate in sorted order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorySummary {
    totals: BTreeMap<String, f64>,
    grand_total: f64,
}

impl CategorySummary {
    /// Accumulates one amount into its category and the grand total.
    pub fn add(&mut self, category: &str, amount: f64) {
        *self.totals.entry(category.to_string()).or_insert(0.0) += amount;
        self.grand_total += amount;
    }

    pub fn total_for(&self, category: &str) -> Option<f64> {
        self.totals.get(category).copied()
    }

    pub fn grand_total(&self) -> f64 {
        self.grand_total
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Category/amount pairs in sorted category order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.totals.iter().map(|(name, total)| (name.as_str(), *total))
    }

    /// Share of the grand total taken by `amount`, as a percentage.
    /// Zero when the grand total itself is zero.
    pub fn share_of_total(&self, amount: f64) -> f64 {
        if self.grand_total == 0.0 {
            0.0
        } else {
            amount / self.grand_total * 100.0
        }
    }
}
