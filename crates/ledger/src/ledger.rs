use std::collections::HashMap;

use crate::entry::{Department, SalesEntry};

/// Append-only store of sales entries with derived aggregates.
///
/// The ledger exclusively owns its entry sequence: it grows only via [`add`],
/// never shrinks, and lives for the process lifetime (no persistence). All
/// aggregate queries are pure reads over the current sequence. Insertion
/// order is preserved but carries no aggregation semantics.
///
/// Not synchronized; wrap in a lock before sharing across threads.
///
/// [`add`]: SalesLedger::add
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SalesLedger {
    entries: Vec<SalesEntry>,
}

impl SalesLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry. Entries are valid by construction, so this never
    /// fails.
    pub fn add(&mut self, entry: SalesEntry) {
        self.entries.push(entry);
    }

    /// Whether at least one entry has been recorded. Reporting callers use
    /// this as a precondition gate.
    pub fn has_data(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SalesEntry] {
        &self.entries
    }

    /// Sum of all amounts; 0 for an empty ledger.
    ///
    /// Amounts are capped at 10 decimal digits, so a 64-bit total is exact
    /// at realistic transaction volumes.
    pub fn total_sales(&self) -> u64 {
        self.entries.iter().map(SalesEntry::amount).sum()
    }

    /// Arithmetic mean of all amounts; 0.0 for an empty ledger (defined
    /// fallback, not an error).
    pub fn average_sales(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        self.total_sales() as f64 / self.entries.len() as f64
    }

    /// Per-department sums, grouped by exact label in a single pass.
    ///
    /// Keys are exactly the distinct labels observed; the map is unordered.
    /// Empty for an empty ledger.
    pub fn department_totals(&self) -> HashMap<Department, u64> {
        let mut totals: HashMap<Department, u64> = HashMap::new();
        for entry in &self.entries {
            *totals.entry(entry.department().clone()).or_insert(0) += entry.amount();
        }
        totals
    }
}
