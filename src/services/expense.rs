//! Expense ledger
//!
//! An append-only, insertion-ordered collection of expenses. There is no
//! remove or edit operation.

use tracing::{debug, info};

use crate::models::{ExpenseEntry, ValidationError};

/// Ordered collection of recorded expenses, oldest first
#[derive(Debug, Clone, Default)]
pub struct ExpenseLedger {
    entries: Vec<ExpenseEntry>,
}

impl ExpenseLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new expense from raw form input
    ///
    /// Rejects with `BlankField` if either field is blank after trimming, in
    /// which case the ledger is left untouched.
    pub fn add(&mut self, title: &str, amount: &str) -> Result<(), ValidationError> {
        let entry = ExpenseEntry::new(title, amount).inspect_err(|e| {
            debug!(error = %e, "expense rejected");
        })?;

        info!(title = %entry.title, amount = %entry.amount, "expense recorded");
        self.entries.push(entry);
        Ok(())
    }

    /// All expenses in the order they were added
    pub fn list(&self) -> &[ExpenseEntry] {
        &self.entries
    }

    /// Number of recorded expenses
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no expenses have been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
