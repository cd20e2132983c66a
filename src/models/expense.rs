//! Expense model
//!
//! A single recorded expense. The amount is kept as the text the user typed so
//! it can be shown back exactly as entered.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::validation::{require_text, ValidationError};

/// A single expense record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    /// What the money was spent on
    pub title: String,

    /// Amount as entered (trimmed, never blank)
    pub amount: String,

    /// When the expense was recorded
    pub created_at: DateTime<Utc>,
}

impl ExpenseEntry {
    /// Validate raw form input and build an entry
    ///
    /// Both fields are trimmed; either one being blank rejects the entry.
    pub fn new(title: &str, amount: &str) -> Result<Self, ValidationError> {
        let title = require_text(title, "Title")?;
        let amount = require_text(amount, "Amount")?;

        Ok(Self {
            title: title.to_string(),
            amount: amount.to_string(),
            created_at: Utc::now(),
        })
    }

    /// Format the amount with a currency symbol, e.g. "Ksh 250"
    pub fn format_amount(&self, symbol: &str) -> String {
        format!("{} {}", symbol, self.amount)
    }
}

impl fmt::Display for ExpenseEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_expense() {
        let entry = ExpenseEntry::new("Lunch", "250").unwrap();
        assert_eq!(entry.title, "Lunch");
        assert_eq!(entry.amount, "250");
    }

    #[test]
    fn test_fields_are_trimmed() {
        let entry = ExpenseEntry::new("  Rent ", " 15000\t").unwrap();
        assert_eq!(entry.title, "Rent");
        assert_eq!(entry.amount, "15000");
    }

    #[test]
    fn test_blank_title_rejected() {
        assert_eq!(
            ExpenseEntry::new("", "100"),
            Err(ValidationError::BlankField { field: "Title" })
        );
        assert_eq!(
            ExpenseEntry::new("   ", "100"),
            Err(ValidationError::BlankField { field: "Title" })
        );
    }

    #[test]
    fn test_blank_amount_rejected() {
        assert_eq!(
            ExpenseEntry::new("Lunch", " "),
            Err(ValidationError::BlankField { field: "Amount" })
        );
    }

    #[test]
    fn test_amount_text_is_not_parsed() {
        // Only blankness is checked; the text is displayed verbatim
        let entry = ExpenseEntry::new("Gift", "a lot").unwrap();
        assert_eq!(entry.amount, "a lot");
    }

    #[test]
    fn test_format_amount() {
        let entry = ExpenseEntry::new("Lunch", "250").unwrap();
        assert_eq!(entry.format_amount("Ksh"), "Ksh 250");
        assert_eq!(entry.to_string(), "Lunch: 250");
    }
}
