//! Core data models for Penny
//!
//! Expense entries and savings goals, plus the validation rules that decide
//! whether user-entered text becomes a record.

pub mod expense;
pub mod savings_goal;
pub mod validation;

pub use expense::ExpenseEntry;
pub use savings_goal::{parse_whole_amount, SavingsGoal};
pub use validation::ValidationError;
