//! Service layer for Penny
//!
//! The in-memory collections that own recorded expenses and savings goals.
//! Nothing here touches disk; everything is dropped when the process exits.

pub mod expense;
pub mod savings;

pub use expense::ExpenseLedger;
pub use savings::SavingsTracker;
