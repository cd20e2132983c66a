//! Penny - terminal expense and savings-goal tracker
//!
//! Penny records expenses and savings goals in memory while it runs and shows
//! them across three tabs: Expenses, Savings and Reports. Nothing recorded is
//! written to disk.
//!
//! # Architecture
//!
//! - `models`: expense and savings goal records, and their validation rules
//! - `services`: the expense ledger and savings tracker collections
//! - `shell`: active tab and dialog state, owning both collections
//! - `config`: path resolution and user settings
//! - `logging`: tracing subscriber setup
//! - `tui`: the ratatui front end
//!
//! # Example
//!
//! ```rust
//! use penny::shell::{ApplicationShell, Tab};
//!
//! let mut shell = ApplicationShell::new();
//! shell.open_dialog();
//! shell.submit_expense("Lunch", "250").unwrap();
//! assert!(!shell.is_dialog_open());
//!
//! shell.select_tab(Tab::Savings);
//! shell.submit_goal("Phone", "20000", "10000").unwrap();
//! let goal = &shell.tracker().list()[0];
//! assert_eq!(shell.tracker().progress_of(goal), 2.0);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod shell;
pub mod tui;

pub use error::PennyError;
