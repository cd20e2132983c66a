//! Terminal User Interface module
//!
//! This module provides the TUI for Penny using ratatui: a tab bar, one view
//! per tab, and modal dialogs for adding expenses and savings goals.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;
pub mod theme;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
