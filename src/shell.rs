//! Application shell state
//!
//! Holds the active tab and whether the add-entry dialog is open, and owns the
//! expense ledger and savings tracker for the lifetime of the process. The TUI
//! renders this state and drives it through the named transitions below.

use std::fmt;

use tracing::{debug, info};

use crate::models::ValidationError;
use crate::services::{ExpenseLedger, SavingsTracker};

/// The three top-level tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Expenses,
    Savings,
    Reports,
}

impl Tab {
    /// All tabs in display order
    pub const ALL: [Tab; 3] = [Tab::Expenses, Tab::Savings, Tab::Reports];

    /// Get the next tab, wrapping around
    pub fn next(self) -> Self {
        match self {
            Self::Expenses => Self::Savings,
            Self::Savings => Self::Reports,
            Self::Reports => Self::Expenses,
        }
    }

    /// Get the previous tab, wrapping around
    pub fn prev(self) -> Self {
        match self {
            Self::Expenses => Self::Reports,
            Self::Savings => Self::Expenses,
            Self::Reports => Self::Savings,
        }
    }

    /// Position in display order
    pub fn index(self) -> usize {
        match self {
            Self::Expenses => 0,
            Self::Savings => 1,
            Self::Reports => 2,
        }
    }

    /// Display title
    pub fn title(self) -> &'static str {
        match self {
            Self::Expenses => "Expenses",
            Self::Savings => "Savings",
            Self::Reports => "Reports",
        }
    }

    /// The add-entry dialog available on this tab, if any
    pub fn dialog(self) -> Option<DialogKind> {
        match self {
            Self::Expenses => Some(DialogKind::AddExpense),
            Self::Savings => Some(DialogKind::AddGoal),
            Self::Reports => None,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Which add-entry dialog is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    AddExpense,
    AddGoal,
}

/// Top-level application state
#[derive(Debug, Default)]
pub struct ApplicationShell {
    active_tab: Tab,
    dialog_open: bool,
    ledger: ExpenseLedger,
    tracker: SavingsTracker,
}

impl ApplicationShell {
    /// Create a shell on the Expenses tab with no dialog and empty collections
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently active tab
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Whether the add-entry dialog is open
    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    /// The dialog currently showing, derived from the tab and the open flag
    pub fn active_dialog(&self) -> Option<DialogKind> {
        if self.dialog_open {
            self.active_tab.dialog()
        } else {
            None
        }
    }

    /// Read-only view of recorded expenses
    pub fn ledger(&self) -> &ExpenseLedger {
        &self.ledger
    }

    /// Read-only view of savings goals
    pub fn tracker(&self) -> &SavingsTracker {
        &self.tracker
    }

    /// Switch to a tab
    ///
    /// Any open dialog belongs to the tab being left, so it is closed.
    pub fn select_tab(&mut self, tab: Tab) {
        if self.active_tab == tab {
            return;
        }
        debug!(from = %self.active_tab, to = %tab, "tab selected");
        self.active_tab = tab;
        self.dialog_open = false;
    }

    /// Switch to the next tab in display order
    pub fn next_tab(&mut self) {
        self.select_tab(self.active_tab.next());
    }

    /// Switch to the previous tab in display order
    pub fn prev_tab(&mut self) {
        self.select_tab(self.active_tab.prev());
    }

    /// Open the active tab's add dialog
    ///
    /// Returns false (and does nothing) on a tab without a dialog.
    pub fn open_dialog(&mut self) -> bool {
        if self.active_tab.dialog().is_none() {
            return false;
        }
        if !self.dialog_open {
            debug!(tab = %self.active_tab, "dialog opened");
        }
        self.dialog_open = true;
        true
    }

    /// Close the dialog via its cancel action
    pub fn cancel_dialog(&mut self) {
        if self.dialog_open {
            debug!("dialog cancelled");
        }
        self.dialog_open = false;
    }

    /// Close the dialog via a backdrop dismiss request
    pub fn dismiss_dialog(&mut self) {
        if self.dialog_open {
            debug!("dialog dismissed");
        }
        self.dialog_open = false;
    }

    /// Submit the expense form
    ///
    /// On success the expense is recorded and, if the expense dialog is
    /// showing, it closes. On failure nothing changes.
    pub fn submit_expense(&mut self, title: &str, amount: &str) -> Result<(), ValidationError> {
        self.ledger.add(title, amount)?;
        self.complete_dialog(DialogKind::AddExpense);
        info!(count = self.ledger.len(), "expense submitted");
        Ok(())
    }

    /// Submit the savings goal form
    ///
    /// Same open/close behaviour as `submit_expense`.
    pub fn submit_goal(
        &mut self,
        name: &str,
        saved_text: &str,
        target_text: &str,
    ) -> Result<(), ValidationError> {
        self.tracker.add(name, saved_text, target_text)?;
        self.complete_dialog(DialogKind::AddGoal);
        info!(count = self.tracker.len(), "goal submitted");
        Ok(())
    }

    /// Close the dialog only if it is the one the accepted entry came from
    fn complete_dialog(&mut self, kind: DialogKind) {
        if self.active_dialog() == Some(kind) {
            debug!(?kind, "dialog completed");
            self.dialog_open = false;
        }
    }
}
