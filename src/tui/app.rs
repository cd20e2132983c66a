//! Application state for the TUI
//!
//! The App struct wraps the application shell with the presentation-only
//! state needed for rendering and handling events.

use ratatui::layout::Rect;

use crate::config::settings::Settings;
use crate::shell::{ApplicationShell, DialogKind, Tab};

use super::dialogs::expense::ExpenseFormState;
use super::dialogs::goal::GoalFormState;

/// Main application state
pub struct App<'a> {
    /// Tab, dialog flag, and the expense/savings collections
    pub shell: ApplicationShell,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Whether the help overlay is showing
    pub show_help: bool,

    /// Add-expense form state
    pub expense_form: ExpenseFormState,

    /// Add-goal form state
    pub goal_form: GoalFormState,

    /// Status message to display
    pub status_message: Option<String>,

    /// Area of the last rendered frame, used to hit-test dialog clicks
    pub frame_area: Rect,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            shell: ApplicationShell::new(),
            settings,
            should_quit: false,
            show_help: false,
            expense_form: ExpenseFormState::new(),
            goal_form: GoalFormState::new(),
            status_message: None,
            frame_area: Rect::default(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Currently active tab
    pub fn active_tab(&self) -> Tab {
        self.shell.active_tab()
    }

    /// Switch to a different tab
    pub fn select_tab(&mut self, tab: Tab) {
        self.shell.select_tab(tab);
        self.clear_status();
    }

    /// Switch to the next tab
    pub fn next_tab(&mut self) {
        self.select_tab(self.active_tab().next());
    }

    /// Switch to the previous tab
    pub fn prev_tab(&mut self) {
        self.select_tab(self.active_tab().prev());
    }

    /// Open the active tab's add dialog with a fresh form
    pub fn open_dialog(&mut self) {
        if !self.shell.open_dialog() {
            self.set_status("Nothing to add on this tab");
            return;
        }
        match self.shell.active_dialog() {
            Some(DialogKind::AddExpense) => self.expense_form = ExpenseFormState::new(),
            Some(DialogKind::AddGoal) => self.goal_form = GoalFormState::new(),
            None => {}
        }
    }

    /// Close the current dialog via cancel
    pub fn close_dialog(&mut self) {
        self.shell.cancel_dialog();
    }

    /// Close the current dialog via a click outside it
    pub fn dismiss_dialog(&mut self) {
        self.shell.dismiss_dialog();
    }

    /// The dialog currently showing, if any
    pub fn active_dialog(&self) -> Option<DialogKind> {
        self.shell.active_dialog()
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.shell.is_dialog_open()
    }

    /// Toggle the help overlay
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_app() {
        let settings = Settings::default();
        let app = App::new(&settings);
        assert_eq!(app.active_tab(), Tab::Expenses);
        assert!(!app.has_dialog());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_open_dialog_resets_form() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        app.open_dialog();
        app.expense_form.title_input.insert('x');
        app.close_dialog();
        app.open_dialog();

        assert_eq!(app.expense_form.title_input.value(), "");
        assert_eq!(app.active_dialog(), Some(DialogKind::AddExpense));
    }

    #[test]
    fn test_open_dialog_on_reports_sets_status() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.select_tab(Tab::Reports);
        app.open_dialog();
        assert!(!app.has_dialog());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_tab_switch_clears_status() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.set_status("Expense added");
        app.next_tab();
        assert_eq!(app.active_tab(), Tab::Savings);
        assert!(app.status_message.is_none());
    }
}
