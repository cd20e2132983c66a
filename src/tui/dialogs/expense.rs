//! Add-expense dialog
//!
//! Title and amount fields. Save is refused while either is blank; the dialog
//! then stays open with an inline error.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Clear,
    Frame,
};

use crate::shell::DialogKind;
use crate::tui::app::App;
use crate::tui::layout::dialog_area;
use crate::tui::widgets::TextInput;

use super::{dialog_block, edit_input, form_message, render_error, render_hints};

/// Which field is focused in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Title,
    Amount,
}

impl ExpenseField {
    /// The other field (two fields, so next and previous coincide)
    pub fn toggle(self) -> Self {
        match self {
            Self::Title => Self::Amount,
            Self::Amount => Self::Title,
        }
    }
}

/// State for the add-expense form
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    /// Currently focused field
    pub focused_field: ExpenseField,

    /// Title input
    pub title_input: TextInput,

    /// Amount input
    pub amount_input: TextInput,

    /// Error message to display
    pub error_message: Option<String>,
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseFormState {
    /// Create an empty form with the title focused
    pub fn new() -> Self {
        let mut state = Self {
            focused_field: ExpenseField::Title,
            title_input: TextInput::new().label("Title").placeholder("e.g. Lunch"),
            amount_input: TextInput::new().label("Amount").placeholder("e.g. 250"),
            error_message: None,
        };
        state.update_focus();
        state
    }

    /// Move focus to the other field
    pub fn toggle_field(&mut self) {
        self.focused_field = self.focused_field.toggle();
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.title_input.focused = self.focused_field == ExpenseField::Title;
        self.amount_input.focused = self.focused_field == ExpenseField::Amount;
    }

    /// Get the currently focused input
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            ExpenseField::Title => &mut self.title_input,
            ExpenseField::Amount => &mut self.amount_input,
        }
    }

    /// Clear any error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the add-expense dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = dialog_area(DialogKind::AddExpense, frame.area());
    frame.render_widget(Clear, area);

    let block = dialog_block(" Add Expense ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Title
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.expense_form;
    frame.render_widget(&form.title_input, chunks[1]);
    frame.render_widget(&form.amount_input, chunks[2]);
    render_error(frame, chunks[4], form.error_message.as_deref());
    render_hints(frame, chunks[5]);
}

/// Handle key input for the expense dialog
/// Returns true if the key was handled
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.expense_form.toggle_field();
            true
        }
        KeyCode::Enter => {
            save_expense(app);
            true
        }
        _ if key.modifiers.contains(KeyModifiers::CONTROL) => false,
        _ => {
            let form = &mut app.expense_form;
            form.clear_error();
            edit_input(form.focused_input(), key)
        }
    }
}

/// Submit the form to the ledger
fn save_expense(app: &mut App) {
    let form = &app.expense_form;
    match app
        .shell
        .submit_expense(form.title_input.value(), form.amount_input.value())
    {
        Ok(()) => {
            let title = app.expense_form.title_input.value().trim().to_string();
            app.set_status(format!("Added expense: {}", title));
        }
        Err(e) => app.expense_form.set_error(form_message(&e)),
    }
}
