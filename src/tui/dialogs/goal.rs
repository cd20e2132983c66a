//! Add-goal dialog
//!
//! Name, saved and target fields. The saved and target amounts are parsed
//! leniently; only a blank name or a target that is not above zero blocks the
//! save.

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

/// Which field is focused in the goal form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GoalField {
    #[default]
    Name,
    Saved,
    Target,
}

impl GoalField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Saved,
            Self::Saved => Self::Target,
            Self::Target => Self::Name,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Target,
            Self::Saved => Self::Name,
            Self::Target => Self::Saved,
        }
    }
}

/// State for the add-goal form
#[derive(Debug, Clone)]
pub struct GoalFormState {
    /// Currently focused field
    pub focused_field: GoalField,

    /// Goal name input
    pub name_input: TextInput,

    /// Amount already saved
    pub saved_input: TextInput,

    /// Target amount
    pub target_input: TextInput,

    /// Error message to display
    pub error_message: Option<String>,
}

impl Default for GoalFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl GoalFormState {
    /// Create an empty form with the name focused
    pub fn new() -> Self {
        let mut state = Self {
            focused_field: GoalField::Name,
            name_input: TextInput::new().label("Name").placeholder("e.g. New phone"),
            saved_input: TextInput::new().label("Saved").placeholder("0"),
            target_input: TextInput::new().label("Target").placeholder("e.g. 20000"),
            error_message: None,
        };
        state.update_focus();
        state
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.name_input.focused = self.focused_field == GoalField::Name;
        self.saved_input.focused = self.focused_field == GoalField::Saved;
        self.target_input.focused = self.focused_field == GoalField::Target;
    }

    /// Get the currently focused input
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            GoalField::Name => &mut self.name_input,
            GoalField::Saved => &mut self.saved_input,
            GoalField::Target => &mut self.target_input,
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

/// Render the add-goal dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = dialog_area(DialogKind::AddGoal, frame.area());
    frame.render_widget(Clear, area);

    let block = dialog_block(" Add Savings Goal ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Name
            Constraint::Length(1), // Saved
            Constraint::Length(1), // Target
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.goal_form;
    frame.render_widget(&form.name_input, chunks[1]);
    frame.render_widget(&form.saved_input, chunks[2]);
    frame.render_widget(&form.target_input, chunks[3]);
    render_error(frame, chunks[5], form.error_message.as_deref());
    render_hints(frame, chunks[6]);
}

/// Handle key input for the goal dialog
/// Returns true if the key was handled
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
            app.goal_form.prev_field();
            true
        }
        KeyCode::Tab | KeyCode::Down => {
            app.goal_form.next_field();
            true
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.goal_form.prev_field();
            true
        }
        KeyCode::Enter => {
            save_goal(app);
            true
        }
        _ if key.modifiers.contains(KeyModifiers::CONTROL) => false,
        _ => {
            let form = &mut app.goal_form;
            form.clear_error();
            edit_input(form.focused_input(), key)
        }
    }
}

/// Submit the form to the savings tracker
fn save_goal(app: &mut App) {
    let form = &app.goal_form;
    match app.shell.submit_goal(
        form.name_input.value(),
        form.saved_input.value(),
        form.target_input.value(),
    ) {
        Ok(()) => {
            let name = app.goal_form.name_input.value().trim().to_string();
            app.set_status(format!("Added goal: {}", name));
        }
        Err(e) => app.goal_form.set_error(form_message(&e)),
    }
}
