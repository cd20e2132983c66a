//! Dialog modules for the TUI
//!
//! Modal dialogs for adding entries, plus the help overlay. Shared pieces of
//! form rendering and editing live here.

pub mod expense;
pub mod goal;
pub mod help;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::ValidationError;
use crate::tui::theme;
use crate::tui::widgets::TextInput;

/// Bordered dialog frame on the baby pink background
pub fn dialog_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .style(theme::panel_style())
}

/// User-facing message for a rejected form
pub fn form_message(err: &ValidationError) -> String {
    match err {
        ValidationError::BlankField {
            field: "Title" | "Amount",
        } => "Title and amount are required".to_string(),
        ValidationError::BlankField { field } => format!("{} is required", field),
        ValidationError::NonPositiveTarget { .. } => {
            "Target must be greater than zero".to_string()
        }
    }
}

/// Apply an editing key to a text input
///
/// Returns true if the key was consumed.
pub fn edit_input(input: &mut TextInput, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => return false,
    }
    true
}

/// Render the inline error line, if there is one
pub fn render_error(frame: &mut Frame, area: Rect, error: Option<&str>) {
    if let Some(error) = error {
        let line = Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(theme::ERROR_TEXT),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Render the save/cancel hint line
pub fn render_hints(frame: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled("[Tab]", theme::key_style()),
        Span::raw(" Next  "),
        Span::styled("[Enter]", theme::key_style()),
        Span::raw(" Save  "),
        Span::styled("[Esc]", theme::key_style()),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_form_messages() {
        assert_eq!(
            form_message(&ValidationError::blank("Title")),
            "Title and amount are required"
        );
        assert_eq!(
            form_message(&ValidationError::blank("Amount")),
            "Title and amount are required"
        );
        assert_eq!(form_message(&ValidationError::blank("Name")), "Name is required");
        assert_eq!(
            form_message(&ValidationError::NonPositiveTarget { target: 0 }),
            "Target must be greater than zero"
        );
    }

    #[test]
    fn test_edit_input() {
        let mut input = TextInput::new();
        assert!(edit_input(&mut input, KeyEvent::new(KeyCode::Char('9'), KeyModifiers::NONE)));
        assert!(edit_input(&mut input, KeyEvent::new(KeyCode::Home, KeyModifiers::NONE)));
        assert!(!edit_input(&mut input, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
        assert_eq!(input.value(), "9");
        assert_eq!(input.cursor, 0);
    }
}
