//! Event handler for the TUI
//!
//! Routes keyboard and mouse events to the appropriate handlers
//! based on the current application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::shell::{DialogKind, Tab};

use super::app::App;
use super::dialogs;
use super::event::Event;
use super::layout::dialog_area;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    // Any key closes the help overlay
    if app.show_help {
        app.show_help = false;
        return Ok(());
    }

    match app.active_dialog() {
        Some(DialogKind::AddExpense) => {
            dialogs::expense::handle_key(app, key);
        }
        Some(DialogKind::AddGoal) => {
            dialogs::goal::handle_key(app, key);
        }
        None => handle_normal_key(app, key),
    }

    Ok(())
}

/// Handle keys when no dialog is open
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.toggle_help(),

        KeyCode::Char('1') => app.select_tab(Tab::Expenses),
        KeyCode::Char('2') => app.select_tab(Tab::Savings),
        KeyCode::Char('3') => app.select_tab(Tab::Reports),

        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => app.prev_tab(),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => app.next_tab(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.prev_tab(),

        KeyCode::Char('a') | KeyCode::Char('n') | KeyCode::Char('+') => app.open_dialog(),

        _ => {}
    }
}

/// Handle a mouse event
///
/// A left click outside an open dialog is a backdrop dismiss. While help is
/// showing, a click only closes help.
fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> Result<()> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return Ok(());
    }

    if app.show_help {
        app.show_help = false;
        return Ok(());
    }

    if let Some(kind) = app.active_dialog() {
        let area = dialog_area(kind, app.frame_area);
        if !area.contains(Position::new(mouse.column, mouse.row)) {
            app.dismiss_dialog();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use ratatui::layout::Rect;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn click(app: &mut App, column: u16, row: u16) {
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        handle_event(app, Event::Mouse(mouse)).unwrap();
    }

    #[test]
    fn test_quit() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_dialog() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        press(&mut app, KeyCode::Char('a'));
        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_tab_selection_keys() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.active_tab(), Tab::Reports);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_tab(), Tab::Expenses);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.active_tab(), Tab::Reports);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.active_tab(), Tab::Savings);
    }

    #[test]
    fn test_add_key_per_tab() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.active_dialog(), Some(DialogKind::AddExpense));
        press(&mut app, KeyCode::Esc);

        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.active_dialog(), Some(DialogKind::AddGoal));
        press(&mut app, KeyCode::Esc);

        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.active_dialog(), None);
    }

    #[test]
    fn test_keys_go_to_dialog_not_tabs() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('q'));

        assert_eq!(app.active_tab(), Tab::Expenses);
        assert!(!app.should_quit);
        assert_eq!(app.expense_form.title_input.value(), "2q");
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_click_outside_dialog_dismisses() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.frame_area = Rect::new(0, 0, 80, 24);
        press(&mut app, KeyCode::Char('a'));

        // Inside the dialog: stays open
        let area = dialog_area(DialogKind::AddExpense, app.frame_area);
        click(&mut app, area.x + 1, area.y + 1);
        assert!(app.has_dialog());

        // Backdrop: dismissed without adding anything
        click(&mut app, 0, 0);
        assert!(!app.has_dialog());
        assert!(app.shell.ledger().is_empty());
    }

    #[test]
    fn test_click_with_help_open_only_closes_help() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.frame_area = Rect::new(0, 0, 80, 24);
        press(&mut app, KeyCode::Char('a'));
        app.toggle_help();

        click(&mut app, 0, 0);
        assert!(!app.show_help);
        assert!(app.has_dialog());

        click(&mut app, 0, 0);
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_full_expense_flow() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        press(&mut app, KeyCode::Char('a'));
        for c in "Lunch".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        for c in "250".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert!(!app.has_dialog());
        assert_eq!(app.shell.ledger().len(), 1);
        assert_eq!(app.shell.ledger().list()[0].amount, "250");
    }
}
