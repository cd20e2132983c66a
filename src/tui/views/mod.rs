//! TUI Views module
//!
//! Contains the tab bar, the three tab views, and the status bar.

pub mod expenses;
pub mod reports;
pub mod savings;
pub mod status_bar;
pub mod tab_bar;

use ratatui::Frame;

use crate::shell::{DialogKind, Tab};

use super::app::App;
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    app.frame_area = frame.area();
    let layout = AppLayout::new(frame.area());

    tab_bar::render(frame, app, layout.tab_bar);

    match app.active_tab() {
        Tab::Expenses => expenses::render(frame, app, layout.main),
        Tab::Savings => savings::render(frame, app, layout.main),
        Tab::Reports => reports::render(frame, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog() {
        Some(DialogKind::AddExpense) => dialogs::expense::render(frame, app),
        Some(DialogKind::AddGoal) => dialogs::goal::render(frame, app),
        None => {}
    }

    if app.show_help {
        dialogs::help::render(frame, app);
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::render_to_string;
    use super::*;
    use crate::config::Settings;

    #[test]
    fn test_render_records_frame_area() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        render_to_string(&mut app, 80, 24);
        assert_eq!(app.frame_area.width, 80);
        assert_eq!(app.frame_area.height, 24);
    }

    #[test]
    fn test_render_expense_dialog() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.open_dialog();
        let screen = render_to_string(&mut app, 80, 24);
        assert!(screen.contains("Add Expense"));
        assert!(screen.contains("Title"));
    }

    #[test]
    fn test_render_goal_dialog() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.select_tab(Tab::Savings);
        app.open_dialog();
        let screen = render_to_string(&mut app, 80, 24);
        assert!(screen.contains("Add Savings Goal"));
        assert!(screen.contains("Target"));
    }

    #[test]
    fn test_render_help() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.toggle_help();
        let screen = render_to_string(&mut app, 100, 40);
        assert!(screen.contains("Global Keys"));
    }
}
