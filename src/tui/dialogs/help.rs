//! Help dialog
//!
//! Shows keyboard shortcuts for the current tab

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use crate::shell::Tab;
use crate::tui::app::App;
use crate::tui::layout::centered_rect;
use crate::tui::theme;

use super::dialog_block;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new(get_help_lines(app.active_tab()))
        .block(dialog_block(" Help "))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Get help lines for the given tab
fn get_help_lines(tab: Tab) -> Vec<Line<'static>> {
    let mut lines = vec![
        section("Global Keys"),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("1/2/3", "Expenses / Savings / Reports"),
        key_line("Tab/l/→", "Next tab"),
        key_line("S-Tab/h/←", "Previous tab"),
        Line::from(""),
    ];

    match tab {
        Tab::Expenses => {
            lines.push(section("Expenses"));
            lines.push(Line::from(""));
            lines.push(key_line("a/n/+", "Add expense"));
        }
        Tab::Savings => {
            lines.push(section("Savings"));
            lines.push(Line::from(""));
            lines.push(key_line("a/n/+", "Add savings goal"));
        }
        Tab::Reports => {
            lines.push(section("Reports"));
            lines.push(Line::from(""));
            lines.push(Line::from("Reports are not available yet."));
        }
    }

    if tab.dialog().is_some() {
        lines.push(Line::from(""));
        lines.push(section("In a dialog"));
        lines.push(Line::from(""));
        lines.push(key_line("Tab/↑/↓", "Move between fields"));
        lines.push(key_line("Enter", "Save"));
        lines.push(key_line("Esc", "Cancel"));
        lines.push(key_line("Click", "Outside the dialog to dismiss"));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(theme::MUTED_TEXT),
    )));

    lines
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(theme::DARK_PINK)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), theme::key_style()),
        Span::raw("  "),
        Span::styled(
            description.to_string(),
            Style::default().fg(theme::BLACK_TEXT),
        ),
    ])
}
