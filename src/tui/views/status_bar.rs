//! Status bar view
//!
//! Shows entry counts, the last status message, and key hints

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;
use crate::tui::theme;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", plural(app.shell.ledger().len(), "expense")),
            Style::default().fg(theme::BLACK_TEXT),
        ),
        Span::raw("│"),
        Span::styled(
            format!(" {} ", plural(app.shell.tracker().len(), "goal")),
            Style::default().fg(theme::BLACK_TEXT),
        ),
    ];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw("│ "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(theme::DARK_PINK),
        ));
    }

    let hints = if app.active_tab().dialog().is_some() {
        " a:Add  1-3:Tabs  ?:Help  q:Quit "
    } else {
        " 1-3:Tabs  ?:Help  q:Quit "
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(theme::MUTED_TEXT)));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme::BABY_PINK));

    frame.render_widget(paragraph, area);
}

/// "1 expense", "3 expenses"
fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
