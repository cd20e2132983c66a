//! Tab bar view
//!
//! The header row listing the three tabs with the active one highlighted.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::shell::Tab;
use crate::tui::app::App;
use crate::tui::theme;

/// Render the tab bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| Line::from(format!(" {} {} ", tab.index() + 1, tab.title())))
        .collect();

    let block = Block::default()
        .title(" Penny ")
        .title_style(theme::header_style())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::WHITE_TEXT))
        .style(Style::default().bg(theme::DARK_PINK));

    let tabs = Tabs::new(titles)
        .block(block)
        .select(app.active_tab().index())
        .style(Style::default().fg(theme::WHITE_TEXT))
        .highlight_style(
            Style::default()
                .fg(theme::DARK_PINK)
                .bg(theme::BABY_PINK)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│");

    frame.render_widget(tabs, area);
}
