//! Reports view
//!
//! Placeholder; no report is computed.

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::theme;

/// Render the reports placeholder
pub fn render(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Reports ")
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_style(theme::border_style());

    let text = Paragraph::new("View your reports")
        .block(block)
        .style(theme::panel_style());

    frame.render_widget(text, area);
}
