//! Savings view
//!
//! Table of savings goals with a progress bar per goal. The bar stops at full
//! width for over-saved goals; the percentage beside it does not.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::tui::app::App;
use crate::tui::theme;

/// Width of the progress bar, in cells
const BAR_WIDTH: usize = 20;

/// Build a text progress bar for a ratio
///
/// Ratios below zero render empty and ratios above one render full.
pub fn progress_bar(ratio: f64, width: usize) -> String {
    let filled = (ratio.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a ratio as a whole percentage, without clamping
pub fn percent_label(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}

/// Render the savings goals table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Savings ")
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .style(theme::panel_style());

    let tracker = app.shell.tracker();
    if tracker.is_empty() {
        let text = Paragraph::new("No savings goals yet. Press 'a' to add one.")
            .block(block)
            .style(theme::panel_style());
        frame.render_widget(text, area);
        return;
    }

    let symbol = &app.settings.currency_symbol;
    let rows: Vec<Row> = tracker
        .list()
        .iter()
        .map(|goal| {
            let progress = tracker.progress_of(goal);
            let progress_style = if goal.is_reached() {
                Style::default()
                    .fg(theme::DARK_PINK)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::DARK_PINK)
            };

            Row::new(vec![
                Cell::from(goal.name.clone()),
                Cell::from(format!("{} {}", symbol, goal.saved)),
                Cell::from(format!("{} {}", symbol, goal.target)),
                Cell::from(format!(
                    "{} {:>5}",
                    progress_bar(progress, BAR_WIDTH),
                    percent_label(progress)
                ))
                .style(progress_style),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(14),    // Name
        Constraint::Length(14), // Saved
        Constraint::Length(14), // Target
        Constraint::Length(27), // Progress
    ];

    let header = Row::new(vec![
        Cell::from("Goal"),
        Cell::from("Saved"),
        Cell::from("Target"),
        Cell::from("Progress"),
    ])
    .style(theme::title_style())
    .height(1);

    let table = Table::new(rows, widths).header(header).block(block);

    frame.render_widget(table, area);
}
