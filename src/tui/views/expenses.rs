//! Expenses view
//!
//! Lists recorded expenses oldest first, with the amount shown as entered.

use chrono::Local;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::tui::app::App;
use crate::tui::theme;

/// Render the expenses list
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Expenses ")
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .style(theme::panel_style());

    let ledger = app.shell.ledger();
    if ledger.is_empty() {
        let text = Paragraph::new("No expenses yet. Press 'a' to add one.")
            .block(block)
            .style(theme::panel_style());
        frame.render_widget(text, area);
        return;
    }

    let symbol = &app.settings.currency_symbol;
    let rows: Vec<Row> = ledger
        .list()
        .iter()
        .map(|entry| {
            Row::new(vec![
                Cell::from(entry.title.clone()),
                Cell::from(entry.format_amount(symbol)).style(
                    Style::default()
                        .fg(theme::DARK_PINK)
                        .add_modifier(Modifier::BOLD),
                ),
                Cell::from(
                    entry
                        .created_at
                        .with_timezone(&Local)
                        .format("%H:%M")
                        .to_string(),
                )
                .style(Style::default().fg(theme::MUTED_TEXT)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(20),    // Title
        Constraint::Length(18), // Amount
        Constraint::Length(6),  // Time added
    ];

    let header = Row::new(vec![
        Cell::from("Title"),
        Cell::from("Amount"),
        Cell::from("Added"),
    ])
    .style(theme::title_style())
    .height(1);

    let table = Table::new(rows, widths).header(header).block(block);

    frame.render_widget(table, area);
}
