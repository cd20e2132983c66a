//! Colour theme
//!
//! Pink palette used across the tab bar, views and dialogs.

use ratatui::style::{Color, Modifier, Style};

/// Primary accent: tab bar, titles, borders
pub const DARK_PINK: Color = Color::Rgb(0xC2, 0x18, 0x5B);

/// Background for content panels and dialogs
pub const BABY_PINK: Color = Color::Rgb(0xF8, 0xBB, 0xD0);

/// Text drawn on dark pink
pub const WHITE_TEXT: Color = Color::Rgb(0xFF, 0xFF, 0xFF);

/// Text drawn on baby pink
pub const BLACK_TEXT: Color = Color::Rgb(0x00, 0x00, 0x00);

/// Placeholders and hints
pub const MUTED_TEXT: Color = Color::Rgb(0x88, 0x5A, 0x6B);

/// Inline form errors
pub const ERROR_TEXT: Color = Color::Rgb(0xB0, 0x00, 0x20);

/// Content panel style
pub fn panel_style() -> Style {
    Style::default().fg(BLACK_TEXT).bg(BABY_PINK)
}

/// Header bar style
pub fn header_style() -> Style {
    Style::default()
        .fg(WHITE_TEXT)
        .bg(DARK_PINK)
        .add_modifier(Modifier::BOLD)
}

/// Block title style
pub fn title_style() -> Style {
    Style::default().fg(DARK_PINK).add_modifier(Modifier::BOLD)
}

/// Border style for panels and dialogs
pub fn border_style() -> Style {
    Style::default().fg(DARK_PINK)
}

/// Highlighted key in a hint line
pub fn key_style() -> Style {
    Style::default().fg(DARK_PINK).add_modifier(Modifier::BOLD)
}

/// Block cursor in text inputs
pub fn cursor_style() -> Style {
    Style::default().fg(WHITE_TEXT).bg(DARK_PINK)
}
