//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: tab bar, main panel, status bar, and
//! where dialogs are placed.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::shell::DialogKind;

/// Layout regions for the TUI
pub struct AppLayout {
    /// Tab bar at the top
    pub tab_bar: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tab bar
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            tab_bar: chunks[0],
            main: chunks[1],
            status_bar: chunks[2],
        }
    }
}

/// Area occupied by an add-entry dialog within the frame
pub fn dialog_area(kind: DialogKind, area: Rect) -> Rect {
    match kind {
        DialogKind::AddExpense => centered_rect_fixed(50, 8, area),
        DialogKind::AddGoal => centered_rect_fixed(50, 9, area),
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.tab_bar.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 23);
        assert_eq!(layout.main.height, 20);
    }

    #[test]
    fn test_centered_rect_fixed() {
        let rect = centered_rect_fixed(50, 8, Rect::new(0, 0, 80, 24));
        assert_eq!(rect, Rect::new(15, 8, 50, 8));
    }

    #[test]
    fn test_centered_rect_fixed_clamps_to_area() {
        let rect = centered_rect_fixed(50, 8, Rect::new(0, 0, 30, 5));
        assert_eq!(rect, Rect::new(0, 0, 30, 5));
    }

    #[test]
    fn test_dialog_area() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(dialog_area(DialogKind::AddGoal, area).height, 9);
        assert_eq!(dialog_area(DialogKind::AddExpense, area).width, 50);
    }
}
