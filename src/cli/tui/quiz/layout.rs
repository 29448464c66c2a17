//! Layout helpers for the centered quiz card

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Widest the card gets on large terminals
pub const CARD_MAX_WIDTH: u16 = 72;

/// Calculate centered area by percentage
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

/// Horizontally centered column no wider than [`CARD_MAX_WIDTH`]
pub fn card_area(r: Rect) -> Rect {
    let width = r.width.min(CARD_MAX_WIDTH);
    let padding = r.width.saturating_sub(width) / 2;
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(padding),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(r)[1]
}
