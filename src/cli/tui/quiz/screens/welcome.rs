//! Welcome screen

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::widgets::{render_button, BUTTON_HEIGHT};
use crate::cli::tui::quiz::layout::centered_rect;
use crate::cli::tui::quiz::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
    let content = centered_rect(90, 80, area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(7),             // Greeting
            Constraint::Length(1),             // Spacing
            Constraint::Length(BUTTON_HEIGHT), // Start button
            Constraint::Min(0),
        ])
        .split(content);

    let lines = vec![
        Line::from("💌"),
        Line::from(""),
        Line::from(Span::styled("My", theme.heading)),
        Line::from(vec![
            Span::styled("Muse Profile", theme.title),
            Span::raw(" 💖✨"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Trả lời mấy câu hỏi xàm xí để anh hiểu bé hơn nè!",
            theme.text,
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), chunks[1]);

    let button_area = centered_rect(60, 100, chunks[3]);
    render_button(frame, button_area, "Bắt đầu thôi! 🚀", true, true, theme);
}
