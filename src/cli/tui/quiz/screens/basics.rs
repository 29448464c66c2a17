//! Nickname and birthday

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::widgets::{render_button, TextField, BUTTON_HEIGHT, TEXT_FIELD_HEIGHT};
use crate::cli::tui::quiz::state::FormState;
use crate::cli::tui::quiz::theme::Theme;
use crate::quiz::{AnswerRecord, Field, Step};

pub fn render(frame: &mut Frame, area: Rect, state: &FormState, answers: &AnswerRecord, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                 // Title
            Constraint::Length(TEXT_FIELD_HEIGHT), // Nickname
            Constraint::Length(1),                 // Spacing
            Constraint::Length(TEXT_FIELD_HEIGHT), // Birthday
            Constraint::Length(1),                 // Spacing
            Constraint::Length(BUTTON_HEIGHT),     // Next
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled("Thông tin cơ bản 📝", theme.heading)))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    TextField {
        label: "Em sẽ rất thích nếu anh gọi em bằng ?",
        value: &answers.nickname,
        placeholder: "Ví dụ: Bé Heooo",
        cursor: state.cursors[0],
        multiline: false,
        focused: state.focused_field() == Some(Field::Nickname),
    }
    .render(frame, chunks[1], theme);

    TextField {
        label: "Ngày bé sinh ra đời 🎂",
        value: &answers.birthday,
        placeholder: "YYYY-MM-DD (Ví dụ: 2007-07-02)",
        cursor: state.cursors[1],
        multiline: false,
        focused: state.focused_field() == Some(Field::Birthday),
    }
    .render(frame, chunks[3], theme);

    render_button(
        frame,
        chunks[5],
        "Tiếp theo →",
        state.confirm_focused(),
        Step::Basics.is_satisfied_by(answers),
        theme,
    );
}
