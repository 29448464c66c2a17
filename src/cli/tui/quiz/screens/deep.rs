//! The closing free-text question

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::widgets::{render_button, TextField, BUTTON_HEIGHT, TEXT_AREA_HEIGHT};
use crate::cli::tui::quiz::state::FormState;
use crate::cli::tui::quiz::theme::Theme;
use crate::quiz::step::{text_length, MIN_CRUSH_FACTOR_LEN};
use crate::quiz::{AnswerRecord, Step};

pub fn render(frame: &mut Frame, area: Rect, state: &FormState, answers: &AnswerRecord, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                 // Title
            Constraint::Length(2),                 // Question
            Constraint::Length(TEXT_AREA_HEIGHT),  // Answer
            Constraint::Length(1),                 // Length hint
            Constraint::Length(BUTTON_HEIGHT),     // Finish
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled("Câu hỏi chốt hạ 🤫", theme.heading)))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let question = Paragraph::new(vec![
        Line::from(Span::styled("Điều gì ở anh làm em \"đổ\" cái rầm?", theme.text)),
        Line::from(Span::styled("(Ghi thật nha!)", theme.muted)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(question, chunks[1]);

    TextField {
        label: "Gu",
        value: &answers.crush_factor,
        placeholder: "Ví dụ: ĐẸP TRAI, thơm, hay cười...",
        cursor: state.cursors[0],
        multiline: true,
        focused: !state.confirm_focused(),
    }
    .render(frame, chunks[2], theme);

    let remaining = MIN_CRUSH_FACTOR_LEN.saturating_sub(text_length(&answers.crush_factor));
    if remaining > 0 {
        let hint = Paragraph::new(Span::styled(format!("còn {} ký tự nữa nha", remaining), theme.muted))
            .alignment(Alignment::Right);
        frame.render_widget(hint, chunks[3]);
    }

    render_button(
        frame,
        chunks[4],
        "U LÀ TRỪI, BÉ NÀY NGOANN DỮ VẬY TA !!! 🎉",
        state.confirm_focused(),
        Step::Deep.is_satisfied_by(answers),
        theme,
    );
}
