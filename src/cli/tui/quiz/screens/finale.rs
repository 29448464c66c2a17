//! Summary screen with copy and send

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::widgets::{render_button, BUTTON_HEIGHT};
use crate::cli::tui::quiz::state::{FinaleButton, FinaleState};
use crate::cli::tui::quiz::theme::Theme;
use crate::quiz::AnswerRecord;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    state: &FinaleState,
    answers: &AnswerRecord,
    copied: bool,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),             // Celebration
            Constraint::Length(5),             // Summary
            Constraint::Length(1),             // Spacing
            Constraint::Length(BUTTON_HEIGHT), // Copy
            Constraint::Length(BUTTON_HEIGHT), // Send
            Constraint::Min(0),
        ])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from("🎉✨"),
        Line::from(Span::styled("Xong rồi nè!", theme.heading)),
        Line::from(Span::styled("Cảm ơn bé iuuu", theme.title)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    let summary = Paragraph::new(vec![
        summary_line("Nickname", &answers.nickname, theme),
        summary_line("Style", &answers.style, theme),
        summary_line("Gu", &answers.crush_factor, theme),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.muted),
    );
    frame.render_widget(summary, chunks[1]);

    let copy_label = if copied {
        "Đã copy! Gửi Zalo nha ✅"
    } else {
        "📋 Copy kết quả"
    };
    if copied {
        let done = Paragraph::new(Line::from(Span::styled(copy_label, theme.success)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(theme.success),
            );
        frame.render_widget(done, chunks[3]);
    } else {
        render_button(frame, chunks[3], copy_label, state.focus == FinaleButton::Copy, true, theme);
    }

    render_button(
        frame,
        chunks[4],
        "💖 Gửi cho anh iu",
        state.focus == FinaleButton::Send,
        true,
        theme,
    );
}

fn summary_line<'a>(label: &'a str, value: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), theme.heading),
        // One row per answer on the card
        Span::styled(value.replace('\n', " "), theme.text),
    ])
}
