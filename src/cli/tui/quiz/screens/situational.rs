//! Situations: what happens when he sulks, ideal weekend

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::widgets::{choice_lines, render_button, OptionLook, BUTTON_HEIGHT};
use crate::cli::tui::quiz::state::ChoiceState;
use crate::cli::tui::quiz::theme::Theme;
use crate::quiz::{AnswerRecord, Step};

pub fn render(frame: &mut Frame, area: Rect, state: &ChoiceState, answers: &AnswerRecord, theme: &Theme) {
    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(
        state
            .groups
            .iter()
            .map(|group| Constraint::Length(group.options.len() as u16 + 2)),
    );
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled("Xử lý tình huống 🧩", theme.heading)))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    for (index, group) in state.groups.iter().enumerate() {
        let lines = choice_lines(
            group,
            answers.get(group.field),
            state.highlighted[index],
            state.focus == index,
            OptionLook::Marker,
            theme.picked,
            theme,
        );
        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }),
            chunks[index + 1],
        );
    }

    render_button(
        frame,
        chunks[state.groups.len() + 1],
        "Sắp xong rùi",
        state.confirm_focused(),
        Step::Situational.is_satisfied_by(answers),
        theme,
    );
}
