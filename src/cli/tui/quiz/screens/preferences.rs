//! Vibe check: drink and style picks

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::widgets::{choice_lines, render_button, OptionLook, BUTTON_HEIGHT};
use crate::cli::tui::quiz::state::ChoiceState;
use crate::cli::tui::quiz::theme::Theme;
use crate::quiz::{AnswerRecord, Step};

pub fn render(frame: &mut Frame, area: Rect, state: &ChoiceState, answers: &AnswerRecord, theme: &Theme) {
    let [drink, style] = state.groups else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                                // Title
            Constraint::Length(drink.options.len() as u16 + 2),   // Drink
            Constraint::Length(style.options.len() as u16 + 2),   // Style
            Constraint::Length(BUTTON_HEIGHT),                    // Next
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled("Vibe Check ✨", theme.heading)))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let drink_lines = choice_lines(
        drink,
        answers.get(drink.field),
        state.highlighted[0],
        state.focus == 0,
        OptionLook::Badge,
        theme.picked,
        theme,
    );
    frame.render_widget(Paragraph::new(drink_lines), chunks[1]);

    let style_lines = choice_lines(
        style,
        answers.get(style.field),
        state.highlighted[1],
        state.focus == 1,
        OptionLook::Badge,
        theme.picked_accent,
        theme,
    );
    frame.render_widget(Paragraph::new(style_lines), chunks[2]);

    render_button(
        frame,
        chunks[3],
        "Tiếp luôn!",
        state.confirm_focused(),
        Step::Preferences.is_satisfied_by(answers),
        theme,
    );
}
