/// Screen modules for the quiz, one per step
pub mod basics;
pub mod deep;
pub mod finale;
pub mod preferences;
pub mod situational;
pub mod welcome;
pub mod widgets;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
    Frame,
};

use super::layout::card_area;
use super::state::StepView;
use super::theme::Theme;
use crate::quiz::{AnswerRecord, Step};

/// Everything a frame needs
pub struct ScreenContext<'a> {
    pub view: &'a StepView,
    pub answers: &'a AnswerRecord,
    pub copied: bool,
    pub theme: &'a Theme,
}

/// Render the card, progress, the active step and the help bar
pub fn render(frame: &mut Frame, ctx: &ScreenContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Card
            Constraint::Length(1), // Footer
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    let card = Block::default()
        .title(" 💌 My Muse Profile ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(ctx.theme.card_border);
    let card_rect = card_area(chunks[0]);
    let inner = card.inner(card_rect);
    frame.render_widget(card, card_rect);

    let step = ctx.view.step();
    let body = if step == Step::Welcome {
        inner
    } else {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Progress
                Constraint::Length(1), // Spacing
                Constraint::Min(0),    // Step body
            ])
            .split(inner);
        render_progress(frame, parts[0], step, ctx.theme);
        parts[2]
    };

    match ctx.view {
        StepView::Welcome => welcome::render(frame, body, ctx.theme),
        StepView::Basics(state) => basics::render(frame, body, state, ctx.answers, ctx.theme),
        StepView::Preferences(state) => {
            preferences::render(frame, body, state, ctx.answers, ctx.theme)
        }
        StepView::Situational(state) => {
            situational::render(frame, body, state, ctx.answers, ctx.theme)
        }
        StepView::Deep(state) => deep::render(frame, body, state, ctx.answers, ctx.theme),
        StepView::Finale(state) => {
            finale::render(frame, body, state, ctx.answers, ctx.copied, ctx.theme)
        }
    }

    let footer = Paragraph::new(Span::styled(
        "From Minhh Tiếnn with a big 💖 for you",
        ctx.theme.muted,
    ))
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[1]);

    render_help(frame, chunks[2], step, ctx.theme);
}

fn render_progress(frame: &mut Frame, area: Rect, step: Step, theme: &Theme) {
    let gauge = Gauge::default()
        .gauge_style(theme.progress)
        .ratio(step.progress())
        .label(format!("{}/{}", step.index(), Step::Finale.index()));
    frame.render_widget(gauge, area);
}

/// Key hints for a step
pub fn help_text(step: Step) -> &'static str {
    match step {
        Step::Welcome => "Enter start  ·  q quit",
        Step::Basics => "Tab/↑↓ move  ·  Enter next field / confirm  ·  Esc quit",
        Step::Deep => "Tab/↑↓ move  ·  Alt+Enter/Ctrl+J new line  ·  Enter confirm  ·  Esc quit",
        Step::Preferences | Step::Situational => {
            "Tab switch group  ·  ↑↓ browse  ·  Enter/Space pick  ·  1-9 quick pick  ·  Esc quit"
        }
        Step::Finale => "c copy  ·  s send  ·  ←→ choose  ·  Enter press  ·  q quit",
    }
}

fn render_help(frame: &mut Frame, area: Rect, step: Step, theme: &Theme) {
    let help = Paragraph::new(Line::from(vec![Span::raw(" "), Span::raw(help_text(step))]))
        .alignment(Alignment::Center)
        .style(theme.help_bar);
    frame.render_widget(help, area);
}
