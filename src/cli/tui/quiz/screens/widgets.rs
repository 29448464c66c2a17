//! Building blocks shared by the step screens

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tui_input::Input;

use crate::cli::tui::quiz::theme::Theme;
use crate::quiz::options::{badge, caption, ChoiceGroup};

/// Height of a bordered single-line text field
pub const TEXT_FIELD_HEIGHT: u16 = 3;

/// Height of a bordered three-line text area
pub const TEXT_AREA_HEIGHT: u16 = 5;

/// Height of a bordered button
pub const BUTTON_HEIGHT: u16 = 3;

/// How option rows are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionLook {
    /// Large badge followed by the caption, like a card
    Badge,
    /// Heart/circle marker followed by the full label
    Marker,
}

/// Bordered single-line text field bound to `value`
pub struct TextField<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub cursor: usize,
    pub focused: bool,
    /// Show every line of the value instead of scrolling one line sideways
    pub multiline: bool,
}

impl TextField<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .title(format!(" {} ", self.label))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused { theme.focused } else { theme.muted });
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.multiline {
            self.render_lines(frame, inner, theme);
            return;
        }

        let input = Input::new(self.value.to_string()).with_cursor(self.cursor);
        let width = inner.width.max(1) as usize;
        let scroll = input.visual_scroll(width.saturating_sub(1));

        let paragraph = if self.value.is_empty() {
            Paragraph::new(Span::styled(self.placeholder, theme.placeholder))
        } else {
            Paragraph::new(Span::styled(self.value, theme.text)).scroll((0, scroll as u16))
        };
        frame.render_widget(paragraph, inner);

        if self.focused {
            let offset = input.visual_cursor().saturating_sub(scroll) as u16;
            frame.set_cursor_position((inner.x + offset.min(inner.width.saturating_sub(1)), inner.y));
        }
    }

    fn render_lines(&self, frame: &mut Frame, inner: Rect, theme: &Theme) {
        let before: String = self.value.chars().take(self.cursor).collect();
        let row = before.matches('\n').count() as u16;
        let column = Line::from(before.rsplit('\n').next().unwrap_or("")).width() as u16;
        let scroll = row.saturating_sub(inner.height.saturating_sub(1));

        let paragraph = if self.value.is_empty() {
            Paragraph::new(Span::styled(self.placeholder, theme.placeholder))
        } else {
            Paragraph::new(Text::styled(self.value, theme.text)).scroll((scroll, 0))
        };
        frame.render_widget(paragraph, inner);

        if self.focused {
            frame.set_cursor_position((
                inner.x + column.min(inner.width.saturating_sub(1)),
                inner.y + row - scroll,
            ));
        }
    }
}

/// Lines for one option group. `highlighted` is only marked when focused.
pub fn choice_lines<'a>(
    group: &ChoiceGroup,
    picked: &str,
    highlighted: usize,
    focused: bool,
    look: OptionLook,
    picked_style: Style,
    theme: &Theme,
) -> Vec<Line<'a>> {
    let mut lines = vec![Line::from(Span::styled(group.prompt, theme.prompt))];

    for (index, option) in group.options.iter().enumerate() {
        let is_picked = *option == picked;
        let pointer = if focused && index == highlighted { "▶ " } else { "  " };
        let style = if is_picked { picked_style } else { theme.option };

        let body = match look {
            OptionLook::Badge if !badge(option).is_ascii() => vec![
                Span::styled(format!("{} ", badge(option)), style),
                Span::styled(caption(option).trim_end().to_string(), style),
                Span::raw(if is_picked { "  ✓" } else { "" }),
            ],
            // Labels without a trailing emoji keep their full text
            OptionLook::Badge => vec![
                Span::styled(format!("✨ {}", option), style),
                Span::raw(if is_picked { "  ✓" } else { "" }),
            ],
            OptionLook::Marker => vec![
                Span::styled(Theme::option_marker(is_picked), style),
                Span::styled(option.to_string(), style),
            ],
        };

        let mut spans = vec![Span::styled(pointer, theme.focused)];
        spans.extend(body);
        lines.push(Line::from(spans));
    }

    lines
}

/// Bordered, centered button label
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    focused: bool,
    enabled: bool,
    theme: &Theme,
) {
    let style = theme.button_style(focused, enabled);
    let button = Paragraph::new(Line::from(Span::styled(label.to_string(), style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(style),
        );
    frame.render_widget(button, area);
}
