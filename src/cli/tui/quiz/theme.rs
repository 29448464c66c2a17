use ratatui::style::{Color, Modifier, Style};

const PRIMARY: Color = Color::Rgb(255, 143, 171);
const SECONDARY: Color = Color::Rgb(251, 111, 146);
const ACCENT: Color = Color::Rgb(131, 56, 236);

/// Consistent theme for the quiz
pub struct Theme {
    pub card_border: Style,
    pub title: Style,
    pub heading: Style,
    pub prompt: Style,
    pub text: Style,
    pub placeholder: Style,
    pub focused: Style,
    pub picked: Style,
    pub picked_accent: Style,
    pub option: Style,
    pub button: Style,
    pub button_focused: Style,
    pub button_disabled: Style,
    pub success: Style,
    pub muted: Style,
    pub progress: Style,
    pub help_bar: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            card_border: Style::default().fg(PRIMARY),
            title: Style::default()
                .fg(SECONDARY)
                .add_modifier(Modifier::BOLD),
            heading: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            prompt: Style::default().fg(SECONDARY),
            text: Style::default().fg(Color::White),
            placeholder: Style::default().fg(Color::DarkGray),
            focused: Style::default().fg(PRIMARY),
            picked: Style::default()
                .fg(SECONDARY)
                .add_modifier(Modifier::BOLD),
            picked_accent: Style::default()
                .fg(ACCENT)
                .add_modifier(Modifier::BOLD),
            option: Style::default().fg(Color::Gray),
            button: Style::default().fg(SECONDARY),
            button_focused: Style::default()
                .fg(Color::White)
                .bg(SECONDARY)
                .add_modifier(Modifier::BOLD),
            button_disabled: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
            success: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            muted: Style::default().fg(Color::DarkGray),
            progress: Style::default().fg(SECONDARY).bg(Color::Rgb(60, 40, 50)),
            help_bar: Style::default().bg(Color::DarkGray),
        }
    }
}

impl Theme {
    /// Style of a confirm/action button
    pub fn button_style(&self, focused: bool, enabled: bool) -> Style {
        match (enabled, focused) {
            (false, _) => self.button_disabled,
            (true, true) => self.button_focused,
            (true, false) => self.button,
        }
    }

    /// Marker in front of an option row
    pub fn option_marker(picked: bool) -> &'static str {
        if picked {
            "💖 "
        } else {
            "○ "
        }
    }
}
