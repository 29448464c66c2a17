use ratatui::crossterm::event::KeyEvent;

/// All possible events in the application
#[derive(Debug)]
pub enum AppEvent {
    // Input events
    Key(KeyEvent),
    Resize(u16, u16),

    // Results of the finale's capability calls
    ClipboardWritten(Result<(), String>),
    ShareFinished { target: &'static str, result: Result<(), String> },

    // UI events
    Tick, // expires the copied acknowledgment
}
