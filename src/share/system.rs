use arboard::Clipboard;
use tracing::debug;

use super::mailto::mailto_url;
use super::{ClipboardWriter, ShareSink};
use crate::quiz::SharePayload;
use crate::{MuseError, Result};

/// Clipboard of the desktop session
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        Clipboard::new()
            .and_then(|mut cb| cb.set_text(text))
            .map_err(|e| MuseError::Clipboard(e.to_string()))
    }
}

/// Opens the default mail client pre-filled with the summary
#[derive(Debug, Clone, Default)]
pub struct MailtoShare {
    recipient: Option<String>,
}

impl MailtoShare {
    pub fn new(recipient: Option<String>) -> Self {
        Self { recipient }
    }
}

impl ShareSink for MailtoShare {
    fn share(&self, payload: &SharePayload) -> Result<()> {
        let url = mailto_url(self.recipient.as_deref(), payload);
        debug!(len = url.len(), "opening mailto link");
        open::that(&url).map_err(|e| MuseError::Share(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "mailto"
    }
}
