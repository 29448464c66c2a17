//! Clipboard and platform-share capabilities used by the finale.
//!
//! Both are side-effect only. A failure is reported to the caller and never
//! reaches the answer record or the step.

pub mod ack;
pub mod mailto;
#[cfg(feature = "tui")]
pub mod system;

pub use ack::CopiedAck;

use crate::quiz::SharePayload;
use crate::Result;

/// Writes text to a clipboard
pub trait ClipboardWriter: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// Hands a summary to some platform share target
pub trait ShareSink: Send + Sync {
    fn share(&self, payload: &SharePayload) -> Result<()>;

    /// Short name for logging
    fn name(&self) -> &'static str;
}

/// Share target that does nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoShare;

impl ShareSink for NoShare {
    fn share(&self, _payload: &SharePayload) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "none"
    }
}

/// Build the share target selected in the configuration
#[cfg(feature = "tui")]
pub fn share_sink_for(settings: &crate::config::ShareSettings) -> std::sync::Arc<dyn ShareSink> {
    use crate::config::ShareTargetKind;

    match settings.target {
        ShareTargetKind::Mailto => {
            std::sync::Arc::new(system::MailtoShare::new(settings.recipient.clone()))
        }
        ShareTargetKind::None => std::sync::Arc::new(NoShare),
    }
}
