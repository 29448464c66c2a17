use serde::{Deserialize, Serialize};

/// Default lifetime of the "copied" acknowledgment on the finale screen
pub const DEFAULT_COPIED_ACK_MS: u64 = 3000;

/// Default redraw tick
pub const DEFAULT_TICK_RATE_MS: u64 = 50;

/// Root configuration file structure (config.yaml)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct QuizConfig {
    /// Timing settings for the interactive quiz
    #[serde(default)]
    pub settings: Settings,

    /// Where the finale's "send" action shares the summary
    #[serde(default)]
    pub share: ShareSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// How long the "copied" acknowledgment stays visible
    #[serde(default = "default_copied_ack_ms")]
    pub copied_ack_ms: u64,

    /// Redraw interval while idle
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            copied_ack_ms: DEFAULT_COPIED_ACK_MS,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

fn default_copied_ack_ms() -> u64 {
    DEFAULT_COPIED_ACK_MS
}

fn default_tick_rate_ms() -> u64 {
    DEFAULT_TICK_RATE_MS
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ShareSettings {
    #[serde(default)]
    pub target: ShareTargetKind,

    /// Address placed in the mailto link, left blank when unset
    #[serde(default)]
    pub recipient: Option<String>,
}

/// Platform share implementations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ShareTargetKind {
    /// Open the default mail client with the summary as body
    #[default]
    Mailto,
    /// Sharing disabled; "send" only copies
    None,
}

impl std::fmt::Display for ShareTargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShareTargetKind::Mailto => write!(f, "mailto"),
            ShareTargetKind::None => write!(f, "none"),
        }
    }
}
