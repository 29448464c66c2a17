//! Optional YAML configuration for the interactive quiz

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{QuizConfig, Settings, ShareSettings, ShareTargetKind};
