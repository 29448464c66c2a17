use thiserror::Error;

#[derive(Error, Debug)]
pub enum MuseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML serialization error: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("CLI error: {0}")]
    Cli(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Share error: {0}")]
    Share(String),

    #[error("Answers incomplete: the {step} step is not filled in")]
    Incomplete { step: &'static str },

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, MuseError>;
