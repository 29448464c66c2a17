use super::types::QuizConfig;
use crate::io::paths::MusePaths;
use crate::{MuseError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads and validates the quiz configuration
pub struct ConfigLoader {
    /// Directory searched when no explicit path is given
    config_dir: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader that falls back to the user config directory
    pub fn new() -> Self {
        let config_dir = MusePaths::new().ok().map(|paths| paths.config_dir);
        Self { config_dir }
    }

    /// Create a loader with a specific fallback directory
    pub fn with_config_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: Some(config_dir.into()),
        }
    }

    /// Resolve the configuration.
    ///
    /// An explicit path must exist. Otherwise `config.yaml` in the config
    /// directory is used when present, and built-in defaults when not.
    pub fn load(&self, explicit: Option<&Path>) -> Result<QuizConfig> {
        if let Some(path) = explicit {
            return self.load_file(path);
        }

        if let Some(dir) = &self.config_dir {
            let candidate = MusePaths::config_file_in(dir);
            if candidate.is_file() {
                return self.load_file(&candidate);
            }
            debug!(path = %candidate.display(), "no config file, using defaults");
        }

        Ok(QuizConfig::default())
    }

    /// Load configuration from a YAML file
    pub fn load_file(&self, path: &Path) -> Result<QuizConfig> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            MuseError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        let config: QuizConfig = serde_yaml_ng::from_str(&contents).map_err(|e| {
            MuseError::Config(format!("Failed to parse config file {}: {}", path.display(), e))
        })?;

        Self::validate(&config)?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Reject values the event loop cannot work with
    pub fn validate(config: &QuizConfig) -> Result<()> {
        if config.settings.copied_ack_ms == 0 {
            return Err(MuseError::Config(
                "settings.copied_ack_ms must be greater than 0".to_string(),
            ));
        }

        if !(10..=1000).contains(&config.settings.tick_rate_ms) {
            return Err(MuseError::Config(format!(
                "settings.tick_rate_ms must be between 10 and 1000, got {}",
                config.settings.tick_rate_ms
            )));
        }

        if let Some(recipient) = &config.share.recipient {
            if recipient.trim().is_empty() {
                return Err(MuseError::Config(
                    "share.recipient must not be blank".to_string(),
                ));
            }
        }

        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{ShareTargetKind, DEFAULT_COPIED_ACK_MS};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_missing_dir_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let loader = ConfigLoader::with_config_dir(dir.path());
        let config = loader.load(None).unwrap();
        assert_eq!(config, QuizConfig::default());
        assert_eq!(config.settings.copied_ack_ms, DEFAULT_COPIED_ACK_MS);
        assert_eq!(config.share.target, ShareTargetKind::Mailto);
    }

    #[test]
    fn test_config_dir_file_is_picked_up() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("config.yaml"),
            "settings:\n  copied_ack_ms: 1500\nshare:\n  target: none\n",
        )
        .unwrap();

        let config = ConfigLoader::with_config_dir(dir.path()).load(None).unwrap();
        assert_eq!(config.settings.copied_ack_ms, 1500);
        assert_eq!(config.settings.tick_rate_ms, 50);
        assert_eq!(config.share.target, ShareTargetKind::None);
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let dir = TempDir::new().unwrap();
        let loader = ConfigLoader::with_config_dir(dir.path());
        let err = loader.load(Some(&dir.path().join("nope.yaml"))).unwrap_err();
        assert!(matches!(err, MuseError::Config(_)));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.yaml");
        std::fs::write(&path, "settings:\n  copied_ack: 10\n").unwrap();
        let err = ConfigLoader::with_config_dir(dir.path()).load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_validation_bounds() {
        let mut config = QuizConfig::default();
        assert!(ConfigLoader::validate(&config).is_ok());

        config.settings.copied_ack_ms = 0;
        assert!(ConfigLoader::validate(&config).is_err());

        config.settings.copied_ack_ms = 3000;
        config.settings.tick_rate_ms = 5;
        assert!(ConfigLoader::validate(&config).is_err());

        config.settings.tick_rate_ms = 50;
        config.share.recipient = Some("  ".to_string());
        assert!(ConfigLoader::validate(&config).is_err());
    }
}
