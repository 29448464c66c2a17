use crate::{MuseError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Name of the configuration file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Path management for muse-profile configuration files
#[derive(Debug, Clone)]
pub struct MusePaths {
    /// Configuration directory
    pub config_dir: PathBuf,
}

impl MusePaths {
    /// Create new paths instance using standard directories
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "muse-profile").ok_or_else(|| {
            MuseError::Path("Failed to determine project directories".to_string())
        })?;

        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
        })
    }

    /// Location of `config.yaml` inside `dir`
    pub fn config_file_in(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE_NAME)
    }
}
