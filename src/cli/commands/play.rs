use super::CommandHandler;
use crate::config::ConfigLoader;
#[cfg(not(feature = "tui"))]
use crate::MuseError;
use crate::Result;
use std::path::PathBuf;

/// Handler for the `play` command
pub struct PlayCommand {
    pub config: Option<PathBuf>,
}

impl CommandHandler for PlayCommand {
    #[cfg(feature = "tui")]
    fn execute(&self) -> Result<()> {
        use crate::quiz::format_summary;

        let config = ConfigLoader::new().load(self.config.as_deref())?;
        tracing::debug!(share = %config.share.target, "starting quiz");

        let runtime = tokio::runtime::Runtime::new()?;
        let outcome = runtime.block_on(crate::cli::tui::run_quiz(&config))?;

        // The terminal is restored by now; leave the profile on screen
        if outcome.finished() {
            println!("{}", format_summary(&outcome.answers));
        }
        Ok(())
    }

    #[cfg(not(feature = "tui"))]
    fn execute(&self) -> Result<()> {
        ConfigLoader::new().load(self.config.as_deref())?;
        Err(MuseError::Cli(
            "the interactive quiz needs the `tui` feature".to_string(),
        ))
    }

    fn name(&self) -> &'static str {
        "play"
    }
}

impl PlayCommand {
    /// Create new play command
    pub fn new(config: Option<PathBuf>) -> Self {
        Self { config }
    }
}
