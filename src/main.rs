use clap::Parser;
use muse_profile::{
    cli::commands::{
        options::OptionsCommand, play::PlayCommand, summary::SummaryCommand, CommandHandler,
    },
    cli::{Cli, Commands, LogLevel},
    MuseError, Result,
};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Initialize tracing from the CLI flags.
///
/// Logs go to stderr, or to `log_file` when given. The interactive quiz owns
/// the terminal, so without a log file its logs are dropped.
fn initialize_tracing(log_level: &LogLevel, log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let filter = EnvFilter::new(log_level.to_filter_directive());

    match log_file {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                MuseError::Config(format!("Failed to open log file {}: {}", path.display(), e))
            })?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if interactive => {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::new("off"))
                .with_writer(std::io::sink)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr) // keep stdout for the summary
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    initialize_tracing(&cli.log_level, cli.log_file.as_deref(), command.is_interactive())?;
    tracing::debug!(command = command.name(), "dispatching");

    match command {
        Commands::Play { config } => {
            PlayCommand::new(config).execute()?;
        }
        Commands::Summary {
            nickname,
            birthday,
            drink,
            style,
            angry_action,
            weekend,
            crush_factor,
            format,
            allow_incomplete,
        } => {
            let command = SummaryCommand::new(
                nickname,
                birthday,
                drink,
                style,
                angry_action,
                weekend,
                crush_factor,
                format,
                allow_incomplete,
            );
            command.execute()?;
        }
        Commands::Options => {
            OptionsCommand.execute()?;
        }
    }

    Ok(())
}
