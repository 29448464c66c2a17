use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// muse-profile: a six-step love quiz for the terminal
#[derive(Parser)]
#[command(name = "muse-profile")]
#[command(version)]
#[command(about = "A six-step love quiz that ends in a shareable profile")]
#[command(
    long_about = "Walks through welcome, basics, vibe check, situations and one deep question, then lets you copy or send the finished profile."
)]
pub struct Cli {
    /// Log level
    #[arg(long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Write logs to this file instead of stderr (the quiz discards them otherwise)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Take the quiz interactively (default)
    Play {
        /// Configuration file (defaults to config.yaml in the user config directory)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the profile summary for answers given as flags
    Summary {
        #[arg(long, default_value = "")]
        nickname: String,

        /// Birthday, e.g. 2007-07-02
        #[arg(long, default_value = "")]
        birthday: String,

        #[arg(long, default_value = "")]
        drink: String,

        #[arg(long, default_value = "")]
        style: String,

        #[arg(long, default_value = "")]
        angry_action: String,

        #[arg(long, default_value = "")]
        weekend: String,

        #[arg(long, default_value = "")]
        crush_factor: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Print even when a step would not let the quiz continue
        #[arg(long)]
        allow_incomplete: bool,
    },

    /// List the choices offered on each step
    Options,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Play { config: None }
    }
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Play { .. } => "play",
            Commands::Summary { .. } => "summary",
            Commands::Options => "options",
        }
    }

    /// Whether the command takes over the terminal
    pub fn is_interactive(&self) -> bool {
        matches!(self, Commands::Play { .. })
    }
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["muse-profile"]).unwrap();
        assert_eq!(cli.command.unwrap_or_default(), Commands::Play { config: None });
        assert_eq!(cli.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_summary_flags() {
        let cli = Cli::try_parse_from([
            "muse-profile",
            "summary",
            "--nickname",
            "Heo",
            "--angry-action",
            "Chọc cho anh cười 😂",
            "--format",
            "json",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(cli.log_level, LogLevel::Debug);
        match cli.command.unwrap() {
            Commands::Summary { nickname, angry_action, format, allow_incomplete, .. } => {
                assert_eq!(nickname, "Heo");
                assert_eq!(angry_action, "Chọc cho anh cười 😂");
                assert_eq!(format, OutputFormat::Json);
                assert!(!allow_incomplete);
            }
            other => panic!("unexpected command {}", other.name()),
        }
    }

    #[test]
    fn test_interactive_only_for_play() {
        assert!(Commands::default().is_interactive());
        assert!(!Commands::Options.is_interactive());
    }
}
