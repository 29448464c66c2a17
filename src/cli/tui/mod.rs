/// Terminal User Interface module for interactive commands
pub mod quiz;

use crate::config::QuizConfig;
use crate::Result;

/// Run the interactive quiz
pub async fn run_quiz(config: &QuizConfig) -> Result<quiz::SessionOutcome> {
    quiz::run(config).await
}
