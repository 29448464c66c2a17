/// Interactive quiz implementation
pub mod app;
pub mod events;
pub mod layout;
pub mod screens;
pub mod state;
pub mod theme;

use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::config::QuizConfig;
use crate::Result;

pub use app::SessionOutcome;

/// Entry point for the quiz
pub async fn run(config: &QuizConfig) -> Result<SessionOutcome> {
    let span = info_span!("session", id = %Uuid::new_v4());
    let app = app::App::new(config);
    app.run().instrument(span).await
}
