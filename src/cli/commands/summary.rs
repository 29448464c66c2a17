use super::CommandHandler;
use crate::cli::OutputFormat;
use crate::quiz::{format_summary, Advance, AnswerPatch, Field, WizardController};
use crate::{MuseError, Result};
use tracing::debug;

/// Handler for the `summary` command
pub struct SummaryCommand {
    pub patch: AnswerPatch,
    pub format: OutputFormat,
    pub allow_incomplete: bool,
}

impl CommandHandler for SummaryCommand {
    fn execute(&self) -> Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "summary"
    }
}

impl SummaryCommand {
    /// Create new summary command from raw flag values
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        nickname: String,
        birthday: String,
        drink: String,
        style: String,
        angry_action: String,
        weekend: String,
        crush_factor: String,
        format: OutputFormat,
        allow_incomplete: bool,
    ) -> Self {
        let patch = AnswerPatch::new()
            .with(Field::Nickname, nickname)
            .with(Field::Birthday, birthday)
            .with(Field::Drink, drink)
            .with(Field::Style, style)
            .with(Field::AngryAction, angry_action)
            .with(Field::Weekend, weekend)
            .with(Field::CrushFactor, crush_factor);
        Self {
            patch,
            format,
            allow_incomplete,
        }
    }

    /// Walk the answers through every step and render the result
    pub fn render(&self) -> Result<String> {
        let mut controller = WizardController::initialize();

        // Each step only receives its own fields, like the interactive quiz
        loop {
            let step = controller.step();
            let mut patch = AnswerPatch::new();
            for field in step.fields() {
                if let Some(value) = self.patch.get(*field) {
                    patch = patch.with(*field, value);
                }
            }
            controller.update_answers(patch);

            match controller.advance() {
                Advance::Moved { .. } => continue,
                Advance::Terminal => break,
                Advance::Blocked(step) if self.allow_incomplete => {
                    debug!(%step, "incomplete answers allowed");
                    controller.update_answers(self.remaining_fields(step.index()));
                    break;
                }
                Advance::Blocked(step) => {
                    return Err(MuseError::Incomplete { step: step.name() });
                }
            }
        }

        let answers = controller.into_answers();
        match self.format {
            OutputFormat::Text => Ok(format_summary(&answers)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&answers)?),
        }
    }

    /// Fields belonging to steps after `index`
    fn remaining_fields(&self, index: usize) -> AnswerPatch {
        let mut patch = AnswerPatch::new();
        for step in crate::quiz::Step::ALL.iter().skip(index + 1) {
            for field in step.fields() {
                if let Some(value) = self.patch.get(*field) {
                    patch = patch.with(*field, value);
                }
            }
        }
        patch
    }
}
