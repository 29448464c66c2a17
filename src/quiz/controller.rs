//! Step progression and the single owner of the answer record

use tracing::debug;

use super::answers::{AnswerPatch, AnswerRecord, Field};
use super::step::Step;

/// Callback invoked after every merge with the supplied fields
pub type AnswerObserver = Box<dyn FnMut(&[Field], &AnswerRecord)>;

/// Result of [`WizardController::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Predicate held and the step moved forward by one
    Moved { from: Step, to: Step },
    /// Current step is not filled in yet; nothing changed
    Blocked(Step),
    /// Already at the last step; nothing changed
    Terminal,
}

impl Advance {
    pub fn moved(&self) -> bool {
        matches!(self, Advance::Moved { .. })
    }
}

/// Drives the quiz forward and owns the answers
pub struct WizardController {
    step: Step,
    answers: AnswerRecord,
    observers: Vec<AnswerObserver>,
}

impl WizardController {
    /// Start a session on the welcome step with an empty record
    pub fn initialize() -> Self {
        Self {
            step: Step::Welcome,
            answers: AnswerRecord::new(),
            observers: Vec::new(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn answers(&self) -> &AnswerRecord {
        &self.answers
    }

    pub fn into_answers(self) -> AnswerRecord {
        self.answers
    }

    /// Register a callback run after each merge
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&[Field], &AnswerRecord) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Merge a partial record. No validation happens here.
    pub fn update_answers(&mut self, patch: AnswerPatch) -> Vec<Field> {
        let touched = self.answers.merge(patch);
        if touched.is_empty() {
            return touched;
        }

        debug!(step = %self.step, fields = ?touched, "answers updated");
        for observer in self.observers.iter_mut() {
            observer(&touched, &self.answers);
        }
        touched
    }

    /// Whether the current step's predicate holds
    pub fn can_advance(&self) -> bool {
        self.step.next().is_some() && self.step.is_satisfied_by(&self.answers)
    }

    /// Move to the next step if the current one is satisfied
    pub fn advance(&mut self) -> Advance {
        let Some(next) = self.step.next() else {
            return Advance::Terminal;
        };

        if !self.step.is_satisfied_by(&self.answers) {
            debug!(step = %self.step, "advance blocked");
            return Advance::Blocked(self.step);
        }

        let from = self.step;
        self.step = next;
        debug!(%from, to = %next, "step advanced");
        Advance::Moved { from, to: next }
    }
}

impl Default for WizardController {
    fn default() -> Self {
        Self::initialize()
    }
}

impl std::fmt::Debug for WizardController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WizardController")
            .field("step", &self.step)
            .field("answers", &self.answers)
            .field("observers", &self.observers.len())
            .finish()
    }
}
