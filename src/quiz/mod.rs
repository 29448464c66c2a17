//! Quiz core: the answer record, the ordered steps and the controller that
//! moves between them.
//!
//! Nothing in here touches a terminal or a platform capability; the TUI and
//! the `summary` command both drive the same [`WizardController`].

pub mod answers;
pub mod controller;
pub mod options;
pub mod step;
pub mod summary;

pub use answers::{AnswerPatch, AnswerRecord, Field};
pub use controller::{Advance, WizardController};
pub use step::Step;
pub use summary::{format_summary, SharePayload};
