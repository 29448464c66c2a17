use super::answers::{AnswerRecord, Field};

/// Minimum length of the free-text answer on the deep step
pub const MIN_CRUSH_FACTOR_LEN: usize = 3;

/// Steps of the quiz, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    Welcome,
    Basics,
    Preferences,
    Situational,
    Deep,
    Finale,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::Welcome,
        Step::Basics,
        Step::Preferences,
        Step::Situational,
        Step::Deep,
        Step::Finale,
    ];

    /// Position of the step, 0 through 5
    pub fn index(&self) -> usize {
        match self {
            Step::Welcome => 0,
            Step::Basics => 1,
            Step::Preferences => 2,
            Step::Situational => 3,
            Step::Deep => 4,
            Step::Finale => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Step> {
        Step::ALL.get(index).copied()
    }

    /// Transition table. `None` means the step is terminal.
    pub fn next(&self) -> Option<Step> {
        match self {
            Step::Welcome => Some(Step::Basics),
            Step::Basics => Some(Step::Preferences),
            Step::Preferences => Some(Step::Situational),
            Step::Situational => Some(Step::Deep),
            Step::Deep => Some(Step::Finale),
            Step::Finale => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.next().is_none()
    }

    /// Get the name of the step
    pub fn name(&self) -> &'static str {
        match self {
            Step::Welcome => "welcome",
            Step::Basics => "basics",
            Step::Preferences => "preferences",
            Step::Situational => "situational",
            Step::Deep => "deep",
            Step::Finale => "finale",
        }
    }

    /// Fields this step may read and write
    pub fn fields(&self) -> &'static [Field] {
        match self {
            Step::Welcome => &[],
            Step::Basics => &[Field::Nickname, Field::Birthday],
            Step::Preferences => &[Field::Drink, Field::Style],
            Step::Situational => &[Field::AngryAction, Field::Weekend],
            Step::Deep => &[Field::CrushFactor],
            Step::Finale => &[],
        }
    }

    pub fn owns(&self, field: Field) -> bool {
        self.fields().contains(&field)
    }

    /// Validity predicate gating progression past this step
    pub fn is_satisfied_by(&self, answers: &AnswerRecord) -> bool {
        match self {
            Step::Welcome => true,
            Step::Basics => !answers.nickname.is_empty() && !answers.birthday.is_empty(),
            Step::Preferences => !answers.drink.is_empty() && !answers.style.is_empty(),
            Step::Situational => !answers.angry_action.is_empty() && !answers.weekend.is_empty(),
            Step::Deep => text_length(&answers.crush_factor) >= MIN_CRUSH_FACTOR_LEN,
            Step::Finale => false,
        }
    }

    /// Fraction of the quiz completed when this step is showing
    pub fn progress(&self) -> f64 {
        self.index() as f64 / Step::Finale.index() as f64
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw length in UTF-16 code units, untrimmed.
pub fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}
