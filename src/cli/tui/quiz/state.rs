//! Per-step view state and key handling.
//!
//! Views keep only ephemeral UI state (focus, cursor, highlighted option).
//! Field values are always read from the live [`AnswerRecord`] and changes go
//! back out as an [`AnswerPatch`] for the controller to merge.

use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tui_input::backend::crossterm::EventHandler;
use tui_input::{Input, InputRequest};

use crate::quiz::options::{groups_for, ChoiceGroup};
use crate::quiz::{AnswerPatch, AnswerRecord, Field, Step};

/// What a view wants done after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAction {
    None,
    Update(AnswerPatch),
    Confirm,
    Copy,
    Send,
    Quit,
}

/// One variant per step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepView {
    Welcome,
    Basics(FormState),
    Preferences(ChoiceState),
    Situational(ChoiceState),
    Deep(FormState),
    Finale(FinaleState),
}

impl StepView {
    /// Fresh view for a step, positioned on the record's current values
    pub fn for_step(step: Step, answers: &AnswerRecord) -> Self {
        match step {
            Step::Welcome => StepView::Welcome,
            Step::Basics => StepView::Basics(FormState::new(step, answers)),
            Step::Preferences => StepView::Preferences(ChoiceState::new(step, answers)),
            Step::Situational => StepView::Situational(ChoiceState::new(step, answers)),
            Step::Deep => StepView::Deep(FormState::new(step, answers)),
            Step::Finale => StepView::Finale(FinaleState::default()),
        }
    }

    pub fn step(&self) -> Step {
        match self {
            StepView::Welcome => Step::Welcome,
            StepView::Basics(_) => Step::Basics,
            StepView::Preferences(_) => Step::Preferences,
            StepView::Situational(_) => Step::Situational,
            StepView::Deep(_) => Step::Deep,
            StepView::Finale(_) => Step::Finale,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, answers: &AnswerRecord) -> StepAction {
        match self {
            StepView::Welcome => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => StepAction::Confirm,
                KeyCode::Char('q') | KeyCode::Char('Q') => StepAction::Quit,
                _ => StepAction::None,
            },
            StepView::Basics(state) | StepView::Deep(state) => state.handle_key(key, answers),
            StepView::Preferences(state) | StepView::Situational(state) => state.handle_key(key),
            StepView::Finale(state) => state.handle_key(key),
        }
    }
}

/// Text fields followed by a confirm control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub fields: &'static [Field],
    /// `fields.len()` means the confirm control has focus
    pub focus: usize,
    /// Cursor position per field, in characters
    pub cursors: Vec<usize>,
}

impl FormState {
    pub fn new(step: Step, answers: &AnswerRecord) -> Self {
        let fields = step.fields();
        let cursors = fields
            .iter()
            .map(|field| answers.get(*field).chars().count())
            .collect();
        Self {
            fields,
            focus: 0,
            cursors,
        }
    }

    pub fn focused_field(&self) -> Option<Field> {
        self.fields.get(self.focus).copied()
    }

    pub fn confirm_focused(&self) -> bool {
        self.focus == self.fields.len()
    }

    fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % (self.fields.len() + 1);
    }

    fn focus_prev(&mut self) {
        let slots = self.fields.len() + 1;
        self.focus = (self.focus + slots - 1) % slots;
    }

    pub fn handle_key(&mut self, key: KeyEvent, answers: &AnswerRecord) -> StepAction {
        if is_newline_key(key) {
            return match self.focused_field() {
                Some(field) if field.is_multiline() => {
                    let focus = self.focus;
                    let edit = insert_newline(answers.get(field), self.cursors[focus]);
                    self.cursors[focus] = edit.cursor;
                    match edit.value {
                        Some(value) => StepAction::Update(AnswerPatch::single(field, value)),
                        None => StepAction::None,
                    }
                }
                _ => StepAction::None,
            };
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                return StepAction::None;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_prev();
                return StepAction::None;
            }
            KeyCode::Enter => {
                if self.confirm_focused() {
                    return StepAction::Confirm;
                }
                self.focus_next();
                return StepAction::None;
            }
            _ => {}
        }

        let Some(field) = self.focused_field() else {
            return StepAction::None;
        };
        let cursor = self.cursors[self.focus];
        match edit_text(answers.get(field), cursor, key) {
            Some(edit) => {
                self.cursors[self.focus] = edit.cursor;
                match edit.value {
                    Some(value) => StepAction::Update(AnswerPatch::single(field, value)),
                    None => StepAction::None,
                }
            }
            None => StepAction::None,
        }
    }
}

/// Result of applying a key to a text value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    /// New value, when the key changed it
    pub value: Option<String>,
    pub cursor: usize,
}

/// Apply a key press to `current` with the cursor at `cursor`.
///
/// Returns `None` when the key is not a text editing key.
pub fn edit_text(current: &str, cursor: usize, key: KeyEvent) -> Option<TextEdit> {
    let mut input = Input::new(current.to_string()).with_cursor(cursor);
    let changed = input.handle_event(&Event::Key(key))?;
    Some(TextEdit {
        value: changed.value.then(|| input.value().to_string()),
        cursor: input.cursor(),
    })
}

/// Alt+Enter or Ctrl+J; plain Enter moves focus
fn is_newline_key(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => key.modifiers.contains(KeyModifiers::ALT),
        KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn insert_newline(current: &str, cursor: usize) -> TextEdit {
    let mut input = Input::new(current.to_string()).with_cursor(cursor);
    let changed = input.handle(InputRequest::InsertChar('\n'));
    TextEdit {
        value: changed.map(|_| input.value().to_string()),
        cursor: input.cursor(),
    }
}

/// Single-choice option groups followed by a confirm control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceState {
    pub groups: &'static [ChoiceGroup],
    /// `groups.len()` means the confirm control has focus
    pub focus: usize,
    /// Highlighted option per group
    pub highlighted: Vec<usize>,
}

impl ChoiceState {
    pub fn new(step: Step, answers: &AnswerRecord) -> Self {
        let groups = groups_for(step);
        let highlighted = groups
            .iter()
            .map(|group| group.position_of(answers.get(group.field)).unwrap_or(0))
            .collect();
        Self {
            groups,
            focus: 0,
            highlighted,
        }
    }

    pub fn focused_group(&self) -> Option<&ChoiceGroup> {
        self.groups.get(self.focus)
    }

    pub fn confirm_focused(&self) -> bool {
        self.focus == self.groups.len()
    }

    fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % (self.groups.len() + 1);
    }

    fn focus_prev(&mut self) {
        let slots = self.groups.len() + 1;
        self.focus = (self.focus + slots - 1) % slots;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> StepAction {
        match key.code {
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_prev(),
            KeyCode::Enter if self.confirm_focused() => return StepAction::Confirm,
            KeyCode::Up | KeyCode::Left => {
                if let Some(highlight) = self.highlighted.get_mut(self.focus) {
                    *highlight = highlight.saturating_sub(1);
                }
            }
            KeyCode::Down | KeyCode::Right => {
                if let Some(group) = self.groups.get(self.focus) {
                    let last = group.options.len().saturating_sub(1);
                    let highlight = &mut self.highlighted[self.focus];
                    *highlight = (*highlight + 1).min(last);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let Some(group) = self.groups.get(self.focus) else {
                    return StepAction::None;
                };
                let Some(option) = group.option(self.highlighted[self.focus]) else {
                    return StepAction::None;
                };
                let field = group.field;
                self.focus_next();
                return StepAction::Update(AnswerPatch::single(field, option));
            }
            KeyCode::Char(c) if c.is_ascii_digit() && key.modifiers == KeyModifiers::NONE => {
                // 1-based quick pick within the focused group
                let Some(group) = self.groups.get(self.focus) else {
                    return StepAction::None;
                };
                let index = (c as usize).wrapping_sub('1' as usize);
                if let Some(option) = group.option(index) {
                    self.highlighted[self.focus] = index;
                    return StepAction::Update(AnswerPatch::single(group.field, option));
                }
            }
            _ => {}
        }
        StepAction::None
    }
}

/// Buttons on the finale screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FinaleButton {
    #[default]
    Copy,
    Send,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FinaleState {
    pub focus: FinaleButton,
}

impl FinaleState {
    pub fn handle_key(&mut self, key: KeyEvent) -> StepAction {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.focus = match self.focus {
                    FinaleButton::Copy => FinaleButton::Send,
                    FinaleButton::Send => FinaleButton::Copy,
                };
                StepAction::None
            }
            KeyCode::Enter => match self.focus {
                FinaleButton::Copy => StepAction::Copy,
                FinaleButton::Send => StepAction::Send,
            },
            KeyCode::Char('c') | KeyCode::Char('C') => StepAction::Copy,
            KeyCode::Char('s') | KeyCode::Char('S') => StepAction::Send,
            KeyCode::Char('q') | KeyCode::Char('Q') => StepAction::Quit,
            _ => StepAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_edit_text_inserts_at_cursor() {
        let edit = edit_text("Heo", 0, key(KeyCode::Char('B'))).unwrap();
        assert_eq!(edit.value.as_deref(), Some("BHeo"));
        assert_eq!(edit.cursor, 1);
    }

    #[test]
    fn test_edit_text_cursor_only() {
        let edit = edit_text("Heo", 3, key(KeyCode::Left)).unwrap();
        assert_eq!(edit.value, None);
        assert_eq!(edit.cursor, 2);
    }

    #[test]
    fn test_edit_text_ignores_non_editing_keys() {
        assert_eq!(edit_text("Heo", 3, key(KeyCode::F(5))), None);
    }

    #[test]
    fn test_form_cursor_starts_at_end() {
        let mut answers = AnswerRecord::new();
        answers.nickname = "Bé Heo".to_string();
        let form = FormState::new(Step::Basics, &answers);
        assert_eq!(form.cursors, vec![6, 0]);
    }

    #[test]
    fn test_newline_only_in_multiline_field() {
        let mut answers = AnswerRecord::new();
        answers.crush_factor = "ab".to_string();
        let mut deep = FormState::new(Step::Deep, &answers);
        let alt_enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT);
        assert_eq!(
            deep.handle_key(alt_enter, &answers),
            StepAction::Update(AnswerPatch::single(Field::CrushFactor, "ab\n"))
        );
        assert_eq!(deep.cursors, vec![3]);

        let mut basics = FormState::new(Step::Basics, &answers);
        let ctrl_j = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::CONTROL);
        assert_eq!(basics.handle_key(ctrl_j, &answers), StepAction::None);
        assert_eq!(basics.focus, 0);
    }

    #[test]
    fn test_digit_quick_pick() {
        let mut choices = ChoiceState::new(Step::Preferences, &AnswerRecord::new());
        let action = choices.handle_key(key(KeyCode::Char('4')));
        assert_eq!(
            action,
            StepAction::Update(AnswerPatch::single(Field::Drink, "Matcha lattee 🍵"))
        );
        assert_eq!(choices.highlighted[0], 3);
        assert_eq!(choices.handle_key(key(KeyCode::Char('9'))), StepAction::None);
        assert_eq!(choices.handle_key(key(KeyCode::Char('0'))), StepAction::None);
    }
}
