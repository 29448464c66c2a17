//! The answer record accumulated over one quiz session

use serde::{Deserialize, Serialize};

/// Everything the quiz collects. All fields start empty and are only ever
/// overwritten, never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub nickname: String,
    pub birthday: String,
    pub drink: String,
    pub style: String,
    pub angry_action: String,
    pub weekend: String,
    pub crush_factor: String,
}

/// Names a single field of [`AnswerRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Nickname,
    Birthday,
    Drink,
    Style,
    AngryAction,
    Weekend,
    CrushFactor,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Nickname,
        Field::Birthday,
        Field::Drink,
        Field::Style,
        Field::AngryAction,
        Field::Weekend,
        Field::CrushFactor,
    ];

    /// Key used in the serialized record
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Nickname => "nickname",
            Field::Birthday => "birthday",
            Field::Drink => "drink",
            Field::Style => "style",
            Field::AngryAction => "angryAction",
            Field::Weekend => "weekend",
            Field::CrushFactor => "crushFactor",
        }
    }

    /// Free-text answers that may span several lines
    pub fn is_multiline(&self) -> bool {
        matches!(self, Field::CrushFactor)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AnswerRecord {
    /// Fresh record with every field empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Nickname => &self.nickname,
            Field::Birthday => &self.birthday,
            Field::Drink => &self.drink,
            Field::Style => &self.style,
            Field::AngryAction => &self.angry_action,
            Field::Weekend => &self.weekend,
            Field::CrushFactor => &self.crush_factor,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Nickname => &mut self.nickname,
            Field::Birthday => &mut self.birthday,
            Field::Drink => &mut self.drink,
            Field::Style => &mut self.style,
            Field::AngryAction => &mut self.angry_action,
            Field::Weekend => &mut self.weekend,
            Field::CrushFactor => &mut self.crush_factor,
        }
    }

    /// Merge a patch field by field. Returns the fields the patch supplied,
    /// in declaration order.
    pub fn merge(&mut self, patch: AnswerPatch) -> Vec<Field> {
        let mut touched = Vec::new();
        for (field, value) in patch.into_entries() {
            *self.slot_mut(field) = value;
            touched.push(field);
        }
        touched
    }
}

/// A partial record. `None` leaves the matching field untouched on merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerPatch {
    pub nickname: Option<String>,
    pub birthday: Option<String>,
    pub drink: Option<String>,
    pub style: Option<String>,
    pub angry_action: Option<String>,
    pub weekend: Option<String>,
    pub crush_factor: Option<String>,
}

impl AnswerPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Patch that sets exactly one field
    pub fn single(field: Field, value: impl Into<String>) -> Self {
        Self::new().with(field, value)
    }

    /// Builder-style setter
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        *self.slot_mut(field) = Some(value.into());
        self
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Nickname => self.nickname.as_deref(),
            Field::Birthday => self.birthday.as_deref(),
            Field::Drink => self.drink.as_deref(),
            Field::Style => self.style.as_deref(),
            Field::AngryAction => self.angry_action.as_deref(),
            Field::Weekend => self.weekend.as_deref(),
            Field::CrushFactor => self.crush_factor.as_deref(),
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Nickname => &mut self.nickname,
            Field::Birthday => &mut self.birthday,
            Field::Drink => &mut self.drink,
            Field::Style => &mut self.style,
            Field::AngryAction => &mut self.angry_action,
            Field::Weekend => &mut self.weekend,
            Field::CrushFactor => &mut self.crush_factor,
        }
    }

    /// Fields this patch sets
    pub fn fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_some())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }

    fn into_entries(self) -> Vec<(Field, String)> {
        [
            (Field::Nickname, self.nickname),
            (Field::Birthday, self.birthday),
            (Field::Drink, self.drink),
            (Field::Style, self.style),
            (Field::AngryAction, self.angry_action),
            (Field::Weekend, self.weekend),
            (Field::CrushFactor, self.crush_factor),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_record_is_empty() {
        let record = AnswerRecord::new();
        for field in Field::ALL {
            assert_eq!(record.get(field), "");
        }
    }

    #[test]
    fn test_merge_leaves_untouched_fields() {
        let mut record = AnswerRecord::new();
        record.merge(AnswerPatch::single(Field::Nickname, "Heo").with(Field::Drink, "Matcha lattee 🍵"));
        let touched = record.merge(AnswerPatch::single(Field::Birthday, "2007-07-02"));

        assert_eq!(touched, vec![Field::Birthday]);
        assert_eq!(record.nickname, "Heo");
        assert_eq!(record.birthday, "2007-07-02");
        assert_eq!(record.drink, "Matcha lattee 🍵");
        assert_eq!(record.style, "");
    }

    #[test]
    fn test_merge_is_last_write_wins() {
        let patches = vec![
            AnswerPatch::single(Field::Style, "Bánh bèo công chúa 🎀"),
            AnswerPatch::single(Field::Weekend, "Nằm nhà cày Netflix 🎬"),
            AnswerPatch::single(Field::Style, "Năng động cool ngầu 😎").with(Field::CrushFactor, "cười"),
            AnswerPatch::new(),
        ];

        let mut record = AnswerRecord::new();
        for patch in patches {
            record.merge(patch);
        }

        let expected = AnswerRecord {
            style: "Năng động cool ngầu 😎".to_string(),
            weekend: "Nằm nhà cày Netflix 🎬".to_string(),
            crush_factor: "cười".to_string(),
            ..Default::default()
        };
        assert_eq!(record, expected);
    }

    #[test]
    fn test_merge_can_set_empty_value() {
        let mut record = AnswerRecord::new();
        record.merge(AnswerPatch::single(Field::Nickname, "Heo"));
        record.merge(AnswerPatch::single(Field::Nickname, ""));
        assert_eq!(record.nickname, "");
    }

    #[test]
    fn test_patch_fields() {
        let patch = AnswerPatch::single(Field::Weekend, "x").with(Field::Nickname, "y");
        assert_eq!(patch.fields(), vec![Field::Nickname, Field::Weekend]);
        assert!(!patch.is_empty());
        assert!(AnswerPatch::new().is_empty());
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = AnswerRecord {
            angry_action: "Chọc cho anh cười 😂".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["angryAction"], "Chọc cho anh cười 😂");
        assert_eq!(json["crushFactor"], "");
    }
}
