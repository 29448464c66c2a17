//! Shareable text rendering of a finished record

use super::answers::AnswerRecord;

/// Render the full record into the shareable message.
///
/// Pure: the same record always yields the same text.
pub fn format_summary(answers: &AnswerRecord) -> String {
    let text = format!(
        "💖 *Hồ sơ tình yêu của {nickname}* 💖\n\
         \n\
         🎂 Sinh nhật: {birthday}\n\
         🥤 Nước uống: {drink}\n\
         🎀 Style: {style}\n\
         😡 Khi dỗi: {angry_action}\n\
         📅 Cuối tuần: {weekend}\n\
         \n\
         🤫 *Điểm G (Gu):* \n\
         \"{crush_factor}\"\n\
         \n\
         ------------------\n\
         Yêu anh đi đừng ngại! 😘",
        nickname = answers.nickname,
        birthday = answers.birthday,
        drink = answers.drink,
        style = answers.style,
        angry_action = answers.angry_action,
        weekend = answers.weekend,
        crush_factor = answers.crush_factor,
    );
    text.trim().to_string()
}

/// Title and body handed to the platform share target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
}

impl SharePayload {
    pub fn from_answers(answers: &AnswerRecord) -> Self {
        Self {
            title: format!("Hồ sơ của {}", answers.nickname),
            text: format_summary(answers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn full_record() -> AnswerRecord {
        AnswerRecord {
            nickname: "Heo".to_string(),
            birthday: "2007-07-02".to_string(),
            drink: "Trà sữa full topping 🧋".to_string(),
            style: "Bánh bèo công chúa 🎀".to_string(),
            angry_action: "Dỗ ngọt ngào, hun cái 🥺".to_string(),
            weekend: "Đi ăn sập quán ngon 🍕".to_string(),
            crush_factor: "Nụ cười".to_string(),
        }
    }

    #[test]
    fn test_full_record_matches_template() {
        let expected = "💖 *Hồ sơ tình yêu của Heo* 💖\n\
\n\
🎂 Sinh nhật: 2007-07-02\n\
🥤 Nước uống: Trà sữa full topping 🧋\n\
🎀 Style: Bánh bèo công chúa 🎀\n\
😡 Khi dỗi: Dỗ ngọt ngào, hun cái 🥺\n\
📅 Cuối tuần: Đi ăn sập quán ngon 🍕\n\
\n\
🤫 *Điểm G (Gu):* \n\
\"Nụ cười\"\n\
\n\
------------------\n\
Yêu anh đi đừng ngại! 😘";
        assert_eq!(format_summary(&full_record()), expected);
    }

    #[test]
    fn test_gu_line_keeps_trailing_space() {
        let text = format_summary(&full_record());
        assert!(text.lines().any(|line| line == "🤫 *Điểm G (Gu):* "));
    }

    #[test]
    fn test_format_is_idempotent() {
        let record = full_record();
        assert_eq!(format_summary(&record), format_summary(&record));
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        let text = format_summary(&AnswerRecord::new());
        assert!(text.starts_with("💖 *Hồ sơ tình yêu của * 💖"));
        assert!(text.ends_with("😘"));
    }

    #[test]
    fn test_share_payload() {
        let payload = SharePayload::from_answers(&full_record());
        assert_eq!(payload.title, "Hồ sơ của Heo");
        assert_eq!(payload.text, format_summary(&full_record()));
    }
}
