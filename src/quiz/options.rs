//! Fixed option lists for the single-choice questions

use super::answers::Field;
use super::step::Step;

pub const DRINKS: &[&str] = &[
    "Trà sữa full topping 🧋",
    "Cà phê tỉnh táo ☕",
    "Trà trái cây healthy 🥭",
    "Matcha lattee 🍵",
];

pub const STYLES: &[&str] = &[
    "Bánh bèo công chúa 🎀",
    "Năng động cool ngầu 😎",
    "Thích cả hai (QUÁ LÀ THAM LAM)",
];

pub const ANGRY_ACTIONS: &[&str] = &[
    "Kệ anh, dỗi tí là hết 🙄",
    "Chọc cho anh cười 😂",
    "Dỗ ngọt ngào, hun cái 🥺",
];

pub const WEEKENDS: &[&str] = &[
    "Nằm nhà cày Netflix 🎬",
    "Đi cháy phố chụp ảnh 📸",
    "Đi ăn sập quán ngon 🍕",
    "Đi cà hê chill chill ngắm cảnh, trò chuyện với nhau ☕",
];

/// One question with a fixed set of answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceGroup {
    pub field: Field,
    pub prompt: &'static str,
    pub options: &'static [&'static str],
}

impl ChoiceGroup {
    pub fn option(&self, index: usize) -> Option<&'static str> {
        self.options.get(index).copied()
    }

    /// Index of the option currently recorded, if any
    pub fn position_of(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|opt| *opt == value)
    }
}

pub const DRINK_GROUP: ChoiceGroup = ChoiceGroup {
    field: Field::Drink,
    prompt: "Nước uống chân ái của iêm ?",
    options: DRINKS,
};

pub const STYLE_GROUP: ChoiceGroup = ChoiceGroup {
    field: Field::Style,
    prompt: "Style đi chơi?",
    options: STYLES,
};

pub const ANGRY_ACTION_GROUP: ChoiceGroup = ChoiceGroup {
    field: Field::AngryAction,
    prompt: "Anh mà dỗi thì em sẽ...",
    options: ANGRY_ACTIONS,
};

pub const WEEKEND_GROUP: ChoiceGroup = ChoiceGroup {
    field: Field::Weekend,
    prompt: "Cuối tuần lý tưởng?",
    options: WEEKENDS,
};

/// Choice questions asked on a step, in display order
pub fn groups_for(step: Step) -> &'static [ChoiceGroup] {
    match step {
        Step::Preferences => &[DRINK_GROUP, STYLE_GROUP],
        Step::Situational => &[ANGRY_ACTION_GROUP, WEEKEND_GROUP],
        _ => &[],
    }
}

/// Last whitespace-separated token, shown large on option cards
pub fn badge(option: &str) -> &str {
    option.split(' ').next_back().unwrap_or(option)
}

/// Option text with its final character removed, as printed under the badge
pub fn caption(option: &str) -> &str {
    match option.char_indices().next_back() {
        Some((idx, _)) => &option[..idx],
        None => option,
    }
}
