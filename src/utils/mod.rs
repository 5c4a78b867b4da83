pub mod hekaya_constants;
pub mod bidi;

pub use hekaya_constants::{
    SCENE_HEADING_KEYWORDS_AR,
    SCENE_HEADING_KEYWORDS_EN,
    TITLE_KEYS_AR,
    TITLE_KEYS_EN,
    TRANSITION_KEYWORDS_AR,
    TRANSITION_MAP_AR_EN,
    CHARACTER_EXTENSIONS_AR,
    TIME_OF_DAY_AR,
    DIRECTION_VALUES_AR,
    normalize_title_key,
    transition_to_english,
    extension_to_english,
};
pub use bidi::{detect_direction, contains_arabic, apply_direction_marker, RLM, LRM};

/// 检查一行是否为空行（只有空白字符）
pub fn is_blank_line(text: &str) -> bool {
    text.trim().is_empty()
}
