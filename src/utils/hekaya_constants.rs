use std::collections::HashMap;
use lazy_static::lazy_static;

// 所有语言相关的关键字集中在这里，rules.rs 只引用这些表

/// 阿拉伯文场景标题关键字 → 英文对应
///
/// EST 没有通行的阿拉伯文前缀，英文的 EST 仍然可用。
pub const SCENE_HEADING_KEYWORDS_AR: &[(&str, &str)] = &[
    ("داخلي", "INT"),
    ("خارجي", "EXT"),
    ("تأسيس", "EST"),
    ("داخلي/خارجي", "INT/EXT"),
    ("خارجي/داخلي", "EXT/INT"),
    ("د/خ", "I/E"),
];

/// 英文场景标题关键字（标准 Fountain）
pub const SCENE_HEADING_KEYWORDS_EN: &[&str] = &[
    "INT",
    "EXT",
    "EST",
    "INT./EXT",
    "INT/EXT",
    "EXT/INT",
    "EXT./INT",
    "I/E",
];

/// 阿拉伯文标题页key → 规范化key
pub const TITLE_KEYS_AR: &[(&str, &str)] = &[
    ("العنوان", "title"),
    ("المؤلف", "author"),
    ("المؤلفون", "authors"),
    ("المصدر", "source"),
    ("مسودة", "draft date"),
    ("تاريخ", "date"),
    ("تواصل", "contact"),
    ("حقوق", "copyright"),
    ("ملاحظات", "notes"),
    ("ائتمان", "credit"),
    ("اتجاه", "direction"),
];

/// 英文标题页key → 规范化key
pub const TITLE_KEYS_EN: &[(&str, &str)] = &[
    ("title", "title"),
    ("author", "author"),
    ("authors", "authors"),
    ("source", "source"),
    ("draft date", "draft date"),
    ("date", "date"),
    ("contact", "contact"),
    ("copyright", "copyright"),
    ("notes", "notes"),
    ("credit", "credit"),
    ("direction", "direction"),
];

/// 阿拉伯文转场关键字
///
/// 独占一行，没有 `>` 前缀也没有 `:` 后缀，有时用横线包裹：`- قطع -`
pub const TRANSITION_KEYWORDS_AR: &[&str] = &[
    "قطع",
    "قطع إلى",
    "قطع مفاجئ",
    "قطع متطابق",
    "اختفاء تدريجي",
    "ظهور تدريجي",
    "مزج",
    "مزج إلى",
    "ذوبان",
    "عودة للمشهد",
    "تلاشي إلى أسود",
    "تلاشي إلى",
];

/// 阿拉伯文转场 → 英文转场（自动补全和导出用）
pub const TRANSITION_MAP_AR_EN: &[(&str, &str)] = &[
    ("قطع", "CUT TO"),
    ("قطع إلى", "CUT TO"),
    ("قطع مفاجئ", "SMASH CUT TO"),
    ("قطع متطابق", "MATCH CUT TO"),
    ("اختفاء تدريجي", "FADE OUT"),
    ("ظهور تدريجي", "FADE IN"),
    ("مزج", "DISSOLVE TO"),
    ("مزج إلى", "DISSOLVE TO"),
    ("ذوبان", "DISSOLVE TO"),
    ("عودة للمشهد", "BACK TO"),
    ("تلاشي إلى أسود", "FADE TO BLACK"),
    ("تلاشي إلى", "FADE TO"),
];

/// 阿拉伯文角色扩展 → 英文对应
pub const CHARACTER_EXTENSIONS_AR: &[(&str, &str)] = &[
    ("صوت خارجي", "V.O."),
    ("ص.خ", "V.O."),
    ("خارج الشاشة", "O.S."),
    ("خ.ش", "O.S."),
    ("تابع", "CONT'D"),
];

/// 阿拉伯文时间词（场景标题用）
pub const TIME_OF_DAY_AR: &[&str] = &[
    "نهار",
    "ليل",
    "صباح",
    "مساء",
    "غروب",
    "فجر",
    "ظهر",
    "عصر",
];

/// 标题页 direction 的阿拉伯文取值
pub const DIRECTION_VALUES_AR: &[(&str, &str)] = &[
    ("يمين-لليسار", "rtl"),
    ("يسار-لليمين", "ltr"),
];

lazy_static! {
    static ref TITLE_KEY_MAP_AR: HashMap<&'static str, &'static str> =
        TITLE_KEYS_AR.iter().copied().collect();

    static ref TITLE_KEY_MAP_EN: HashMap<&'static str, &'static str> =
        TITLE_KEYS_EN.iter().copied().collect();

    static ref TRANSITION_MAP: HashMap<&'static str, &'static str> =
        TRANSITION_MAP_AR_EN.iter().copied().collect();

    static ref EXTENSION_MAP: HashMap<&'static str, &'static str> =
        CHARACTER_EXTENSIONS_AR.iter().copied().collect();
}

/// 标题页key规范化：先查阿拉伯文表，再查英文表（小写），都没有就用小写原文
pub fn normalize_title_key(raw_key: &str) -> String {
    let raw_key = raw_key.trim();
    let lower_key = raw_key.to_lowercase();
    TITLE_KEY_MAP_AR
        .get(raw_key)
        .or_else(|| TITLE_KEY_MAP_EN.get(lower_key.as_str()))
        .map(|k| k.to_string())
        .unwrap_or(lower_key)
}

/// 阿拉伯文转场对应的英文转场
pub fn transition_to_english(transition: &str) -> Option<&'static str> {
    TRANSITION_MAP.get(transition.trim()).copied()
}

/// 阿拉伯文角色扩展对应的英文扩展
pub fn extension_to_english(extension: &str) -> Option<&'static str> {
    EXTENSION_MAP.get(extension.trim()).copied()
}

/// 标题页 direction 取值的阿拉伯文写法
pub fn direction_value_ar(value: &str) -> Option<&'static str> {
    DIRECTION_VALUES_AR
        .iter()
        .find(|(ar, _)| *ar == value)
        .map(|(_, dir)| *dir)
}
