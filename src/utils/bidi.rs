use crate::models::TextDirection;

/// 从右到左标记 U+200F
pub const RLM: char = '\u{200F}';

/// 从左到右标记 U+200E
pub const LRM: char = '\u{200E}';

// 阿拉伯文相关的 Unicode 区段
fn is_arabic_char(c: char) -> bool {
    matches!(c,
        '\u{0600}'..='\u{06FF}'
        | '\u{0750}'..='\u{077F}'
        | '\u{08A0}'..='\u{08FF}'
        | '\u{FB50}'..='\u{FDFF}'
        | '\u{FE70}'..='\u{FEFF}')
}

/// 判断文本的主要方向
///
/// 阿拉伯字符多于拉丁字母为 rtl，否则为 ltr（数量相等时归为 ltr）；
/// 两者都没有（纯数字、标点、空串）时为 auto。
pub fn detect_direction(text: &str) -> TextDirection {
    let mut arabic_count = 0usize;
    let mut latin_count = 0usize;
    for c in text.chars() {
        if is_arabic_char(c) {
            arabic_count += 1;
        } else if c.is_ascii_alphabetic() {
            latin_count += 1;
        }
    }

    if arabic_count == 0 && latin_count == 0 {
        return TextDirection::Auto;
    }
    if arabic_count > latin_count {
        TextDirection::Rtl
    } else {
        TextDirection::Ltr
    }
}

/// 文本中是否包含阿拉伯字符
pub fn contains_arabic(text: &str) -> bool {
    text.chars().any(is_arabic_char)
}

/// 在文本开头加上方向标记，auto 时原样返回
pub fn apply_direction_marker(text: &str, direction: TextDirection) -> String {
    match direction {
        TextDirection::Rtl => format!("{}{}", RLM, text),
        TextDirection::Ltr => format!("{}{}", LRM, text),
        TextDirection::Auto => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_arabic_as_rtl() {
        assert_eq!(detect_direction("داخلي - قهوة - نهار"), TextDirection::Rtl);
    }

    #[test]
    fn detects_latin_as_ltr() {
        assert_eq!(detect_direction("INT. HOUSE - DAY"), TextDirection::Ltr);
    }

    #[test]
    fn neither_script_is_auto() {
        assert_eq!(detect_direction(""), TextDirection::Auto);
        assert_eq!(detect_direction("123 - 456!"), TextDirection::Auto);
        assert_eq!(detect_direction("   "), TextDirection::Auto);
    }

    #[test]
    fn majority_wins_and_tie_goes_ltr() {
        assert_eq!(detect_direction("سمير said"), TextDirection::Ltr);
        assert_eq!(detect_direction("سمير قال hi"), TextDirection::Rtl);
        // 两个阿拉伯字母对两个拉丁字母
        assert_eq!(detect_direction("سم ab"), TextDirection::Ltr);
    }

    #[test]
    fn arabic_digits_count_as_arabic() {
        // U+0660..U+0669 在阿拉伯区段内
        assert_eq!(detect_direction("١٢٣"), TextDirection::Rtl);
    }

    #[test]
    fn markers() {
        assert!(contains_arabic("hello سمير"));
        assert!(!contains_arabic("hello"));
        assert_eq!(apply_direction_marker("x", TextDirection::Rtl), "\u{200F}x");
        assert_eq!(apply_direction_marker("x", TextDirection::Ltr), "\u{200E}x");
        assert_eq!(apply_direction_marker("x", TextDirection::Auto), "x");
    }
}
