use regex::{Captures, Regex};
use lazy_static::lazy_static;

lazy_static! {
    static ref BOLD_ITALIC: Regex = Regex::new(r"\*{3}(.+?)\*{3}").unwrap();
    static ref BOLD: Regex = Regex::new(r"\*{2}(.+?)\*{2}").unwrap();
    static ref UNDERLINE: Regex = Regex::new(r"_([^_\n]+)_").unwrap();
}

// 单个 * 才是斜体标记，相邻还有 * 的属于粗体/粗斜体
fn is_lone_star(bytes: &[u8], i: usize) -> bool {
    bytes[i] == b'*'
        && (i == 0 || bytes[i - 1] != b'*')
        && bytes.get(i + 1) != Some(&b'*')
}

// 斜体替换，regex crate 不支持前后断言，手动配对单个 *
fn replace_italic(text: &str, wrap: impl Fn(&str) -> String) -> String {
    let bytes = text.as_bytes();
    let stars: Vec<usize> = (0..bytes.len()).filter(|&i| is_lone_star(bytes, i)).collect();

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut k = 0;
    while k + 1 < stars.len() {
        let (open, close) = (stars[k], stars[k + 1]);
        let inner = &text[open + 1..close];
        if inner.contains('\n') {
            k += 1;
            continue;
        }
        out.push_str(&text[last..open]);
        out.push_str(&wrap(inner));
        last = close + 1;
        k += 2;
    }
    out.push_str(&text[last..]);
    out
}

/// 把强调标记转换成HTML标签
///
/// 先处理 ***，再处理 ** 和 *，最后是下划线 _
pub fn render_emphasis(text: &str) -> String {
    let t = BOLD_ITALIC.replace_all(text, |c: &Captures| format!("<b><i>{}</i></b>", &c[1]));
    let t = BOLD.replace_all(&t, |c: &Captures| format!("<b>{}</b>", &c[1]));
    let t = replace_italic(&t, |inner| format!("<i>{}</i>", inner));
    UNDERLINE
        .replace_all(&t, |c: &Captures| format!("<u>{}</u>", &c[1]))
        .to_string()
}

/// 去除强调标记，只保留内部文字
pub fn strip_emphasis(text: &str) -> String {
    let t = BOLD_ITALIC.replace_all(text, "$1");
    let t = BOLD.replace_all(&t, "$1");
    let t = replace_italic(&t, |inner| inner.to_string());
    UNDERLINE.replace_all(&t, "$1").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_each_marker() {
        assert_eq!(render_emphasis("***text***"), "<b><i>text</i></b>");
        assert_eq!(render_emphasis("**text**"), "<b>text</b>");
        assert_eq!(render_emphasis("*text*"), "<i>text</i>");
        assert_eq!(render_emphasis("_text_"), "<u>text</u>");
    }

    #[test]
    fn renders_arabic_and_mixed() {
        assert_eq!(render_emphasis("**نص عريض**"), "<b>نص عريض</b>");
        assert_eq!(render_emphasis("*نص مائل*"), "<i>نص مائل</i>");
        assert_eq!(render_emphasis("**bold** and *italic*"), "<b>bold</b> and <i>italic</i>");
        assert_eq!(render_emphasis("**نص** and *text*"), "<b>نص</b> and <i>text</i>");
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(render_emphasis("plain text"), "plain text");
        assert_eq!(render_emphasis("نص عادي"), "نص عادي");
        assert_eq!(render_emphasis("a * b"), "a * b");
    }

    #[test]
    fn italic_does_not_span_lines() {
        assert_eq!(render_emphasis("*a\nb*"), "*a\nb*");
    }

    #[test]
    fn strips_markers() {
        assert_eq!(strip_emphasis("***text***"), "text");
        assert_eq!(strip_emphasis("**text**"), "text");
        assert_eq!(strip_emphasis("*text*"), "text");
        assert_eq!(strip_emphasis("_text_"), "text");
        assert_eq!(strip_emphasis("**نص عريض**"), "نص عريض");
        assert_eq!(strip_emphasis("plain"), "plain");
    }
}
