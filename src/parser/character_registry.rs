//! 角色登记表
//!
//! 阿拉伯文没有大小写，Fountain 的全大写角色识别对它无效。
//! 角色第一次出场用 `@` 标记，之后独占一行且后面紧跟对白的同名行会被自动识别为角色。

use std::collections::HashSet;
use regex::Regex;
use lazy_static::lazy_static;

lazy_static! {
    static ref DUAL_MARKER: Regex = Regex::new(r"\s*\^\s*$").unwrap();
    static ref EXTENSION: Regex = Regex::new(r"\s*\([^)]*\)\s*$").unwrap();
}

// 阿拉伯文变音符号 (tashkeel)
fn is_diacritic(c: char) -> bool {
    matches!(c, '\u{0610}'..='\u{061A}' | '\u{064B}'..='\u{065F}' | '\u{0670}')
}

// أ إ آ ٱ → ا
fn fold_alef(c: char) -> char {
    match c {
        'أ' | 'إ' | 'آ' | 'ٱ' => 'ا',
        _ => c,
    }
}

fn normalize_once(name: &str) -> String {
    let t = DUAL_MARKER.replace(name.trim(), "");
    let t = EXTENSION.replace(&t, "");
    t.trim()
        .chars()
        .filter(|c| !is_diacritic(*c))
        .map(fold_alef)
        .collect()
}

/// 角色名规范化
///
/// 顺序：trim → 去掉结尾的 ^ → 去掉结尾的括号扩展 → trim → 去掉变音符号 → 统一 alef。
/// 重复执行直到结果不再变化，保证幂等。
pub fn normalize_name(name: &str) -> String {
    let mut current = normalize_once(name);
    loop {
        let next = normalize_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// 单次解析内有效的角色登记表
#[derive(Debug, Clone, Default)]
pub struct CharacterRegistry {
    known_names: HashSet<String>,
    order: Vec<String>,
}

impl CharacterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记角色名（保存规范化后的形式）
    pub fn register(&mut self, name: &str) {
        let normalized = self.normalize(name);
        if normalized.is_empty() {
            return;
        }
        if self.known_names.insert(normalized.clone()) {
            self.order.push(normalized);
        }
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.known_names.contains(&self.normalize(name))
    }

    /// 独占一行的文本是否为已登记角色
    ///
    /// 后面必须有非空行（对白），否则一律不算。
    pub fn is_character_line(&self, line: &str, next_line_exists: bool) -> bool {
        if !next_line_exists {
            return false;
        }
        let extracted = self.extract_name(line);
        !extracted.is_empty() && self.known_names.contains(&extracted)
    }

    /// 从一行中提取角色名，去掉 @ 前缀和扩展
    pub fn extract_name(&self, line: &str) -> String {
        let line = line.trim();
        self.normalize(line.strip_prefix('@').unwrap_or(line))
    }

    pub fn normalize(&self, name: &str) -> String {
        normalize_name(name)
    }

    /// 所有登记过的角色，按首次登记顺序
    pub fn names(&self) -> Vec<String> {
        self.order.clone()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.known_names.clear();
        self.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_and_finds_names() {
        let mut registry = CharacterRegistry::new();
        registry.register("سمير");
        assert!(registry.is_known("سمير"));
        assert!(!registry.is_known("نادية"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn ignores_empty_names() {
        let mut registry = CharacterRegistry::new();
        registry.register("   ");
        registry.register("(V.O.)");
        assert!(registry.is_empty());
    }

    #[test]
    fn registering_twice_keeps_size() {
        let mut registry = CharacterRegistry::new();
        registry.register("سمير");
        registry.register("  سَمِير ");
        registry.register("@سمير".trim_start_matches('@'));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn strips_extension_and_dual_marker() {
        let registry = CharacterRegistry::new();
        assert_eq!(registry.normalize("نادية (صوت خارجي)"), "نادية");
        assert_eq!(registry.normalize("نادية ^"), "نادية");
        assert_eq!(registry.normalize("JOHN (V.O.) ^"), "JOHN");
    }

    #[test]
    fn strips_diacritics_and_folds_alef() {
        let registry = CharacterRegistry::new();
        assert_eq!(registry.normalize("سَمِيرٌ"), "سمير");
        assert_eq!(registry.normalize("أحمد"), "احمد");
        assert_eq!(registry.normalize("إبراهيم"), "ابراهيم");
        assert_eq!(registry.normalize("آمال"), "امال");
        assert_eq!(registry.normalize("ٱسلام"), "اسلام");
    }

    #[test]
    fn normalization_is_idempotent() {
        let registry = CharacterRegistry::new();
        let samples = [
            "  أَحْمَد (ص.خ) ^ ",
            "A ^ ^",
            "A (x) (y)",
            "A ^ (x)",
            "نادية (تابع)\u{064B}",
            "JOHN",
            "",
        ];
        for s in samples {
            let once = registry.normalize(s);
            assert_eq!(registry.normalize(&once), once, "输入: {:?}", s);
        }
    }

    #[test]
    fn character_line_needs_following_line() {
        let mut registry = CharacterRegistry::new();
        registry.register("أحمد");
        assert!(registry.is_character_line("احمد", true));
        assert!(registry.is_character_line("@أحمد (تابع)", true));
        assert!(!registry.is_character_line("احمد", false));
        assert!(!registry.is_character_line("سمير", true));
    }

    #[test]
    fn names_keep_first_seen_order() {
        let mut registry = CharacterRegistry::new();
        registry.register("نادية");
        registry.register("سمير");
        registry.register("نادية");
        assert_eq!(registry.names(), vec!["نادية".to_string(), "سمير".to_string()]);
        registry.clear();
        assert!(registry.is_empty());
    }
}
