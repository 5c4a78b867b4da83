use regex::Regex;
use lazy_static::lazy_static;
use log::{debug, trace};
use crate::models::{ParseOptions, ParsedScript, ScriptToken, TextDirection, TokenType};
use crate::parser::character_registry::CharacterRegistry;
use crate::parser::rules::{classify_dialogue_line, classify_line, LineContext};
use crate::parser::title_page::parse_title_page;
use crate::utils::bidi::detect_direction;
use crate::utils::is_blank_line;

lazy_static! {
    static ref BONEYARD: Regex = Regex::new(r"(?s)/\*(.*?)\*/").unwrap();
    static ref NOTE: Regex = Regex::new(r"\[\[([^\]]+)\]\]").unwrap();
}

/// 第一遍：提取出的注释、注解和清理后的文本
struct Extracted {
    text: String,
    notes: Vec<String>,
    boneyards: Vec<String>,
}

// 先去掉 /* */ 再去掉 [[ ]]，最后统一换行符
fn extract_auxiliary(text: &str) -> Extracted {
    let boneyards: Vec<String> = BONEYARD
        .captures_iter(text)
        .map(|c| c[1].trim().to_string())
        .collect();
    let text = BONEYARD.replace_all(text, "");

    let notes: Vec<String> = NOTE
        .captures_iter(&text)
        .map(|c| c[1].to_string())
        .collect();
    let text = NOTE.replace_all(&text, "");

    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    Extracted { text, notes, boneyards }
}

// has_next[i]：第 i 行之后是否还有非空行
fn next_non_blank_lookahead(lines: &[&str]) -> Vec<bool> {
    let mut has_next = vec![false; lines.len()];
    let mut seen = false;
    for (idx, line) in lines.iter().enumerate().rev() {
        has_next[idx] = seen;
        if !is_blank_line(line) {
            seen = true;
        }
    }
    has_next
}

/// Hekaya剧本解析器
///
/// 每次 [`parse`](HekayaParser::parse) 都使用新的角色登记表，解析器本身不保存状态，可以重复使用。
#[derive(Debug, Clone, Default)]
pub struct HekayaParser {
    options: ParseOptions,
}

impl HekayaParser {
    pub fn new(options: ParseOptions) -> Self {
        HekayaParser { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn parse(&self, text: &str) -> ParsedScript {
        let extracted = extract_auxiliary(text);
        let title_page = parse_title_page(&extracted.text);

        // 标题页 direction > 配置的默认方向 > 根据正文检测
        let direction = match (title_page.explicit_direction, self.options.default_direction) {
            (Some(explicit), _) => explicit,
            (None, TextDirection::Auto) => detect_direction(&title_page.body),
            (None, configured) => configured,
        };

        debug!(
            "开始解析: {} 个标题页条目, 文档方向 {}, 语言提示 {}",
            title_page.entries.len(),
            direction,
            self.options.language
        );

        let mut registry = CharacterRegistry::new();
        let tokens = self.tokenize(&title_page.body, &mut registry);

        debug!(
            "解析完成: {} 个token, {} 个角色, {} 个注解, {} 个注释",
            tokens.len(),
            registry.len(),
            extracted.notes.len(),
            extracted.boneyards.len()
        );

        ParsedScript {
            title_entries: title_page.entries,
            tokens,
            characters: registry.names(),
            notes: extracted.notes,
            boneyards: extracted.boneyards,
            direction,
        }
    }

    /// 第二遍：逐行分类
    fn tokenize(&self, body: &str, registry: &mut CharacterRegistry) -> Vec<ScriptToken> {
        let lines: Vec<&str> = body.split('\n').collect();
        let has_next = next_non_blank_lookahead(&lines);
        let mut tokens: Vec<ScriptToken> = Vec::new();

        let mut i = 0;
        while i < lines.len() {
            let line = lines[i].trim();
            let prev_blank = tokens
                .last()
                .map_or(true, |t| t.token_type == TokenType::Blank);

            let token = {
                let ctx = LineContext {
                    prev_blank,
                    has_next_non_blank: has_next[i],
                    registry: &*registry,
                    options: &self.options,
                };
                classify_line(line, &ctx)
            };
            i += 1;

            if token.token_type != TokenType::Character {
                tokens.push(token);
                continue;
            }

            if let Some(name) = &token.character {
                registry.register(name);
            }
            tokens.push(token);

            // 对白块：直到空行或文末
            while i < lines.len() && !is_blank_line(lines[i]) {
                let dialogue = classify_dialogue_line(lines[i].trim());
                trace!("对白块第 {} 行: {}", i + 1, dialogue.token_type);
                tokens.push(dialogue);
                i += 1;
            }
        }

        while tokens.last().map_or(false, |t| t.token_type == TokenType::Blank) {
            tokens.pop();
        }
        tokens
    }
}
