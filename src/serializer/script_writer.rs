//! 把 [`ParsedScript`] 写回 Hekaya 纯文本
//!
//! 注解和注释在解析时已经被提取，没有保留位置，因此不会写回原处。

use crate::models::{ParsedScript, ScriptToken, TitleEntry, TokenType};
use crate::parser::rules::TRANSITION_ENGLISH;

const TITLE_INDENT: &str = "   ";

fn write_title_entry(entry: &TitleEntry, out: &mut Vec<String>) {
    if entry.is_multiline() {
        out.push(format!("{}:", entry.key_original));
        for line in entry.value.split('\n') {
            out.push(format!("{}{}", TITLE_INDENT, line));
        }
    } else {
        out.push(format!("{}: {}", entry.key_original, entry.value));
    }
}

fn write_character(token: &ScriptToken) -> String {
    let mut line = token.character.clone().unwrap_or_else(|| token.text.clone());
    if let Some(ext) = &token.extension {
        line.push_str(&format!(" ({})", ext));
    }
    if token.forced {
        line.insert(0, '@');
    }
    if token.is_dual_dialogue {
        line.push_str(" ^");
    }
    line
}

fn write_transition(token: &ScriptToken) -> String {
    if token.forced {
        format!(">{}", token.text)
    } else if TRANSITION_ENGLISH.is_match(&token.text) {
        token.text.clone()
    } else {
        format!("- {} -", token.text)
    }
}

/// 单个token的规范写法
pub fn serialize_token(token: &ScriptToken) -> String {
    match token.token_type {
        TokenType::Blank => String::new(),
        TokenType::SceneHeading => {
            let mut line = if token.forced {
                format!(".{}", token.text)
            } else {
                token.text.clone()
            };
            if let Some(number) = &token.scene_number {
                line.push_str(&format!(" #{}#", number));
            }
            line
        }
        TokenType::Action => {
            if token.forced {
                format!("!{}", token.text)
            } else {
                token.text.clone()
            }
        }
        TokenType::Character => write_character(token),
        TokenType::Dialogue | TokenType::Parenthetical => token.text.clone(),
        TokenType::Transition => write_transition(token),
        TokenType::Centered => format!(">{}<", token.text),
        TokenType::PageBreak => "===".to_string(),
        TokenType::Section => {
            let depth = token.depth.unwrap_or(1);
            format!("{} {}", "#".repeat(depth), token.text)
        }
        TokenType::Synopsis => format!("= {}", token.text),
        TokenType::Lyrics => format!("~{}", token.text),
        TokenType::NoteInline => format!("[[{}]]", token.text),
        TokenType::Boneyard => format!("/* {} */", token.text),
    }
}

/// 序列化整个剧本：标题页、空行、正文
pub fn serialize(script: &ParsedScript) -> String {
    let mut lines: Vec<String> = Vec::new();

    for entry in &script.title_entries {
        write_title_entry(entry, &mut lines);
    }
    if !script.title_entries.is_empty() {
        lines.push(String::new());
    }

    lines.extend(script.tokens.iter().map(serialize_token));
    lines.join("\n")
}
