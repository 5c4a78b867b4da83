//! 对外API
//!
//! 给宿主应用（编辑器、命令行工具等）调用的接口，配置用字符串传入，结果用JSON返回

use std::fmt;
use serde::Serialize;
use crate::error::{HekayaError, HekayaResult};
use crate::models::{Language, ParseOptions, ParsedScript, TextDirection, TokenType};
use crate::parser::HekayaParser;
use crate::serializer::serialize;

/// 简化的配置结构，方向和语言用字符串表示
#[derive(Debug, Clone)]
pub struct SimpleConf {
    pub default_direction: String,
    pub enable_character_registry: bool,
    pub strict_mode: bool,
    pub language: String,
}

impl Default for SimpleConf {
    fn default() -> Self {
        Self {
            default_direction: "auto".to_string(),
            enable_character_registry: true,
            strict_mode: false,
            language: "auto".to_string(),
        }
    }
}

impl TryFrom<SimpleConf> for ParseOptions {
    type Error = HekayaError;

    fn try_from(simple: SimpleConf) -> Result<Self, Self::Error> {
        Ok(ParseOptions {
            default_direction: simple.default_direction.parse::<TextDirection>()?,
            enable_character_registry: simple.enable_character_registry,
            strict_mode: simple.strict_mode,
            language: simple.language.parse::<Language>()?,
        })
    }
}

fn parse_with(text: &str, config: Option<SimpleConf>) -> HekayaResult<ParsedScript> {
    let options = ParseOptions::try_from(config.unwrap_or_default())?;
    Ok(HekayaParser::new(options).parse(text))
}

/// 解析Hekaya文本，返回JSON格式的 [`ParsedScript`]
pub fn parse_hekaya_text(text: String, config: Option<SimpleConf>) -> HekayaResult<String> {
    let script = parse_with(&text, config)?;
    Ok(serde_json::to_string(&script)?)
}

/// 解析后再写回规范的Hekaya文本（注解和注释不保留）
pub fn convert_text(text: String, config: Option<SimpleConf>) -> HekayaResult<String> {
    let script = parse_with(&text, config)?;
    Ok(serialize(&script))
}

/// 剧本检查发现的问题
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    NoTitlePage,
    MissingTitle,
    EmptyBody,
    /// 对白前面（忽略空行）不是角色、括号说明或对白
    OrphanDialogue { token_index: usize },
    NoSceneHeadings,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::NoTitlePage => write!(f, "没有标题页"),
            ValidationIssue::MissingTitle => write!(f, "标题页缺少标题 (العنوان/Title)"),
            ValidationIssue::EmptyBody => write!(f, "正文为空"),
            ValidationIssue::OrphanDialogue { token_index } => {
                write!(f, "第 {} 个元素: 对白没有对应的角色", token_index + 1)
            }
            ValidationIssue::NoSceneHeadings => write!(f, "没有场景标题"),
        }
    }
}

/// 检查结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
    /// 非空行元素数
    pub element_count: usize,
    pub scene_count: usize,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// 检查解析结果
pub fn validate_parsed(script: &ParsedScript) -> ValidationReport {
    let mut issues = Vec::new();

    if script.title_entries.is_empty() {
        issues.push(ValidationIssue::NoTitlePage);
    } else if script.title_value("title").is_none() {
        issues.push(ValidationIssue::MissingTitle);
    }

    let element_count = script.element_types().len();
    if element_count == 0 {
        issues.push(ValidationIssue::EmptyBody);
    }

    for (index, token) in script.tokens.iter().enumerate() {
        if token.token_type != TokenType::Dialogue {
            continue;
        }
        let prev = script.tokens[..index]
            .iter()
            .rev()
            .find(|t| t.token_type != TokenType::Blank);
        let attached = prev.map_or(false, |t| {
            t.is_type(&[TokenType::Character, TokenType::Parenthetical, TokenType::Dialogue])
        });
        if !attached {
            issues.push(ValidationIssue::OrphanDialogue { token_index: index });
        }
    }

    let scene_count = script.count_of(TokenType::SceneHeading);
    if scene_count == 0 && element_count > 0 {
        issues.push(ValidationIssue::NoSceneHeadings);
    }

    ValidationReport { issues, element_count, scene_count }
}

/// 解析并检查Hekaya文本
pub fn validate_script(text: &str, options: &ParseOptions) -> ValidationReport {
    let script = HekayaParser::new(options.clone()).parse(text);
    validate_parsed(&script)
}
