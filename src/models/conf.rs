use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::{HekayaError, HekayaResult};
use crate::models::text_direction::TextDirection;

/// 语言提示（目前仅作参考，不影响关键字检测）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ar,
    En,
    #[default]
    Auto,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Language::Ar => "ar",
            Language::En => "en",
            Language::Auto => "auto",
        };
        f.write_str(s)
    }
}

impl FromStr for Language {
    type Err = HekayaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ar" => Ok(Language::Ar),
            "en" => Ok(Language::En),
            "auto" => Ok(Language::Auto),
            _ => Err(HekayaError::InvalidLanguage(s.to_string())),
        }
    }
}

/// 解析配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// 默认文本方向
    pub default_direction: TextDirection,
    /// 是否根据已登记角色名自动识别角色行
    pub enable_character_registry: bool,
    /// 严格模式：所有角色行必须使用 @ 标记
    pub strict_mode: bool,
    /// 语言提示
    pub language: Language,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            default_direction: TextDirection::Auto,
            enable_character_registry: true,
            strict_mode: false,
            language: Language::Auto,
        }
    }
}

impl ParseOptions {
    /// 从JSON读取配置，缺省字段使用默认值
    pub fn from_json(json: &str) -> HekayaResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn strict() -> Self {
        ParseOptions {
            strict_mode: true,
            ..ParseOptions::default()
        }
    }
}
