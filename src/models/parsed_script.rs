use serde::{Deserialize, Serialize};
use crate::models::script_token::{ScriptToken, TokenType};
use crate::models::text_direction::TextDirection;
use crate::models::title_entry::TitleEntry;

/// 解析结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedScript {
    pub title_entries: Vec<TitleEntry>,
    pub tokens: Vec<ScriptToken>,
    /// 登记过的角色名（规范化后，按首次出现顺序）
    pub characters: Vec<String>,
    /// 提取出的 [[注解]]
    pub notes: Vec<String>,
    /// 提取出的 /* 注释 */
    pub boneyards: Vec<String>,
    pub direction: TextDirection,
}

impl ParsedScript {
    pub fn new() -> Self {
        ParsedScript {
            title_entries: Vec::new(),
            tokens: Vec::new(),
            characters: Vec::new(),
            notes: Vec::new(),
            boneyards: Vec::new(),
            direction: TextDirection::Auto,
        }
    }

    /// 按规范化key查找标题页的值
    pub fn title_value(&self, key: &str) -> Option<&str> {
        self.title_entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }

    /// 需要在标题页上显示的条目（direction 只用来决定排版方向）
    pub fn display_title_entries(&self) -> Vec<&TitleEntry> {
        self.title_entries
            .iter()
            .filter(|e| e.key != "direction")
            .collect()
    }

    /// 非空行token的类型序列
    pub fn element_types(&self) -> Vec<TokenType> {
        self.tokens
            .iter()
            .filter(|t| t.token_type != TokenType::Blank)
            .map(|t| t.token_type)
            .collect()
    }

    pub fn count_of(&self, token_type: TokenType) -> usize {
        self.tokens.iter().filter(|t| t.token_type == token_type).count()
    }
}

impl Default for ParsedScript {
    fn default() -> Self {
        Self::new()
    }
}
