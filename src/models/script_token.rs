use std::fmt;
use serde::{Deserialize, Serialize};
use crate::models::text_direction::TextDirection;
use crate::parser::text_processor::strip_emphasis;

/// 剧本元素类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    Blank,
    SceneHeading,
    Action,
    Character,
    Dialogue,
    Parenthetical,
    Transition,
    Centered,
    PageBreak,
    Section,
    Synopsis,
    NoteInline,
    Boneyard,
    Lyrics,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Blank => "blank",
            TokenType::SceneHeading => "scene_heading",
            TokenType::Action => "action",
            TokenType::Character => "character",
            TokenType::Dialogue => "dialogue",
            TokenType::Parenthetical => "parenthetical",
            TokenType::Transition => "transition",
            TokenType::Centered => "centered",
            TokenType::PageBreak => "page_break",
            TokenType::Section => "section",
            TokenType::Synopsis => "synopsis",
            TokenType::NoteInline => "note_inline",
            TokenType::Boneyard => "boneyard",
            TokenType::Lyrics => "lyrics",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptToken {
    pub token_type: TokenType,              // token类型
    pub text: String,                       // 显示文本
    pub direction: Option<TextDirection>,   // 本元素自身的文本方向
    pub forced: bool,                       // 是否由强制符号(@ . ! > ~)指定
    pub depth: Option<usize>,               // 章节层级 1-6
    pub scene_number: Option<String>,       // 场景编号
    pub character: Option<String>,          // 角色名
    pub extension: Option<String>,          // 角色扩展，如 (V.O.) 或 (صوت خارجي)
    pub is_dual_dialogue: bool,             // 是否为双对话的第二个角色
}

impl ScriptToken {
    pub fn new(token_type: TokenType, text: &str) -> Self {
        ScriptToken {
            token_type,
            text: text.to_string(),
            direction: None,
            forced: false,
            depth: None,
            scene_number: None,
            character: None,
            extension: None,
            is_dual_dialogue: false,
        }
    }

    // 空行token
    pub fn blank() -> Self {
        Self::new(TokenType::Blank, "")
    }

    pub fn with_direction(mut self, direction: TextDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn forced(mut self) -> Self {
        self.forced = true;
        self
    }

    // 检查token类型是否匹配
    pub fn is_type(&self, types: &[TokenType]) -> bool {
        types.contains(&self.token_type)
    }

    /// 去除强调标记后的纯文本
    pub fn plain_text(&self) -> String {
        strip_emphasis(&self.text).trim().to_string()
    }
}
