use serde::{Deserialize, Serialize};

/// 标题页条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleEntry {
    pub key: String,          // 规范化后的英文key，如 "author"
    pub key_original: String, // 原文中的key（阿拉伯文或英文）
    pub value: String,        // 多行值以 '\n' 连接
}

impl TitleEntry {
    pub fn new(key: &str, key_original: &str, value: &str) -> Self {
        TitleEntry {
            key: key.to_string(),
            key_original: key_original.to_string(),
            value: value.to_string(),
        }
    }

    pub fn is_multiline(&self) -> bool {
        self.value.contains('\n')
    }
}
