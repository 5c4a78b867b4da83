use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::HekayaError;

/// 文本方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    /// 从右到左（阿拉伯文）
    Rtl,
    /// 从左到右（拉丁文）
    Ltr,
    /// 无法判定
    #[default]
    Auto,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Rtl => "rtl",
            TextDirection::Ltr => "ltr",
            TextDirection::Auto => "auto",
        }
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextDirection {
    type Err = HekayaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rtl" => Ok(TextDirection::Rtl),
            "ltr" => Ok(TextDirection::Ltr),
            "auto" => Ok(TextDirection::Auto),
            _ => Err(HekayaError::InvalidDirection(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_direction_names() {
        assert_eq!("RTL".parse::<TextDirection>().unwrap(), TextDirection::Rtl);
        assert_eq!(" ltr ".parse::<TextDirection>().unwrap(), TextDirection::Ltr);
        assert_eq!("auto".parse::<TextDirection>().unwrap(), TextDirection::Auto);
        assert!("sideways".parse::<TextDirection>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&TextDirection::Rtl).unwrap(), "\"rtl\"");
    }
}
