use thiserror::Error;

/// Hekaya错误类型
///
/// 解析和序列化本身不会失败，只有配置边界上会出错。
#[derive(Error, Debug)]
pub enum HekayaError {
    #[error("无效的文本方向: {0}")]
    InvalidDirection(String),

    #[error("无效的语言提示: {0}")]
    InvalidLanguage(String),

    #[error("JSON错误: {0}")]
    Json(#[from] serde_json::Error),
}

/// Hekaya结果
pub type HekayaResult<T> = Result<T, HekayaError>;
