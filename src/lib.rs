pub mod models;
pub mod utils;
pub mod parser;
pub mod serializer;
pub mod api;
pub mod error;

pub use models::{
    ScriptToken,
    TokenType,
    TitleEntry,
    TextDirection,
    ParsedScript,
    ParseOptions,
    Language
};

pub use parser::{
    HekayaParser,
    CharacterRegistry,
    render_emphasis,
    strip_emphasis
};

pub use utils::{
    detect_direction,
    contains_arabic,
    apply_direction_marker
};

pub use error::{HekayaError, HekayaResult};

pub use api::{
    SimpleConf,
    ValidationIssue,
    ValidationReport,
    parse_hekaya_text,
    convert_text,
    validate_script
};

/// 解析Hekaya格式文本
///
/// # Arguments
///
/// * `script` - Hekaya（或Fountain）格式的剧本文本
/// * `options` - 解析配置
///
/// # Returns
///
/// 解析结果对象，解析不会失败，无法识别的行都作为动作
pub fn parse(script: &str, options: &ParseOptions) -> ParsedScript {
    HekayaParser::new(options.clone()).parse(script)
}

/// 把解析结果写回Hekaya文本
pub fn serialize(script: &ParsedScript) -> String {
    serializer::serialize(script)
}
