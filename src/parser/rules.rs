//! 行分类规则表
//!
//! 每种剧本元素对应一条规则，按 [`RULES`] 中的顺序对 trim 之后的行逐条尝试，第一条命中的规则生效。
//! 规则需要的上下文（上一个token是否为空行、后面是否还有非空行、角色登记表、解析配置）
//! 通过 [`LineContext`] 显式传入，因此每条规则都可以单独测试。

use regex::Regex;
use lazy_static::lazy_static;
use log::trace;
use crate::models::{ParseOptions, ScriptToken, TextDirection, TokenType};
use crate::parser::character_registry::CharacterRegistry;
use crate::utils::bidi::detect_direction;
use crate::utils::is_blank_line;
use crate::utils::hekaya_constants::{
    SCENE_HEADING_KEYWORDS_AR,
    SCENE_HEADING_KEYWORDS_EN,
    TITLE_KEYS_AR,
    TITLE_KEYS_EN,
    TRANSITION_KEYWORDS_AR,
};

// 用关键字表拼接正则的分支
fn keyword_alternation<'a>(keywords: impl Iterator<Item = &'a str>) -> String {
    keywords.map(regex::escape).collect::<Vec<_>>().join("|")
}

lazy_static! {
    pub static ref PAGE_BREAK: Regex = Regex::new(r"^={3,}\s*$").unwrap();
    pub static ref ACTION_FORCED: Regex = Regex::new(r"^!(.+)$").unwrap();
    pub static ref LYRICS: Regex = Regex::new(r"^~(.+)$").unwrap();
    pub static ref CENTERED: Regex = Regex::new(r"^\s*>([^<\n]+)<\s*$").unwrap();
    pub static ref SECTION: Regex = Regex::new(r"^(#{1,6})\s+(.+)$").unwrap();
    pub static ref SYNOPSIS: Regex = Regex::new(r"^=\s*(.+)$").unwrap();

    /// 阿拉伯文或英文场景关键字，后面跟 . 或空白
    pub static ref SCENE_HEADING: Regex = {
        let ar = keyword_alternation(SCENE_HEADING_KEYWORDS_AR.iter().map(|(k, _)| *k));
        let en = keyword_alternation(SCENE_HEADING_KEYWORDS_EN.iter().copied());
        Regex::new(&format!(r"(?i)^\s*(?:{}|{})[.\s]", ar, en)).unwrap()
    };

    /// 行尾的 #场景编号#，接受阿拉伯-印度数字和西方数字
    pub static ref SCENE_NUMBER: Regex =
        Regex::new(r"\s*#([٠-٩0-9A-Za-z\x{0600}-\x{06FF}\-.]+)#\s*$").unwrap();

    /// 独占一行的阿拉伯文转场，可以用横线包裹，兼容旧写法的结尾冒号
    pub static ref TRANSITION_ARABIC: Regex = {
        let mut keywords: Vec<&str> = TRANSITION_KEYWORDS_AR.to_vec();
        keywords.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
        let alternation = keyword_alternation(keywords.into_iter());
        Regex::new(&format!(r"^\s*-?\s*({})\s*:?\s*-?\s*$", alternation)).unwrap()
    };

    pub static ref TRANSITION_ENGLISH: Regex = Regex::new(r"^\s*[A-Z ]+TO:\s*$").unwrap();
    pub static ref CHARACTER_FORCED: Regex = Regex::new(r"^\s*@(.+)$").unwrap();
    pub static ref CHARACTER_ENGLISH: Regex =
        Regex::new(r"^([A-Z][A-Z0-9 _\-']+)(\s*\(.+\))?\s*\^?\s*$").unwrap();
    pub static ref DUAL_DIALOGUE: Regex = Regex::new(r"\s*\^\s*$").unwrap();
    pub static ref CHARACTER_EXTENSION: Regex = Regex::new(r"\s*\(([^)]+)\)\s*$").unwrap();
    pub static ref PARENTHETICAL: Regex = Regex::new(r"^\s*\(.*\)\s*$").unwrap();

    /// 标题页 key: value，第1组为key，第2组为value
    pub static ref TITLE_KEY: Regex = {
        let ar = keyword_alternation(TITLE_KEYS_AR.iter().map(|(k, _)| *k));
        let en = keyword_alternation(TITLE_KEYS_EN.iter().map(|(k, _)| *k));
        Regex::new(&format!(r"(?i)^\s*({}|{})\s*:\s*(.*)$", ar, en)).unwrap()
    };

    /// 标题页延续行（缩进）
    pub static ref TITLE_CONTINUATION: Regex = Regex::new(r"^[\t ]+\S").unwrap();

    static ref FORCED_TRANSITION_PREFIX: Regex = Regex::new(r"^\s*>\s*").unwrap();
    static ref TRAILING_COLON: Regex = Regex::new(r"\s*:\s*$").unwrap();
}

/// 分类一行时可见的解析状态
pub struct LineContext<'a> {
    /// 上一个token是否为空行（文档开头也算）
    pub prev_blank: bool,
    /// 后面是否还有非空行
    pub has_next_non_blank: bool,
    pub registry: &'a CharacterRegistry,
    pub options: &'a ParseOptions,
}

pub type RuleFn = fn(&str, &LineContext<'_>) -> Option<ScriptToken>;

/// 一条分类规则
pub struct Rule {
    pub name: &'static str,
    pub apply: RuleFn,
}

/// 按优先级排列的规则表
pub const RULES: &[Rule] = &[
    Rule { name: "blank", apply: match_blank },
    Rule { name: "page_break", apply: match_page_break },
    Rule { name: "action_forced", apply: match_action_forced },
    Rule { name: "lyrics", apply: match_lyrics },
    Rule { name: "centered", apply: match_centered },
    Rule { name: "section", apply: match_section },
    Rule { name: "synopsis", apply: match_synopsis },
    Rule { name: "scene_heading", apply: match_scene_heading },
    Rule { name: "transition_forced", apply: match_transition_forced },
    Rule { name: "transition_arabic", apply: match_transition_arabic },
    Rule { name: "transition_english", apply: match_transition_english },
    Rule { name: "character_forced", apply: match_character_forced },
    Rule { name: "character_english", apply: match_character_english },
    Rule { name: "character_registered", apply: match_character_registered },
    Rule { name: "action", apply: match_action },
];

/// 对一行（已trim）按规则表分类
pub fn classify_line(line: &str, ctx: &LineContext<'_>) -> ScriptToken {
    for rule in RULES {
        if let Some(token) = (rule.apply)(line, ctx) {
            trace!("规则 {} 命中: {:?}", rule.name, line);
            return token;
        }
    }
    action_token(line)
}

fn action_token(text: &str) -> ScriptToken {
    ScriptToken::new(TokenType::Action, text).with_direction(detect_direction(text))
}

fn match_blank(line: &str, _ctx: &LineContext<'_>) -> Option<ScriptToken> {
    is_blank_line(line).then(ScriptToken::blank)
}

fn match_page_break(line: &str, _ctx: &LineContext<'_>) -> Option<ScriptToken> {
    PAGE_BREAK
        .is_match(line)
        .then(|| ScriptToken::new(TokenType::PageBreak, line))
}

fn match_action_forced(line: &str, _ctx: &LineContext<'_>) -> Option<ScriptToken> {
    let caps = ACTION_FORCED.captures(line)?;
    Some(action_token(&caps[1]).forced())
}

fn match_lyrics(line: &str, _ctx: &LineContext<'_>) -> Option<ScriptToken> {
    let caps = LYRICS.captures(line)?;
    let text = &caps[1];
    Some(ScriptToken::new(TokenType::Lyrics, text).with_direction(detect_direction(text)))
}

fn match_centered(line: &str, _ctx: &LineContext<'_>) -> Option<ScriptToken> {
    let caps = CENTERED.captures(line)?;
    let text = caps[1].trim();
    Some(ScriptToken::new(TokenType::Centered, text).with_direction(detect_direction(text)))
}

fn match_section(line: &str, _ctx: &LineContext<'_>) -> Option<ScriptToken> {
    let caps = SECTION.captures(line)?;
    let text = &caps[2];
    let mut token = ScriptToken::new(TokenType::Section, text).with_direction(detect_direction(text));
    token.depth = Some(caps[1].len());
    Some(token)
}

fn match_synopsis(line: &str, _ctx: &LineContext<'_>) -> Option<ScriptToken> {
    // 单个 = ，=== 是分页符
    if line.starts_with("==") {
        return None;
    }
    let caps = SYNOPSIS.captures(line)?;
    let text = &caps[1];
    Some(ScriptToken::new(TokenType::Synopsis, text).with_direction(detect_direction(text)))
}

/// 单个 . 开头是强制场景标题，.. 开头是省略号
fn is_forced_scene_heading(line: &str) -> bool {
    line.starts_with('.') && !line.starts_with("..")
}

fn match_scene_heading(line: &str, _ctx: &LineContext<'_>) -> Option<ScriptToken> {
    let forced = is_forced_scene_heading(line);
    if !forced && !SCENE_HEADING.is_match(line) {
        return None;
    }

    let mut text = if forced { line[1..].trim() } else { line }.to_string();

    let mut scene_number = None;
    if let Some(caps) = SCENE_NUMBER.captures(&text) {
        scene_number = Some(caps[1].to_string());
        let stripped = SCENE_NUMBER.replace(&text, "").trim().to_string();
        text = stripped;
    }

    let mut token = ScriptToken::new(TokenType::SceneHeading, &text).with_direction(detect_direction(&text));
    token.forced = forced;
    token.scene_number = scene_number;
    Some(token)
}

fn match_transition_forced(line: &str, _ctx: &LineContext<'_>) -> Option<ScriptToken> {
    // >文字< 是居中文本，不是转场
    if !line.starts_with('>') || line.ends_with('<') || line.chars().count() < 2 {
        return None;
    }
    let text = FORCED_TRANSITION_PREFIX.replace(line, "");
    let text = TRAILING_COLON.replace(&text, "");
    let text = text.trim();
    Some(ScriptToken::new(TokenType::Transition, text).with_direction(detect_direction(text)).forced())
}

fn match_transition_arabic(line: &str, ctx: &LineContext<'_>) -> Option<ScriptToken> {
    if !ctx.prev_blank {
        return None;
    }
    let caps = TRANSITION_ARABIC.captures(line)?;
    Some(ScriptToken::new(TokenType::Transition, caps[1].trim()).with_direction(TextDirection::Rtl))
}

fn match_transition_english(line: &str, _ctx: &LineContext<'_>) -> Option<ScriptToken> {
    TRANSITION_ENGLISH
        .is_match(line)
        .then(|| ScriptToken::new(TokenType::Transition, line).with_direction(TextDirection::Ltr))
}

fn match_character_forced(line: &str, _ctx: &LineContext<'_>) -> Option<ScriptToken> {
    let caps = CHARACTER_FORCED.captures(line)?;
    Some(parse_character_line(caps[1].trim(), true))
}

fn match_character_english(line: &str, ctx: &LineContext<'_>) -> Option<ScriptToken> {
    if ctx.options.strict_mode || !ctx.prev_blank || !CHARACTER_ENGLISH.is_match(line) {
        return None;
    }
    Some(parse_character_line(line, false))
}

fn match_character_registered(line: &str, ctx: &LineContext<'_>) -> Option<ScriptToken> {
    let options = ctx.options;
    if !options.enable_character_registry || options.strict_mode || !ctx.prev_blank {
        return None;
    }
    ctx.registry
        .is_character_line(line, ctx.has_next_non_blank)
        .then(|| parse_character_line(line, false))
}

fn match_action(line: &str, _ctx: &LineContext<'_>) -> Option<ScriptToken> {
    Some(action_token(line))
}

/// 解析角色行：提取角色名、扩展和双对话标记
///
/// 先去掉 ^ 再提取括号扩展。
pub fn parse_character_line(text: &str, forced: bool) -> ScriptToken {
    let mut name = text.to_string();
    let mut is_dual_dialogue = false;

    if DUAL_DIALOGUE.is_match(&name) {
        is_dual_dialogue = true;
        let stripped = DUAL_DIALOGUE.replace(&name, "").trim().to_string();
        name = stripped;
    }

    let mut extension = None;
    if let Some(caps) = CHARACTER_EXTENSION.captures(&name) {
        extension = Some(caps[1].trim().to_string());
        let stripped = CHARACTER_EXTENSION.replace(&name, "").trim().to_string();
        name = stripped;
    }

    let display = DUAL_DIALOGUE.replace(text, "");
    let mut token = ScriptToken::new(TokenType::Character, display.trim())
        .with_direction(detect_direction(&name));
    token.forced = forced;
    token.extension = extension;
    token.is_dual_dialogue = is_dual_dialogue;
    token.character = Some(name);
    token
}

/// 对白块中的一行：括号包裹的是 parenthetical，其余都是 dialogue
pub fn classify_dialogue_line(line: &str) -> ScriptToken {
    let token_type = if PARENTHETICAL.is_match(line) {
        TokenType::Parenthetical
    } else {
        TokenType::Dialogue
    };
    ScriptToken::new(token_type, line).with_direction(detect_direction(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        registry: CharacterRegistry,
        options: ParseOptions,
    }

    impl Fixture {
        fn new() -> Self {
            Fixture { registry: CharacterRegistry::new(), options: ParseOptions::default() }
        }

        fn ctx(&self, prev_blank: bool, has_next_non_blank: bool) -> LineContext<'_> {
            LineContext {
                prev_blank,
                has_next_non_blank,
                registry: &self.registry,
                options: &self.options,
            }
        }
    }

    fn kind(line: &str, ctx: &LineContext<'_>) -> TokenType {
        classify_line(line, ctx).token_type
    }

    #[test]
    fn rule_table_order_is_fixed() {
        let names: Vec<&str> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(names.first(), Some(&"blank"));
        assert_eq!(names.last(), Some(&"action"));
        let pos = |n: &str| names.iter().position(|x| *x == n).unwrap();
        assert!(pos("page_break") < pos("synopsis"));
        assert!(pos("centered") < pos("transition_forced"));
        assert!(pos("scene_heading") < pos("character_english"));
        assert!(pos("character_forced") < pos("character_registered"));
    }

    #[test]
    fn page_break_beats_synopsis() {
        let f = Fixture::new();
        assert_eq!(kind("===", &f.ctx(true, false)), TokenType::PageBreak);
        assert_eq!(kind("=====", &f.ctx(true, false)), TokenType::PageBreak);
        assert_eq!(kind("= ملخص", &f.ctx(true, false)), TokenType::Synopsis);
        assert_eq!(kind("==x", &f.ctx(true, false)), TokenType::Action);
    }

    #[test]
    fn forced_action_and_lyrics() {
        let f = Fixture::new();
        let token = classify_line("!سمير يمشي.", &f.ctx(true, false));
        assert_eq!(token.token_type, TokenType::Action);
        assert_eq!(token.text, "سمير يمشي.");
        assert!(token.forced);

        let token = classify_line("~يا ليل يا عين", &f.ctx(true, false));
        assert_eq!(token.token_type, TokenType::Lyrics);
        assert_eq!(token.text, "يا ليل يا عين");
    }

    #[test]
    fn centered_versus_forced_transition() {
        let f = Fixture::new();
        let token = classify_line(">النهاية<", &f.ctx(true, false));
        assert_eq!(token.token_type, TokenType::Centered);
        assert_eq!(token.text, "النهاية");

        let token = classify_line(">قطع إلى:", &f.ctx(false, false));
        assert_eq!(token.token_type, TokenType::Transition);
        assert_eq!(token.text, "قطع إلى");
        assert!(token.forced);

        assert_eq!(kind(">", &f.ctx(true, false)), TokenType::Action);
    }

    #[test]
    fn sections_carry_depth() {
        let f = Fixture::new();
        let token = classify_line("## المشهد الأول", &f.ctx(true, false));
        assert_eq!(token.token_type, TokenType::Section);
        assert_eq!(token.depth, Some(2));
        assert_eq!(token.text, "المشهد الأول");
        assert_eq!(kind("####### سبعة", &f.ctx(true, false)), TokenType::Action);
    }

    #[test]
    fn scene_headings_in_both_scripts() {
        let f = Fixture::new();
        for line in [
            "داخلي - قهوة بلدي - نهار",
            "خارجي. شارع - ليل",
            "داخلي/خارجي - سيارة - غروب",
            "د/خ - بيت - فجر",
            "INT. COFFEE SHOP - DAY",
            "ext. park - night",
            "INT./EXT. CAR - DAY",
            "I/E HOUSE - DAY",
        ] {
            assert_eq!(kind(line, &f.ctx(true, false)), TokenType::SceneHeading, "{}", line);
        }
        assert_eq!(kind("داخليا البيت", &f.ctx(true, false)), TokenType::Action);
        assert_eq!(kind("Interior design", &f.ctx(true, false)), TokenType::Action);
    }

    #[test]
    fn forced_scene_heading_but_not_ellipsis() {
        let f = Fixture::new();
        let token = classify_line(".المشهد الخاص", &f.ctx(true, false));
        assert_eq!(token.token_type, TokenType::SceneHeading);
        assert!(token.forced);
        assert_eq!(token.text, "المشهد الخاص");

        assert_eq!(kind("...وبعدين", &f.ctx(true, false)), TokenType::Action);
    }

    #[test]
    fn scene_number_is_extracted() {
        let f = Fixture::new();
        let token = classify_line("داخلي - قهوة - نهار #12A#", &f.ctx(true, false));
        assert_eq!(token.text, "داخلي - قهوة - نهار");
        assert_eq!(token.scene_number.as_deref(), Some("12A"));

        let token = classify_line("INT. HOUSE - DAY #١٢#", &f.ctx(true, false));
        assert_eq!(token.text, "INT. HOUSE - DAY");
        assert_eq!(token.scene_number.as_deref(), Some("١٢"));

        let token = classify_line(".FLASHBACK #3-B#", &f.ctx(true, false));
        assert_eq!(token.text, "FLASHBACK");
        assert_eq!(token.scene_number.as_deref(), Some("3-B"));
    }

    #[test]
    fn arabic_transition_needs_preceding_blank() {
        let f = Fixture::new();
        for (line, text) in [
            ("قطع", "قطع"),
            ("- قطع -", "قطع"),
            ("- اختفاء تدريجي -", "اختفاء تدريجي"),
            ("قطع إلى:", "قطع إلى"),
            ("تلاشي إلى أسود", "تلاشي إلى أسود"),
        ] {
            let token = classify_line(line, &f.ctx(true, false));
            assert_eq!(token.token_type, TokenType::Transition, "{}", line);
            assert_eq!(token.text, text);
            assert_eq!(token.direction, Some(TextDirection::Rtl));
            assert!(!token.forced);
        }
        assert_eq!(kind("قطع", &f.ctx(false, false)), TokenType::Action);
        assert_eq!(kind("قطع الخبز", &f.ctx(true, false)), TokenType::Action);
    }

    #[test]
    fn english_transition() {
        let f = Fixture::new();
        let token = classify_line("CUT TO:", &f.ctx(false, false));
        assert_eq!(token.token_type, TokenType::Transition);
        assert_eq!(token.text, "CUT TO:");
        assert_eq!(token.direction, Some(TextDirection::Ltr));
        assert_eq!(kind("Cut to:", &f.ctx(true, false)), TokenType::Action);
    }

    #[test]
    fn forced_character_always_wins() {
        let f = Fixture::new();
        let token = classify_line("@نادية (صوت خارجي) ^", &f.ctx(false, false));
        assert_eq!(token.token_type, TokenType::Character);
        assert!(token.forced);
        assert!(token.is_dual_dialogue);
        assert_eq!(token.character.as_deref(), Some("نادية"));
        assert_eq!(token.extension.as_deref(), Some("صوت خارجي"));
        assert_eq!(token.text, "نادية (صوت خارجي)");
        assert_eq!(token.direction, Some(TextDirection::Rtl));
    }

    #[test]
    fn uppercase_character_needs_blank_and_non_strict() {
        let mut f = Fixture::new();
        let token = classify_line("JOHN (V.O.)", &f.ctx(true, true));
        assert_eq!(token.token_type, TokenType::Character);
        assert_eq!(token.character.as_deref(), Some("JOHN"));
        assert_eq!(token.extension.as_deref(), Some("V.O."));
        assert!(!token.forced);

        assert_eq!(kind("JOHN", &f.ctx(false, true)), TokenType::Action);
        f.options.strict_mode = true;
        assert_eq!(kind("JOHN", &f.ctx(true, true)), TokenType::Action);
    }

    #[test]
    fn registered_character_needs_all_conditions() {
        let mut f = Fixture::new();
        f.registry.register("سمير");
        assert_eq!(kind("سمير", &f.ctx(true, true)), TokenType::Character);
        assert_eq!(kind("سَمير", &f.ctx(true, true)), TokenType::Character);
        assert_eq!(kind("سمير", &f.ctx(false, true)), TokenType::Action);
        assert_eq!(kind("سمير", &f.ctx(true, false)), TokenType::Action);

        f.options.enable_character_registry = false;
        assert_eq!(kind("سمير", &f.ctx(true, true)), TokenType::Action);
        f.options.enable_character_registry = true;
        f.options.strict_mode = true;
        assert_eq!(kind("سمير", &f.ctx(true, true)), TokenType::Action);
        assert_eq!(kind("@سمير", &f.ctx(true, true)), TokenType::Character);
    }

    #[test]
    fn dialogue_lines() {
        assert_eq!(classify_dialogue_line("(بهدوء)").token_type, TokenType::Parenthetical);
        assert_eq!(classify_dialogue_line("(quietly)").token_type, TokenType::Parenthetical);
        assert_eq!(classify_dialogue_line("قهوة سادة.").token_type, TokenType::Dialogue);
        assert_eq!(classify_dialogue_line("(بهدوء) قهوة").token_type, TokenType::Dialogue);
    }

    #[test]
    fn title_key_pattern() {
        let caps = TITLE_KEY.captures("المؤلف: سمير").unwrap();
        assert_eq!(&caps[1], "المؤلف");
        assert_eq!(&caps[2], "سمير");
        let caps = TITLE_KEY.captures("Authors: A and B").unwrap();
        assert_eq!(&caps[1], "Authors");
        assert!(TITLE_KEY.captures("Producer: X").is_none());
        assert!(TITLE_CONTINUATION.is_match("   سطر"));
        assert!(!TITLE_CONTINUATION.is_match("سطر"));
    }
}
