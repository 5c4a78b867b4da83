use log::debug;
use crate::models::{TextDirection, TitleEntry};
use crate::parser::rules::{TITLE_CONTINUATION, TITLE_KEY};
use crate::utils::hekaya_constants::{direction_value_ar, normalize_title_key};

/// 标题页解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitlePage {
    pub entries: Vec<TitleEntry>,
    /// 标题页之后的正文
    pub body: String,
    /// direction 条目指定的文档方向
    pub explicit_direction: Option<TextDirection>,
}

// 正在收集的条目
struct PendingEntry {
    key: String,
    key_original: String,
    lines: Vec<String>,
}

impl PendingEntry {
    fn finish(self) -> TitleEntry {
        let value = self.lines.join("\n");
        TitleEntry::new(&self.key, &self.key_original, value.trim())
    }
}

fn flush(pending: &mut Option<PendingEntry>, entries: &mut Vec<TitleEntry>) {
    if let Some(entry) = pending.take() {
        entries.push(entry.finish());
    }
}

/// 解析 direction 条目的值
///
/// 接受 rtl / right-to-left / يمين-لليسار 和 ltr / left-to-right / يسار-لليمين，不区分大小写。
pub fn parse_direction_value(value: &str) -> Option<TextDirection> {
    let value = value.trim().to_lowercase();
    match direction_value_ar(&value).unwrap_or(value.as_str()) {
        "rtl" | "right-to-left" => Some(TextDirection::Rtl),
        "ltr" | "left-to-right" => Some(TextDirection::Ltr),
        _ => None,
    }
}

/// 拆分标题页和正文
///
/// 第一个非空行不是已知的 key: value 时没有标题页，全文都是正文。
pub fn parse_title_page(text: &str) -> TitlePage {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut entries = Vec::new();

    let mut i = 0;
    while i < lines.len() && lines[i].trim().is_empty() {
        i += 1;
    }

    if i >= lines.len() {
        return TitlePage { entries, body: String::new(), explicit_direction: None };
    }

    if !TITLE_KEY.is_match(lines[i]) {
        return TitlePage { entries, body: text.to_string(), explicit_direction: None };
    }

    let mut pending: Option<PendingEntry> = None;
    while i < lines.len() {
        let line = lines[i];

        if line.trim().is_empty() {
            flush(&mut pending, &mut entries);
            i += 1;
            break;
        }

        if let Some(caps) = TITLE_KEY.captures(line) {
            flush(&mut pending, &mut entries);
            let key_original = caps[1].trim();
            let first_value = caps[2].trim();
            pending = Some(PendingEntry {
                key: normalize_title_key(key_original),
                key_original: key_original.to_string(),
                lines: if first_value.is_empty() { Vec::new() } else { vec![first_value.to_string()] },
            });
            i += 1;
            continue;
        }

        // 缩进的延续行
        if TITLE_CONTINUATION.is_match(line) {
            if let Some(entry) = pending.as_mut() {
                entry.lines.push(line.trim().to_string());
                i += 1;
                continue;
            }
        }

        // 其他行：标题页结束，这一行属于正文
        flush(&mut pending, &mut entries);
        break;
    }
    flush(&mut pending, &mut entries);

    let explicit_direction = entries
        .iter()
        .filter(|e| e.key == "direction")
        .find_map(|e| parse_direction_value(&e.value));

    debug!("标题页结束于第 {} 行，共 {} 个条目", i, entries.len());

    TitlePage {
        entries,
        body: lines[i.min(lines.len())..].join("\n"),
        explicit_direction,
    }
}
