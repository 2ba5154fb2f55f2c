//! Line-shape parsers shared by the splitter and the classifier.
//!
//! All parsers are total: they return `Option` and never fail. Callers
//! treat `None` as "try the next shape".

use crate::rules::{IconRule, RuleSet, SectionHeaderRule};
use regex::Regex;
use std::sync::OnceLock;

/// Longest title, in chars, still eligible for keyword-only header
/// detection. Longer lines need an emoji, `[...]` wrapper, or `#`.
pub const SHORT_HEADER_MAX_CHARS: usize = 20;

/// Highest char offset at which a colon still splits `label: value`.
/// Keeps prose with an incidental late colon out of the label path.
pub const LABEL_COLON_WINDOW: usize = 15;

/// A horizontal-rule line: three or more dashes and nothing else.
pub fn is_separator(line: &str) -> bool {
    separator_regex().is_match(line)
}

/// A section header and the rule that recognized it.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderMatch<'a> {
    pub rule: &'a SectionHeaderRule,
    pub title: String,
}

/// Try to read `line` as a section header.
///
/// Four detections run in order, first hit wins: a rule-emoji prefix, a
/// colon-free short line containing a rule keyword, a `[제목]` wrapper,
/// and a 1-3 level `#` heading. Four or more `#` never match.
pub fn parse_section_header<'a>(line: &str, rules: &'a RuleSet) -> Option<HeaderMatch<'a>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    for rule in rules.header_rules() {
        if !rule.emoji.is_empty() && line.starts_with(rule.emoji.as_str()) {
            return Some(HeaderMatch {
                rule,
                title: line.to_string(),
            });
        }
    }

    if !line.contains(':')
        && line.chars().count() <= SHORT_HEADER_MAX_CHARS
        && let Some(rule) = rules.match_header_rule(line)
    {
        return Some(HeaderMatch {
            rule,
            title: line.to_string(),
        });
    }

    if let Some(inner) = line.strip_prefix('[').and_then(|rest| rest.strip_suffix(']'))
        && let Some(rule) = rules.match_header_rule(inner)
    {
        return Some(HeaderMatch {
            rule,
            title: inner.trim().to_string(),
        });
    }

    if let Some(caps) = hash_heading_regex().captures(line)
        && let Some(text) = caps.get(1).map(|m| m.as_str())
        && !text.starts_with('#')
        && let Some(rule) = rules.match_header_rule(text)
    {
        return Some(HeaderMatch {
            rule,
            title: text.trim().to_string(),
        });
    }

    None
}

/// One parsed checklist line, before ids are assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedChecklistItem {
    pub checked: bool,
    pub text: String,
}

/// Try to read `line` as a checklist item.
///
/// Recognizes `- [ ]`/`- [x]` boxes, `1. [ ]` numbered boxes, and bare
/// glyph items (`☐ ☑ ✅ ✓ ✗`, optionally after a `-`/`*` marker).
/// `☐` and `✗` read as unchecked, the rest as checked.
pub fn parse_checklist_item(line: &str) -> Option<ParsedChecklistItem> {
    let line = line.trim();

    for regex in [box_item_regex(), numbered_item_regex()] {
        if let Some(caps) = regex.captures(line)
            && let Some(mark) = caps.get(1)
        {
            return Some(ParsedChecklistItem {
                checked: mark.as_str().eq_ignore_ascii_case("x"),
                text: caps.get(2).map_or("", |m| m.as_str()).trim().to_string(),
            });
        }
    }

    if let Some(caps) = glyph_item_regex().captures(line)
        && let Some(glyph) = caps.get(1)
    {
        return Some(ParsedChecklistItem {
            checked: matches!(glyph.as_str(), "☑" | "✅" | "✓"),
            text: caps.get(2).map_or("", |m| m.as_str()).trim().to_string(),
        });
    }

    None
}

/// A split `label: value` line. `rule` is the first icon rule the label
/// hit, when one exists.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLabel<'a> {
    pub label: String,
    pub value: String,
    pub rule: Option<&'a IconRule>,
}

/// Try to split `line` into a label/value pair.
///
/// A leading `-`/`*` list marker is discarded first. The bold forms
/// `**라벨:** 값` and `**라벨**: 값` are tried before the plain form,
/// where the first colon must sit at char offset 1..=[`LABEL_COLON_WINDOW`].
/// Residual `**` wrappers are stripped from both halves. A line whose
/// value comes out empty is not a label line.
pub fn parse_label_line<'a>(line: &str, rules: &'a RuleSet) -> Option<ParsedLabel<'a>> {
    let trimmed = line.trim();
    let unbulleted = bullet_marker_regex().replace(trimmed, "");
    let line = unbulleted.trim();

    for regex in [bold_colon_inside_regex(), bold_colon_outside_regex()] {
        if let Some(caps) = regex.captures(line)
            && let Some(label) = caps.get(1)
            && let Some(value) = caps.get(2)
        {
            let label = label.as_str().trim().to_string();
            let value = value.as_str().replace("**", "").trim().to_string();
            if value.is_empty() {
                continue;
            }
            let rule = rules.match_icon_rule(&label);
            return Some(ParsedLabel { label, value, rule });
        }
    }

    for (position, (offset, ch)) in line.char_indices().enumerate() {
        if position > LABEL_COLON_WINDOW {
            break;
        }
        if ch != ':' {
            continue;
        }
        if position == 0 {
            return None;
        }
        let label = line[..offset].replace("**", "").trim().to_string();
        let value = line[offset + 1..].replace("**", "").trim().to_string();
        if value.is_empty() {
            return None;
        }
        let rule = rules.match_icon_rule(&label);
        return Some(ParsedLabel { label, value, rule });
    }

    None
}

/// Strip a `- `, `* `, or `1. ` marker, returning the item text.
pub fn strip_list_marker(line: &str) -> Option<String> {
    let caps = list_item_regex().captures(line.trim())?;
    Some(caps.get(1)?.as_str().trim().to_string())
}

fn separator_regex() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| Regex::new(r"^-{3,}$").expect("invalid separator regex"))
}

fn hash_heading_regex() -> &'static Regex {
    static HASH_HEADING: OnceLock<Regex> = OnceLock::new();
    HASH_HEADING.get_or_init(|| Regex::new(r"^#{1,3}\s*(.+)$").expect("invalid heading regex"))
}

fn box_item_regex() -> &'static Regex {
    static BOX_ITEM: OnceLock<Regex> = OnceLock::new();
    BOX_ITEM.get_or_init(|| Regex::new(r"^-\s*\[( |[xX])\]\s*(.*)$").expect("invalid box regex"))
}

fn numbered_item_regex() -> &'static Regex {
    static NUMBERED_ITEM: OnceLock<Regex> = OnceLock::new();
    NUMBERED_ITEM.get_or_init(|| {
        Regex::new(r"^\d+\.\s*\[( |[xX])\]\s*(.*)$").expect("invalid numbered box regex")
    })
}

fn glyph_item_regex() -> &'static Regex {
    static GLYPH_ITEM: OnceLock<Regex> = OnceLock::new();
    GLYPH_ITEM.get_or_init(|| {
        Regex::new(r"^[-*]?\s*([☐☑✅✓✗])\s*(.*)$").expect("invalid glyph regex")
    })
}

fn bullet_marker_regex() -> &'static Regex {
    static BULLET_MARKER: OnceLock<Regex> = OnceLock::new();
    BULLET_MARKER.get_or_init(|| Regex::new(r"^[-*]\s+").expect("invalid bullet regex"))
}

fn bold_colon_inside_regex() -> &'static Regex {
    static BOLD_COLON_INSIDE: OnceLock<Regex> = OnceLock::new();
    BOLD_COLON_INSIDE
        .get_or_init(|| Regex::new(r"^\*\*(.+?):\*\*\s*(.+)$").expect("invalid bold label regex"))
}

fn bold_colon_outside_regex() -> &'static Regex {
    static BOLD_COLON_OUTSIDE: OnceLock<Regex> = OnceLock::new();
    BOLD_COLON_OUTSIDE.get_or_init(|| {
        Regex::new(r"^\*\*(.+?)\*\*\s*:\s*(.+)$").expect("invalid bold label regex")
    })
}

fn list_item_regex() -> &'static Regex {
    static LIST_ITEM: OnceLock<Regex> = OnceLock::new();
    LIST_ITEM.get_or_init(|| {
        Regex::new(r"^(?:[-*]|\d+\.)\s+(.+)$").expect("invalid list item regex")
    })
}
