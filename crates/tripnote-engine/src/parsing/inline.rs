//! Inline emphasis scanner for rendered text.
//!
//! Only `**bold**` and `*italic*` are recognized, non-greedy, with bold
//! winning at any position where both could start. No nesting.

use regex::Regex;
use std::sync::OnceLock;

/// One run of styled text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan {
    Text(String),
    Bold(String),
    Italic(String),
}

/// Split `text` into plain, bold, and italic spans, in order.
///
/// Text without a `*` comes back as a single plain span. Unpaired
/// markers stay in the plain text untouched.
pub fn scan_inline(text: &str) -> Vec<InlineSpan> {
    if !text.contains('*') {
        return vec![InlineSpan::Text(text.to_string())];
    }

    let mut spans = Vec::new();
    let mut cursor = 0;
    for caps in emphasis_regex().captures_iter(text) {
        let (start, end, span) = if let Some(bold) = caps.get(1) {
            (
                bold.start() - 2,
                bold.end() + 2,
                InlineSpan::Bold(bold.as_str().to_string()),
            )
        } else if let Some(italic) = caps.get(2) {
            (
                italic.start() - 1,
                italic.end() + 1,
                InlineSpan::Italic(italic.as_str().to_string()),
            )
        } else {
            continue;
        };
        if start > cursor {
            spans.push(InlineSpan::Text(text[cursor..start].to_string()));
        }
        spans.push(span);
        cursor = end;
    }
    if cursor < text.len() {
        spans.push(InlineSpan::Text(text[cursor..].to_string()));
    }
    spans
}

fn emphasis_regex() -> &'static Regex {
    static EMPHASIS: OnceLock<Regex> = OnceLock::new();
    EMPHASIS.get_or_init(|| {
        Regex::new(r"\*\*(.+?)\*\*|\*(.+?)\*").expect("invalid emphasis regex")
    })
}
