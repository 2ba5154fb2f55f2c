//! The memo parsing pipeline: split lines into groups, classify each
//! group into a [`Block`], never fail.

pub mod classify;
pub mod inline;
pub mod lines;
pub mod splitter;
pub mod types;

pub use inline::{InlineSpan, scan_inline};
pub use lines::{
    HeaderMatch, LABEL_COLON_WINDOW, ParsedChecklistItem, ParsedLabel, SHORT_HEADER_MAX_CHARS,
    is_separator, parse_checklist_item, parse_label_line, parse_section_header, strip_list_marker,
};
pub use types::{Block, BodyLine, LabeledLine, SectionBody};

use crate::rules::RuleSet;

/// Parse a whole memo into classified blocks.
///
/// Pure and synchronous; the same text and rules always produce the
/// same blocks. Empty input produces no blocks.
pub fn parse_memo(text: &str, rules: &RuleSet) -> Vec<Block> {
    splitter::split_blocks(text, rules)
        .iter()
        .enumerate()
        .map(|(group_index, group)| classify::classify_group(group, group_index, rules))
        .collect()
}
