//! Classified block types produced by [`parse_memo`](crate::parse_memo).

use crate::checklist::ChecklistItem;
use crate::rules::{IconRule, SectionHeaderRule};

/// One classified unit of memo content, in source order.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// A horizontal rule: three or more dashes on their own line.
    Separator,
    /// A pipe table, alignment rows dropped.
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Consecutive `>` lines, prefixes stripped.
    Blockquote { lines: Vec<String> },
    /// A recognized section title and its classified body.
    SectionHeader {
        title: String,
        rule: SectionHeaderRule,
        body: SectionBody,
    },
    /// A run of togglable checklist items.
    Checklist { items: Vec<ChecklistItem> },
    /// A single `label: value` line whose label hit an icon rule.
    Label {
        label: String,
        value: String,
        rule: IconRule,
    },
    /// A rule-matched label line plus its continuation lines, verbatim.
    LabelGroup {
        label: String,
        value: String,
        rule: IconRule,
        continuation: Vec<String>,
    },
    /// Label-shaped lines that matched no rule, mixed with plain text.
    SimpleLabel { lines: Vec<LabeledLine> },
    /// A bullet or numbered list, markers stripped.
    List { items: Vec<String> },
    /// Fallback prose. Accepts anything, internal blank lines kept.
    Paragraph { text: String },
}

/// Body of a [`Block::SectionHeader`], blank lines filtered.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody {
    /// Every body line parsed as a checklist item.
    Checklist(Vec<ChecklistItem>),
    /// Mixed body, one entry per line, each classified on its own.
    Lines(Vec<BodyLine>),
}

/// A section-body line, classified independently of its neighbors.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyLine {
    /// A `label: value` line; `rule` is present when the label hit one.
    Label {
        label: String,
        value: String,
        rule: Option<IconRule>,
    },
    /// A list line, marker stripped.
    Item(String),
    /// Anything else, verbatim.
    Text(String),
}

/// One line of a [`Block::SimpleLabel`].
#[derive(Debug, Clone, PartialEq)]
pub enum LabeledLine {
    Label { label: String, value: String },
    Text(String),
}
