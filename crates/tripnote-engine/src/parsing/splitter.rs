//! Splits memo text into candidate line-groups for classification.

use crate::parsing::lines;
use crate::rules::RuleSet;

/// Split `text` into trimmed line-groups.
///
/// Blank lines stay inside the current group so paragraphs survive
/// intact, but never start one. Separator lines flush the group and
/// come back as their own one-line group. A header line flushes the
/// group it would otherwise join and starts the next one. Groups that
/// end up empty or all-blank are dropped.
pub fn split_blocks(text: &str, rules: &RuleSet) -> Vec<Vec<String>> {
    let mut groups: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for raw in text.lines() {
        let line = raw.trim();

        if line.is_empty() {
            if !current.is_empty() {
                current.push(String::new());
            }
            continue;
        }

        if lines::is_separator(line) {
            flush(&mut groups, &mut current);
            groups.push(vec![line.to_string()]);
            continue;
        }

        if !current.is_empty() && lines::parse_section_header(line, rules).is_some() {
            flush(&mut groups, &mut current);
        }

        current.push(line.to_string());
    }

    flush(&mut groups, &mut current);
    groups
}

fn flush(groups: &mut Vec<Vec<String>>, current: &mut Vec<String>) {
    while current.last().is_some_and(|line| line.is_empty()) {
        current.pop();
    }
    if !current.is_empty() {
        groups.push(std::mem::take(current));
    }
}
