//! Classifies one line-group into a [`Block`].
//!
//! Checks run in a fixed priority order and the first hit wins. The
//! chain ends in Paragraph, which accepts anything, so classification
//! is total.

use crate::checklist::ChecklistItem;
use crate::parsing::lines::{self, HeaderMatch, ParsedChecklistItem};
use crate::parsing::types::{Block, BodyLine, LabeledLine, SectionBody};
use crate::rules::RuleSet;
use regex::Regex;
use std::sync::OnceLock;

/// Classify one splitter group. `group_index` salts checklist item ids
/// so they stay unique across the whole memo.
pub(crate) fn classify_group(group: &[String], group_index: usize, rules: &RuleSet) -> Block {
    let Some(first) = group.first() else {
        return Block::Paragraph {
            text: String::new(),
        };
    };

    if group.len() == 1 && lines::is_separator(first) {
        return Block::Separator;
    }

    if group.len() >= 2 && group.iter().all(|line| is_table_row(line)) {
        return parse_table(group);
    }

    if group.iter().all(|line| line.starts_with('>')) {
        return parse_blockquote(group);
    }

    if let Some(header) = lines::parse_section_header(first, rules) {
        return parse_section(header, &group[1..], group_index, rules);
    }

    let checklist: Option<Vec<ParsedChecklistItem>> = group
        .iter()
        .map(|line| lines::parse_checklist_item(line))
        .collect();
    if let Some(items) = checklist {
        return Block::Checklist {
            items: assign_ids(items, group_index),
        };
    }

    if let Some(parsed) = lines::parse_label_line(first, rules) {
        if let Some(rule) = parsed.rule {
            if group.len() == 1 {
                return Block::Label {
                    label: parsed.label,
                    value: parsed.value,
                    rule: rule.clone(),
                };
            }
            return Block::LabelGroup {
                label: parsed.label,
                value: parsed.value,
                rule: rule.clone(),
                continuation: group[1..].to_vec(),
            };
        }
        return Block::SimpleLabel {
            lines: group.iter().map(|line| labeled_line(line, rules)).collect(),
        };
    }

    let list: Option<Vec<String>> = group
        .iter()
        .map(|line| lines::strip_list_marker(line))
        .collect();
    if let Some(items) = list {
        return Block::List { items };
    }

    Block::Paragraph {
        text: group.join("\n"),
    }
}

fn is_table_row(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && line.starts_with('|') && line.ends_with('|')
}

fn parse_table(group: &[String]) -> Block {
    let mut content_rows = group
        .iter()
        .filter(|line| !table_divider_regex().is_match(line))
        .map(|line| split_cells(line));
    let header = content_rows.next().unwrap_or_default();
    Block::Table {
        header,
        rows: content_rows.collect(),
    }
}

fn split_cells(line: &str) -> Vec<String> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(String::from)
        .collect()
}

fn parse_blockquote(group: &[String]) -> Block {
    Block::Blockquote {
        lines: group
            .iter()
            .map(|line| line.strip_prefix('>').unwrap_or(line).trim_start().to_string())
            .collect(),
    }
}

fn parse_section(
    header: HeaderMatch<'_>,
    rest: &[String],
    group_index: usize,
    rules: &RuleSet,
) -> Block {
    let body_lines: Vec<&String> = rest.iter().filter(|line| !line.is_empty()).collect();

    let checklist: Option<Vec<ParsedChecklistItem>> = body_lines
        .iter()
        .map(|line| lines::parse_checklist_item(line))
        .collect();
    let body = match checklist {
        Some(items) if !body_lines.is_empty() => {
            SectionBody::Checklist(assign_ids(items, group_index))
        }
        _ => SectionBody::Lines(
            body_lines
                .iter()
                .map(|line| classify_body_line(line, rules))
                .collect(),
        ),
    };

    Block::SectionHeader {
        title: header.title,
        rule: header.rule.clone(),
        body,
    }
}

fn classify_body_line(line: &str, rules: &RuleSet) -> BodyLine {
    if let Some(parsed) = lines::parse_label_line(line, rules) {
        return BodyLine::Label {
            label: parsed.label,
            value: parsed.value,
            rule: parsed.rule.cloned(),
        };
    }
    if let Some(item) = lines::strip_list_marker(line) {
        return BodyLine::Item(item);
    }
    BodyLine::Text(line.to_string())
}

fn labeled_line(line: &str, rules: &RuleSet) -> LabeledLine {
    match lines::parse_label_line(line, rules) {
        Some(parsed) => LabeledLine::Label {
            label: parsed.label,
            value: parsed.value,
        },
        None => LabeledLine::Text(line.to_string()),
    }
}

fn assign_ids(items: Vec<ParsedChecklistItem>, group_index: usize) -> Vec<ChecklistItem> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| ChecklistItem::from_parsed(group_index, index, item))
        .collect()
}

fn table_divider_regex() -> &'static Regex {
    static TABLE_DIVIDER: OnceLock<Regex> = OnceLock::new();
    TABLE_DIVIDER.get_or_init(|| Regex::new(r"^[\s|:-]+$").expect("invalid divider regex"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{ColorKey, IconId};
    use pretty_assertions::assert_eq;

    fn classify(lines: &[&str]) -> Block {
        let group: Vec<String> = lines.iter().map(|line| line.to_string()).collect();
        classify_group(&group, 0, &RuleSet::builtin())
    }

    #[test]
    fn single_separator_line_classifies() {
        assert_eq!(classify(&["---"]), Block::Separator);
    }

    #[test]
    fn table_needs_two_rows_and_drops_divider() {
        let block = classify(&["| 항목 | 금액 |", "|---|---|", "| 입장료 | 1000원 |"]);

        assert_eq!(
            block,
            Block::Table {
                header: vec!["항목".to_string(), "금액".to_string()],
                rows: vec![vec!["입장료".to_string(), "1000원".to_string()]],
            }
        );
    }

    #[test]
    fn one_pipe_row_is_not_a_table() {
        let block = classify(&["| 항목 | 금액 |"]);

        assert_eq!(
            block,
            Block::Paragraph {
                text: "| 항목 | 금액 |".to_string(),
            }
        );
    }

    #[test]
    fn empty_cells_are_dropped_when_splitting() {
        let block = classify(&["| a || b |", "| 1 | 2 |"]);

        assert_eq!(
            block,
            Block::Table {
                header: vec!["a".to_string(), "b".to_string()],
                rows: vec![vec!["1".to_string(), "2".to_string()]],
            }
        );
    }

    #[test]
    fn blockquote_strips_marker_per_line() {
        let block = classify(&["> 여행은 살아보는 거야", ">한 달 살기"]);

        assert_eq!(
            block,
            Block::Blockquote {
                lines: vec![
                    "여행은 살아보는 거야".to_string(),
                    "한 달 살기".to_string(),
                ],
            }
        );
    }

    #[test]
    fn section_header_nests_checklist_body() {
        let block = classify(&["✅ 체크리스트", "- [ ] A", "- [ ] B"]);

        let Block::SectionHeader { title, rule, body } = block else {
            panic!("expected section header, got {block:?}");
        };
        assert_eq!(title, "✅ 체크리스트");
        assert_eq!(rule.icon, IconId::CheckSquare);
        assert_eq!(rule.color, ColorKey::Success);
        let SectionBody::Checklist(items) = body else {
            panic!("expected checklist body, got {body:?}");
        };
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| !item.checked));
        assert_eq!(items[0].text, "A");
        assert_eq!(items[1].text, "B");
    }

    #[test]
    fn section_header_with_mixed_body_classifies_per_line() {
        let block = classify(&[
            "🍽️ 맛집 리스트",
            "주소: 제주시 애월읍",
            "- 고기국수",
            "웨이팅이 깁니다",
        ]);

        let Block::SectionHeader { body, .. } = block else {
            panic!("expected section header, got {block:?}");
        };
        let SectionBody::Lines(lines) = body else {
            panic!("expected generic body, got {body:?}");
        };
        assert_eq!(lines.len(), 3);
        assert!(matches!(
            &lines[0],
            BodyLine::Label { label, rule: Some(rule), .. }
                if label == "주소" && rule.icon == IconId::MapPin
        ));
        assert_eq!(lines[1], BodyLine::Item("고기국수".to_string()));
        assert_eq!(lines[2], BodyLine::Text("웨이팅이 깁니다".to_string()));
    }

    #[test]
    fn header_only_group_gets_an_empty_generic_body() {
        let block = classify(&["✅ 체크리스트"]);

        let Block::SectionHeader { body, .. } = block else {
            panic!("expected section header, got {block:?}");
        };
        assert_eq!(body, SectionBody::Lines(Vec::new()));
    }

    #[test]
    fn standalone_checklist_assigns_positional_ids() {
        let group: Vec<String> = ["- [x] 여권", "- [ ] 환전", "☑ 보험"]
            .iter()
            .map(|line| line.to_string())
            .collect();

        let block = classify_group(&group, 3, &RuleSet::builtin());

        let Block::Checklist { items } = block else {
            panic!("expected checklist, got {block:?}");
        };
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].id, "3-0");
        assert_eq!(items[2].id, "3-2");
        assert!(items[0].checked);
        assert!(!items[1].checked);
        assert!(items[2].checked);
    }

    #[test]
    fn rule_matched_label_line_becomes_label_block() {
        let block = classify(&["주소: 서울시 강남구"]);

        let Block::Label { label, value, rule } = block else {
            panic!("expected label, got {block:?}");
        };
        assert_eq!(label, "주소");
        assert_eq!(value, "서울시 강남구");
        assert_eq!(rule.icon, IconId::MapPin);
        assert_eq!(rule.color, ColorKey::Primary);
    }

    #[test]
    fn rule_matched_label_with_more_lines_becomes_group() {
        let block = classify(&["영업시간: 매일 10:00", "월요일 휴무", "명절 휴무"]);

        let Block::LabelGroup {
            label,
            value,
            rule,
            continuation,
        } = block
        else {
            panic!("expected label group, got {block:?}");
        };
        assert_eq!(label, "영업시간");
        assert_eq!(value, "매일 10:00");
        assert_eq!(rule.icon, IconId::Clock);
        assert_eq!(continuation, vec!["월요일 휴무", "명절 휴무"]);
    }

    #[test]
    fn unmatched_label_line_becomes_simple_label_block() {
        let block = classify(&["전달사항: 담당자에게", "연락 바랍니다"]);

        assert_eq!(
            block,
            Block::SimpleLabel {
                lines: vec![
                    LabeledLine::Label {
                        label: "전달사항".to_string(),
                        value: "담당자에게".to_string(),
                    },
                    LabeledLine::Text("연락 바랍니다".to_string()),
                ],
            }
        );
    }

    #[test]
    fn bullet_lines_become_a_list() {
        let block = classify(&["- 우산 챙기기", "- 현금 준비"]);

        assert_eq!(
            block,
            Block::List {
                items: vec!["우산 챙기기".to_string(), "현금 준비".to_string()],
            }
        );
    }

    #[test]
    fn numbered_and_bullet_lines_mix_in_one_list() {
        let block = classify(&["1. 공항 도착", "2. 렌터카 수령", "- 주유 확인"]);

        assert_eq!(
            block,
            Block::List {
                items: vec![
                    "공항 도착".to_string(),
                    "렌터카 수령".to_string(),
                    "주유 확인".to_string(),
                ],
            }
        );
    }

    #[test]
    fn anything_else_falls_back_to_paragraph() {
        let block = classify(&["오늘은 바람이 많이 불었다", "", "그래도 좋았다"]);

        assert_eq!(
            block,
            Block::Paragraph {
                text: "오늘은 바람이 많이 불었다\n\n그래도 좋았다".to_string(),
            }
        );
    }
}
