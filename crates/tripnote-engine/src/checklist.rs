//! Togglable checklist state, collected out of parsed blocks.
//!
//! Toggling never writes back to the memo text. The state lives for one
//! viewing session; durable checklists need their own store.

use crate::parsing::lines::ParsedChecklistItem;
use crate::parsing::types::{Block, SectionBody};

/// One togglable to-do entry.
///
/// `id` is `"{group}-{index}"`, stable for a given memo text because
/// both parts come from source positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub id: String,
    pub checked: bool,
    pub text: String,
}

impl ChecklistItem {
    pub fn new(id: impl Into<String>, checked: bool, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            checked,
            text: text.into(),
        }
    }

    pub(crate) fn from_parsed(group: usize, index: usize, item: ParsedChecklistItem) -> Self {
        Self {
            id: format!("{group}-{index}"),
            checked: item.checked,
            text: item.text,
        }
    }
}

/// Caller-owned flat view over every checklist item in a memo.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChecklistState {
    items: Vec<ChecklistItem>,
}

impl ChecklistState {
    pub fn new(items: Vec<ChecklistItem>) -> Self {
        Self { items }
    }

    /// Collect items from standalone checklists and checklist section
    /// bodies, in document order.
    pub fn from_blocks(blocks: &[Block]) -> Self {
        let mut items = Vec::new();
        for block in blocks {
            match block {
                Block::Checklist { items: found } => items.extend(found.iter().cloned()),
                Block::SectionHeader {
                    body: SectionBody::Checklist(found),
                    ..
                } => items.extend(found.iter().cloned()),
                _ => {}
            }
        }
        Self { items }
    }

    /// Flip one item's flag, leaving every other item untouched.
    /// Returns false when no item has `id`.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.checked = !item.checked;
                true
            }
            None => false,
        }
    }

    pub fn is_checked(&self, id: &str) -> Option<bool> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.checked)
    }

    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_memo;
    use crate::rules::RuleSet;
    use pretty_assertions::assert_eq;

    fn state(text: &str) -> ChecklistState {
        let rules = RuleSet::builtin();
        ChecklistState::from_blocks(&parse_memo(text, &rules))
    }

    #[test]
    fn collects_standalone_and_nested_items_in_order() {
        let got = state("- [ ] 여권\n---\n✅ 체크리스트\n- [x] 환전\n- [ ] 보험");

        let texts: Vec<&str> = got.items().iter().map(|item| item.text.as_str()).collect();
        assert_eq!(texts, vec!["여권", "환전", "보험"]);
    }

    #[test]
    fn double_toggle_restores_the_original_flag() {
        let mut got = state("- [ ] 여권\n- [x] 환전");
        let id = got.items()[0].id.clone();

        assert!(got.toggle(&id));
        assert_eq!(got.is_checked(&id), Some(true));
        assert!(got.toggle(&id));
        assert_eq!(got.is_checked(&id), Some(false));
    }

    #[test]
    fn toggle_leaves_other_items_alone() {
        let mut got = state("- [ ] 여권\n- [x] 환전\n- [ ] 보험");
        let id = got.items()[1].id.clone();

        got.toggle(&id);

        assert_eq!(got.is_checked("0-0"), Some(false));
        assert_eq!(got.is_checked("0-1"), Some(false));
        assert_eq!(got.is_checked("0-2"), Some(false));
    }

    #[test]
    fn toggling_an_unknown_id_is_a_noop() {
        let mut got = state("- [ ] 여권");

        assert!(!got.toggle("9-9"));
        assert_eq!(got.is_checked("0-0"), Some(false));
        assert_eq!(got.is_checked("9-9"), None);
    }
}
