pub mod checklist;
pub mod io;
pub mod parsing;
pub mod rules;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use checklist::{ChecklistItem, ChecklistState};
pub use io::*;
pub use parsing::*;
pub use rules::{ColorKey, IconId, IconRule, RuleParseError, RuleSet, SectionHeaderRule};
