//! First-match-wins rule evaluation.
//!
//! # Responsibility
//! - Decide whether one rule matches one note.
//! - Pick the winning rule from an ordered list.
//!
//! # Invariants
//! - Folder matching is exact path-segment equality, case-sensitive.
//! - Front-matter keys are looked up exactly as written in the rule.
//! - Evaluation is pure; no host state is read or written here.

use crate::model::frontmatter::Frontmatter;
use crate::model::rule::{ColorRule, RuleKind};

/// Borrowed (identity, metadata) view of one note.
#[derive(Debug, Clone, Copy)]
pub struct NoteContext<'a> {
    /// Workspace-relative note path, e.g. `Projects/Inbox/todo.md`.
    pub path: &'a str,
    /// Front-matter of the note; an empty map when it has none.
    pub frontmatter: &'a Frontmatter,
}

/// Returns whether `rule` matches `note`.
pub fn rule_matches(note: &NoteContext<'_>, rule: &ColorRule) -> bool {
    match rule.kind {
        RuleKind::Folder => path_has_segment(note.path, &rule.value),
        RuleKind::Frontmatter => frontmatter_matches(note.frontmatter, &rule.value),
    }
}

/// Returns the first matching rule in priority order, if any.
///
/// The scan short-circuits on the first hit; later rules are never
/// evaluated once a winner exists.
pub fn select_winning_rule<'r>(
    note: &NoteContext<'_>,
    rules: &'r [ColorRule],
) -> Option<&'r ColorRule> {
    rules.iter().find(|rule| rule_matches(note, rule))
}

fn path_has_segment(path: &str, folder: &str) -> bool {
    path.split(['/', '\\']).any(|segment| segment == folder)
}

fn frontmatter_matches(frontmatter: &Frontmatter, rule_value: &str) -> bool {
    // The first colon separates key from expected value; a rule value
    // without one can never match.
    let (key, expected) = match rule_value.split_once(':') {
        Some(parts) => parts,
        None => return false,
    };
    match frontmatter.get(key) {
        Some(actual) => normalize(&actual.to_string()) == normalize(expected),
        None => false,
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}
