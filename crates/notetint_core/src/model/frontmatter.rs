//! Front-matter values as seen by the rule matcher.
//!
//! # Responsibility
//! - Model the metadata map hosts expose per note.
//! - Define the natural string form used in rule comparisons.
//!
//! # Invariants
//! - Keys are raw field names; the matcher looks them up untrimmed.
//! - The natural form of a list is its items comma-joined, no spaces.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Front-matter map for one note, keyed by raw field name.
pub type Frontmatter = BTreeMap<String, FrontmatterValue>;

/// One front-matter field value.
///
/// Untagged so host metadata blobs (`category: public`, `draft: true`,
/// `tags: [a, b]`) deserialize without wrapper objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FrontmatterValue {
    Text(String),
    Number(f64),
    Bool(bool),
    List(Vec<FrontmatterValue>),
}

impl Display for FrontmatterValue {
    /// Natural string form compared against rule values: text as-is,
    /// numbers without a trailing `.0`, booleans as `true`/`false`, lists
    /// comma-joined.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::List(values) => {
                let joined = values
                    .iter()
                    .map(|value| value.to_string())
                    .collect::<Vec<_>>()
                    .join(",");
                write!(f, "{joined}")
            }
        }
    }
}

impl From<&str> for FrontmatterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FrontmatterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FrontmatterValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for FrontmatterValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
