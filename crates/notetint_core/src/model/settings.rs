//! Engine settings snapshot.
//!
//! # Responsibility
//! - Define the ordered rule list consumed by the matcher.
//! - Keep blob compatibility with the host settings format.
//!
//! # Invariants
//! - Rule order is priority order (index 0 wins first).
//! - A blob without `colorRules` loads the seed rules; an explicitly empty
//!   list stays empty.

use crate::model::rule::{ColorRule, RuleKind};
use serde::{Deserialize, Serialize};

/// Persisted engine settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TintSettings {
    /// Ordered rule list; first match wins.
    #[serde(default = "seed_rules")]
    pub color_rules: Vec<ColorRule>,
}

impl Default for TintSettings {
    fn default() -> Self {
        Self {
            color_rules: seed_rules(),
        }
    }
}

/// Starter rules shipped with a fresh install.
fn seed_rules() -> Vec<ColorRule> {
    vec![
        ColorRule {
            id: "inbox-ffb300".to_string(),
            value: "Inbox".to_string(),
            kind: RuleKind::Folder,
            color: "#ffb300".to_string(),
            alpha: 0.04,
        },
        ColorRule {
            id: "frontmatter-public-499749".to_string(),
            value: "category: public".to_string(),
            kind: RuleKind::Frontmatter,
            color: "#499749".to_string(),
            alpha: 0.04,
        },
        ColorRule {
            id: "frontmatter-private-c44545".to_string(),
            value: "category: private".to_string(),
            kind: RuleKind::Frontmatter,
            color: "#c44545".to_string(),
            alpha: 0.04,
        },
    ]
}
