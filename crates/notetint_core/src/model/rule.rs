//! Color rule domain model.
//!
//! # Responsibility
//! - Define the rule records that drive pane highlighting.
//! - Guard rule edits so stored rules stay renderable.
//!
//! # Invariants
//! - `id` is stable; uniqueness is maintained by the settings collaborator.
//! - `color` matches the hex pattern after every accepted edit.
//! - `alpha` stays within `[0, 1]` after every accepted edit.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}){1,2}$").expect("valid hex color regex"));

/// Matching strategy for one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Match notes whose path contains the rule value as a full segment.
    Folder,
    /// Match notes whose front-matter holds the rule's `key: value` pair.
    Frontmatter,
}

fn default_alpha() -> f64 {
    1.0
}

/// One background-tint rule.
///
/// Serialized field names match the host settings blob; `kind` travels as
/// `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRule {
    /// Stable identifier; uniqueness is caller-maintained.
    pub id: String,
    /// Folder name, or a `key: value` pair for front-matter rules.
    pub value: String,
    /// Serialized as `type` to match external blob naming.
    #[serde(rename = "type")]
    pub kind: RuleKind,
    /// Hex RGB color, `#abc` or `#aabbcc`.
    pub color: String,
    /// Background opacity in `[0, 1]`. Absent in older blobs, then opaque.
    #[serde(default = "default_alpha")]
    pub alpha: f64,
}

/// One field change coming from a settings form.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleEdit {
    Kind(RuleKind),
    Value(String),
    Color(String),
    Alpha(f64),
}

impl ColorRule {
    /// Creates a rule with a freshly minted stable id.
    pub fn new(
        kind: RuleKind,
        value: impl Into<String>,
        color: impl Into<String>,
        alpha: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            value: value.into(),
            kind,
            color: color.into(),
            alpha,
        }
    }

    /// Returns the "Add rule" template used by settings forms.
    pub fn draft() -> Self {
        Self::new(RuleKind::Folder, "", "#3b82f6", 0.04)
    }

    /// Applies one guarded field edit.
    ///
    /// Returns `false` and keeps the prior value when the edit fails
    /// validation: `Color` must be hex, `Alpha` must be within `[0, 1]`.
    /// `Kind` and `Value` edits are always accepted.
    pub fn apply_edit(&mut self, edit: RuleEdit) -> bool {
        match edit {
            RuleEdit::Kind(kind) => {
                self.kind = kind;
                true
            }
            RuleEdit::Value(value) => {
                self.value = value;
                true
            }
            RuleEdit::Color(color) => {
                if !is_valid_hex_color(&color) {
                    return false;
                }
                self.color = color;
                true
            }
            RuleEdit::Alpha(alpha) => {
                if !is_valid_alpha(alpha) {
                    return false;
                }
                self.alpha = alpha;
                true
            }
        }
    }
}

/// Returns whether `value` is a `#rgb` / `#rrggbb` hex color.
pub fn is_valid_hex_color(value: &str) -> bool {
    HEX_COLOR_RE.is_match(value)
}

/// Returns whether `value` is a usable background opacity.
pub fn is_valid_alpha(value: f64) -> bool {
    value.is_finite() && (0.0..=1.0).contains(&value)
}
