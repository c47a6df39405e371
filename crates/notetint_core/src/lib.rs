//! Core rule-matching and pane-highlighting engine for NoteTint.
//! This crate is the single source of truth for tinting behavior.

pub mod engine;
pub mod highlight;
pub mod host;
pub mod logging;
pub mod matcher;
pub mod model;

pub use engine::{EngineError, TintEngine};
pub use highlight::reconciler::{PaneHighlighter, ReconcileSummary};
pub use highlight::style::{
    apply_highlight, clear_highlight, host_stylesheet, HIGHLIGHT_CLASS, HIGHLIGHT_COLOR_PROPERTY,
};
pub use host::events::{EventSource, SubscriptionId, WorkspaceEvent, WorkspaceEventKind};
pub use host::store::{SettingsStore, StoreError, StoreResult};
pub use host::workspace::{ContentSurface, NotePane, NoteRegistry};
pub use logging::{default_log_level, init_logging, logging_status};
pub use matcher::{rule_matches, select_winning_rule, NoteContext};
pub use model::color::Rgba;
pub use model::frontmatter::{Frontmatter, FrontmatterValue};
pub use model::rule::{is_valid_alpha, is_valid_hex_color, ColorRule, RuleEdit, RuleKind};
pub use model::settings::TintSettings;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
