//! Rule, color, and settings model consumed by the tint engine.
//!
//! # Responsibility
//! - Define the canonical rule/settings shapes shared with the host blob.
//! - Keep color resolution and front-matter string forms in one place.
//!
//! # Invariants
//! - Wire field names stay blob-compatible (`type`, `colorRules`).
//! - Rule order is priority order; the model never reorders.

pub mod color;
pub mod frontmatter;
pub mod rule;
pub mod settings;
