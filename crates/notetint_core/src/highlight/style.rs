//! Highlight style vocabulary.
//!
//! # Responsibility
//! - Own the marker class and custom-property names written to panes.
//! - Provide the static stylesheet hosts install once per document root.
//!
//! # Invariants
//! - One class plus one property carry the whole highlight state.
//! - Apply/clear are idempotent given idempotent surface operations.

use crate::host::workspace::ContentSurface;
use crate::model::color::Rgba;

/// Marker class set on highlighted content surfaces.
pub const HIGHLIGHT_CLASS: &str = "notetint-highlight";

/// Custom property carrying the resolved rgba value.
pub const HIGHLIGHT_COLOR_PROPERTY: &str = "--notetint-bg";

/// Sets the highlight state of one surface to `color`.
pub fn apply_highlight(surface: &dyn ContentSurface, color: &Rgba) {
    surface.set_style_property(HIGHLIGHT_COLOR_PROPERTY, &color.css());
    surface.add_class(HIGHLIGHT_CLASS);
}

/// Removes any highlight state from one surface.
///
/// Clearing a surface that was never highlighted is a no-op.
pub fn clear_highlight(surface: &dyn ContentSurface) {
    surface.remove_class(HIGHLIGHT_CLASS);
    surface.remove_style_property(HIGHLIGHT_COLOR_PROPERTY);
}

/// Returns the stylesheet hosts install once per document root.
///
/// The tint blends over the host's secondary background.
pub fn host_stylesheet() -> String {
    format!(
        ".{HIGHLIGHT_CLASS} {{\n    \
         background: linear-gradient(var({HIGHLIGHT_COLOR_PROPERTY}), var({HIGHLIGHT_COLOR_PROPERTY})), var(--background-secondary);\n    \
         background-blend-mode: normal;\n\
         }}\n"
    )
}
