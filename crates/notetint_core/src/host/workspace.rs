//! Workspace SPI: panes, notes, and their style surfaces.
//!
//! # Responsibility
//! - Declare the pane/note/front-matter contracts the host implements.
//! - Keep style writes behind one idempotent surface interface.
//!
//! # Invariants
//! - Surface operations are idempotent (classList semantics): adding a
//!   present class or removing an absent property is a no-op.
//! - Panes are host-owned and ephemeral; handles are re-enumerated every
//!   pass, never cached across passes.

use crate::model::frontmatter::Frontmatter;
use std::sync::Arc;

/// Host view over open panes and note metadata.
pub trait NoteRegistry {
    /// Returns every currently open note pane.
    fn open_panes(&self) -> Vec<Arc<dyn NotePane>>;

    /// Returns parsed front-matter for one note path.
    ///
    /// `None` when the note does not exist or carries no front-matter.
    fn frontmatter(&self, note_path: &str) -> Option<Frontmatter>;

    /// Returns the path of the note focused in the workspace, if any.
    fn active_note(&self) -> Option<String>;
}

/// One open editor pane.
pub trait NotePane {
    /// Returns the path of the note this pane displays.
    ///
    /// `None` while the pane has no resolved note (empty tab, transient
    /// state); such panes are left untouched.
    fn note_path(&self) -> Option<String>;

    /// Returns the pane's content surface, absent mid-teardown.
    fn content_surface(&self) -> Option<Arc<dyn ContentSurface>>;
}

/// Style write access to one pane's content element.
///
/// All four operations are idempotent by contract.
pub trait ContentSurface {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn set_style_property(&self, name: &str, value: &str);
    fn remove_style_property(&self, name: &str);
}
