//! Pane reconciliation pass.
//!
//! # Responsibility
//! - Recompute highlight state for open panes from the current rule list.
//! - Honor the optional note-path scope filter used by metadata events.
//!
//! # Invariants
//! - Every visited pane is cleared before a new highlight is applied.
//! - Scope/resolve mismatches skip panes untouched, stale state included.
//! - One pane never aborts the pass for the remaining panes.

use crate::highlight::style::{apply_highlight, clear_highlight};
use crate::host::workspace::NoteRegistry;
use crate::matcher::{select_winning_rule, NoteContext};
use crate::model::color::Rgba;
use crate::model::rule::ColorRule;
use log::{debug, warn};

/// Outcome counters for one reconciliation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcileSummary {
    /// Panes cleared and re-evaluated.
    pub panes_visited: usize,
    /// Panes left untouched (unresolved note, scope mismatch, no surface).
    pub panes_skipped: usize,
    /// Panes that left the pass highlighted.
    pub highlights_applied: usize,
}

/// Walks open panes and rewrites their highlight state.
pub struct PaneHighlighter<'a> {
    registry: &'a dyn NoteRegistry,
    rules: &'a [ColorRule],
}

impl<'a> PaneHighlighter<'a> {
    pub fn new(registry: &'a dyn NoteRegistry, rules: &'a [ColorRule]) -> Self {
        Self { registry, rules }
    }

    /// Runs one clear-then-apply pass over every open pane.
    ///
    /// With `scope` set, panes showing other notes are skipped untouched
    /// so unrelated panes never flicker. Running the same pass twice is
    /// idempotent.
    pub fn reconcile(&self, scope: Option<&str>) -> ReconcileSummary {
        let mut summary = ReconcileSummary::default();

        for pane in self.registry.open_panes() {
            let note_path = match pane.note_path() {
                Some(path) => path,
                None => {
                    summary.panes_skipped += 1;
                    continue;
                }
            };
            if let Some(scope) = scope {
                if note_path != scope {
                    summary.panes_skipped += 1;
                    continue;
                }
            }
            let surface = match pane.content_surface() {
                Some(surface) => surface,
                None => {
                    summary.panes_skipped += 1;
                    continue;
                }
            };

            summary.panes_visited += 1;
            clear_highlight(surface.as_ref());

            let frontmatter = self.registry.frontmatter(&note_path).unwrap_or_default();
            let note = NoteContext {
                path: &note_path,
                frontmatter: &frontmatter,
            };
            if let Some(rule) = select_winning_rule(&note, self.rules) {
                match Rgba::from_hex(&rule.color, rule.alpha) {
                    Some(color) => {
                        apply_highlight(surface.as_ref(), &color);
                        summary.highlights_applied += 1;
                    }
                    None => {
                        // The pane stays cleared; the rule is unusable
                        // until its color is edited back into shape.
                        warn!(
                            "event=highlight_apply module=highlight status=skipped rule_id={} reason=unparseable_color color={}",
                            rule.id, rule.color
                        );
                    }
                }
            }
        }

        debug!(
            "event=reconcile module=highlight status=ok scope={} visited={} skipped={} applied={}",
            scope.unwrap_or("all"),
            summary.panes_visited,
            summary.panes_skipped,
            summary.highlights_applied
        );
        summary
    }

    /// Strips highlight state from every open pane.
    ///
    /// Returns the number of panes swept. Used on shutdown, where even
    /// panes with unresolved notes lose any leftover state.
    pub fn clear_all(&self) -> usize {
        let mut cleared = 0;
        for pane in self.registry.open_panes() {
            if let Some(surface) = pane.content_surface() {
                clear_highlight(surface.as_ref());
                cleared += 1;
            }
        }
        cleared
    }
}
