//! Pane highlight application and reconciliation.
//!
//! # Responsibility
//! - Apply and clear the marker-class + custom-property highlight state.
//! - Drive clear-then-apply passes across open panes.
//!
//! # Invariants
//! - Highlight state is derived from (rules, note); nothing here persists.

pub mod reconciler;
pub mod style;
