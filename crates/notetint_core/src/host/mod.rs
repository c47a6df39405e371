//! Host collaborator contracts.
//!
//! # Responsibility
//! - Keep every host touchpoint behind a trait seam so the engine stays
//!   host-agnostic and testable with in-memory fakes.
//!
//! # Invariants
//! - The core never reaches the pane tree, event bus, or settings blob
//!   except through these traits.

pub mod events;
pub mod store;
pub mod workspace;
