//! Workspace event contracts.
//!
//! # Responsibility
//! - Name the three workspace changes the engine reacts to.
//! - Declare the subscribe/unsubscribe SPI with receipt tracking.
//!
//! # Invariants
//! - The engine holds one subscription per event kind while started.
//! - Every receipt returned by `subscribe` is released on shutdown.

/// Workspace change notification delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceEvent {
    /// Focus moved to another pane.
    ActivePaneChanged,
    /// A note's front-matter (or other metadata) changed.
    MetadataChanged { note_path: String },
    /// A note moved or was renamed.
    NoteRenamed { note_path: String },
}

impl WorkspaceEvent {
    /// Returns the subscription kind this event belongs to.
    pub fn kind(&self) -> WorkspaceEventKind {
        match self {
            Self::ActivePaneChanged => WorkspaceEventKind::ActivePaneChanged,
            Self::MetadataChanged { .. } => WorkspaceEventKind::MetadataChanged,
            Self::NoteRenamed { .. } => WorkspaceEventKind::NoteRenamed,
        }
    }
}

/// Subscription category for workspace events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkspaceEventKind {
    ActivePaneChanged,
    MetadataChanged,
    NoteRenamed,
}

impl WorkspaceEventKind {
    /// Every kind the engine subscribes to on start.
    pub const ALL: [WorkspaceEventKind; 3] = [
        WorkspaceEventKind::ActivePaneChanged,
        WorkspaceEventKind::MetadataChanged,
        WorkspaceEventKind::NoteRenamed,
    ];

    /// Stable name used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ActivePaneChanged => "active_pane_changed",
            Self::MetadataChanged => "metadata_changed",
            Self::NoteRenamed => "note_renamed",
        }
    }
}

/// Opaque subscription receipt issued by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Host event feed.
pub trait EventSource {
    /// Registers interest in one event kind.
    fn subscribe(&self, kind: WorkspaceEventKind) -> SubscriptionId;

    /// Releases one previously issued receipt.
    fn unsubscribe(&self, id: SubscriptionId);
}
