//! Engine lifecycle and event wiring.
//!
//! # Responsibility
//! - Own the settings snapshot and the host collaborator handles.
//! - Translate workspace events into reconciliation passes.
//! - Remove every trace of the engine from the workspace on shutdown.
//!
//! # Invariants
//! - `start` and `shutdown` are idempotent.
//! - Events outside the started window are ignored.
//! - Settings mutation is save-then-swap-then-reconcile, in that order.

use crate::highlight::reconciler::{PaneHighlighter, ReconcileSummary};
use crate::host::events::{EventSource, SubscriptionId, WorkspaceEvent, WorkspaceEventKind};
use crate::host::store::{SettingsStore, StoreError, StoreResult};
use crate::host::workspace::NoteRegistry;
use crate::model::settings::TintSettings;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Engine lifecycle failures.
#[derive(Debug)]
pub enum EngineError {
    /// Settings could not be loaded through the host store.
    Store(StoreError),
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for EngineError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Rule-driven pane tinting engine.
///
/// All collaborators are `Arc<dyn Trait>` handles acquired at construction
/// and held for the engine's lifetime; the engine itself is single-threaded
/// and reconciles synchronously inside each event.
pub struct TintEngine {
    registry: Arc<dyn NoteRegistry>,
    events: Arc<dyn EventSource>,
    store: Arc<dyn SettingsStore>,
    settings: TintSettings,
    subscriptions: Vec<SubscriptionId>,
    started: bool,
}

impl TintEngine {
    /// Creates an engine bound to one host. No side effects until `start`.
    pub fn new(
        registry: Arc<dyn NoteRegistry>,
        events: Arc<dyn EventSource>,
        store: Arc<dyn SettingsStore>,
    ) -> Self {
        Self {
            registry,
            events,
            store,
            settings: TintSettings::default(),
            subscriptions: Vec::new(),
            started: false,
        }
    }

    /// Loads settings and subscribes to the workspace events.
    ///
    /// Calling `start` on a started engine is a no-op. No reconciliation
    /// pass runs here; the first workspace event (or an explicit
    /// [`TintEngine::reconcile`]) paints the panes.
    ///
    /// # Errors
    /// - [`EngineError::Store`] when the settings blob cannot be loaded;
    ///   the engine stays stopped and nothing is subscribed.
    pub fn start(&mut self) -> Result<(), EngineError> {
        if self.started {
            return Ok(());
        }

        self.settings = self.store.load()?;
        for kind in WorkspaceEventKind::ALL {
            self.subscriptions.push(self.events.subscribe(kind));
        }
        self.started = true;

        info!(
            "event=engine_start module=engine status=ok rules={} subscriptions={}",
            self.settings.color_rules.len(),
            self.subscriptions.len()
        );
        Ok(())
    }

    /// Returns the current settings snapshot.
    pub fn settings(&self) -> &TintSettings {
        &self.settings
    }

    /// Returns whether the engine is inside its started window.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Dispatches one workspace event to the matching reconciliation pass.
    ///
    /// Events delivered before `start` or after `shutdown` are ignored.
    pub fn handle_event(&self, event: &WorkspaceEvent) {
        if !self.started {
            return;
        }
        debug!(
            "event=workspace_event module=engine kind={}",
            event.kind().as_str()
        );
        match event {
            WorkspaceEvent::ActivePaneChanged => {
                self.reconcile(None);
            }
            WorkspaceEvent::MetadataChanged { note_path } => {
                self.reconcile(Some(note_path));
            }
            // A rename can change folder membership, so every pane is
            // re-evaluated, not just the renamed note's.
            WorkspaceEvent::NoteRenamed { .. } => {
                self.reconcile(None);
            }
        }
    }

    /// Persists new settings, swaps the snapshot, and refreshes the panes
    /// showing the active note.
    ///
    /// The save happens first; a failed save leaves the prior snapshot in
    /// place and no pass runs. With no active note there is nothing to
    /// refresh and no pass runs either.
    pub fn apply_settings(&mut self, settings: TintSettings) -> StoreResult<()> {
        self.store.save(&settings)?;
        self.settings = settings;

        if let Some(active) = self.registry.active_note() {
            self.reconcile(Some(&active));
        }
        Ok(())
    }

    /// Runs one reconciliation pass outside the event flow.
    pub fn reconcile(&self, scope: Option<&str>) -> ReconcileSummary {
        PaneHighlighter::new(self.registry.as_ref(), &self.settings.color_rules).reconcile(scope)
    }

    /// Releases every subscription and strips highlight state from every
    /// open pane.
    ///
    /// Safe to call more than once; a stopped engine shuts down as a no-op.
    pub fn shutdown(&mut self) {
        if !self.started {
            return;
        }

        for id in self.subscriptions.drain(..) {
            self.events.unsubscribe(id);
        }
        let cleared =
            PaneHighlighter::new(self.registry.as_ref(), &self.settings.color_rules).clear_all();
        self.started = false;

        info!(
            "event=engine_stop module=engine status=ok panes_cleared={}",
            cleared
        );
    }
}
