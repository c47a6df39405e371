//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `notetint_core` linkage.
//! - Drive one engine lifecycle against an in-memory workspace with
//!   deterministic output for quick local sanity checks.

use notetint_core::{
    host_stylesheet, ContentSurface, EngineError, EventSource, Frontmatter, FrontmatterValue,
    NotePane, NoteRegistry, SettingsStore, StoreResult, SubscriptionId, TintEngine, TintSettings,
    WorkspaceEventKind, HIGHLIGHT_CLASS, HIGHLIGHT_COLOR_PROPERTY,
};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

#[derive(Default)]
struct DemoSurface {
    classes: RefCell<BTreeSet<String>>,
    properties: RefCell<BTreeMap<String, String>>,
}

impl DemoSurface {
    fn tint(&self) -> Option<String> {
        if !self.classes.borrow().contains(HIGHLIGHT_CLASS) {
            return None;
        }
        self.properties
            .borrow()
            .get(HIGHLIGHT_COLOR_PROPERTY)
            .cloned()
    }
}

impl ContentSurface for DemoSurface {
    fn add_class(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().remove(class);
    }

    fn set_style_property(&self, name: &str, value: &str) {
        self.properties
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    fn remove_style_property(&self, name: &str) {
        self.properties.borrow_mut().remove(name);
    }
}

struct DemoPane {
    path: String,
    surface: Arc<DemoSurface>,
}

impl DemoPane {
    fn open(path: &str) -> Arc<Self> {
        Arc::new(Self {
            path: path.to_string(),
            surface: Arc::new(DemoSurface::default()),
        })
    }
}

impl NotePane for DemoPane {
    fn note_path(&self) -> Option<String> {
        Some(self.path.clone())
    }

    fn content_surface(&self) -> Option<Arc<dyn ContentSurface>> {
        Some(self.surface.clone())
    }
}

/// In-memory host: three open panes, one note with front-matter, a
/// pass-through settings blob, and a counting event bus.
struct DemoWorkspace {
    panes: Vec<Arc<DemoPane>>,
    frontmatter: BTreeMap<String, Frontmatter>,
    next_subscription: Cell<u64>,
}

impl DemoWorkspace {
    fn new() -> Self {
        let mut public = Frontmatter::new();
        public.insert("category".to_string(), FrontmatterValue::from("public"));
        let mut frontmatter = BTreeMap::new();
        frontmatter.insert("Projects/roadmap.md".to_string(), public);

        Self {
            panes: vec![
                DemoPane::open("Inbox/todo.md"),
                DemoPane::open("Projects/roadmap.md"),
                DemoPane::open("Projects/scratch.md"),
            ],
            frontmatter,
            next_subscription: Cell::new(0),
        }
    }

    fn report(&self) {
        for pane in &self.panes {
            let state = pane
                .surface
                .tint()
                .unwrap_or_else(|| "(no tint)".to_string());
            println!("  {} -> {}", pane.path, state);
        }
    }
}

impl NoteRegistry for DemoWorkspace {
    fn open_panes(&self) -> Vec<Arc<dyn NotePane>> {
        self.panes
            .iter()
            .map(|pane| pane.clone() as Arc<dyn NotePane>)
            .collect()
    }

    fn frontmatter(&self, note_path: &str) -> Option<Frontmatter> {
        self.frontmatter.get(note_path).cloned()
    }

    fn active_note(&self) -> Option<String> {
        self.panes.first().map(|pane| pane.path.clone())
    }
}

impl EventSource for DemoWorkspace {
    fn subscribe(&self, _kind: WorkspaceEventKind) -> SubscriptionId {
        let id = self.next_subscription.get() + 1;
        self.next_subscription.set(id);
        SubscriptionId(id)
    }

    fn unsubscribe(&self, _id: SubscriptionId) {}
}

impl SettingsStore for DemoWorkspace {
    fn load(&self) -> StoreResult<TintSettings> {
        Ok(TintSettings::default())
    }

    fn save(&self, _settings: &TintSettings) -> StoreResult<()> {
        Ok(())
    }
}

fn main() -> Result<(), EngineError> {
    println!("notetint_core version={}", notetint_core::core_version());

    let workspace = Arc::new(DemoWorkspace::new());
    let mut engine = TintEngine::new(
        workspace.clone(),
        workspace.clone(),
        workspace.clone(),
    );

    println!("host stylesheet:\n{}", host_stylesheet());

    engine.start()?;
    let summary = engine.reconcile(None);
    println!(
        "reconcile: visited={} skipped={} applied={}",
        summary.panes_visited, summary.panes_skipped, summary.highlights_applied
    );
    workspace.report();

    engine.shutdown();
    println!("after shutdown:");
    workspace.report();
    Ok(())
}
