use notetint_core::{
    ColorRule, ContentSurface, Frontmatter, FrontmatterValue, NotePane, NoteRegistry,
    PaneHighlighter, RuleKind, HIGHLIGHT_CLASS, HIGHLIGHT_COLOR_PROPERTY,
};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

struct FakeSurface {
    classes: RefCell<BTreeSet<String>>,
    properties: RefCell<BTreeMap<String, String>>,
}

impl FakeSurface {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            classes: RefCell::new(BTreeSet::new()),
            properties: RefCell::new(BTreeMap::new()),
        })
    }

    fn with_stale_highlight(value: &str) -> Arc<Self> {
        let surface = Self::new();
        surface.add_class(HIGHLIGHT_CLASS);
        surface.set_style_property(HIGHLIGHT_COLOR_PROPERTY, value);
        surface
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    fn class_count(&self) -> usize {
        self.classes.borrow().len()
    }

    fn property(&self, name: &str) -> Option<String> {
        self.properties.borrow().get(name).cloned()
    }

    fn property_count(&self) -> usize {
        self.properties.borrow().len()
    }
}

impl ContentSurface for FakeSurface {
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

struct FakePane {
    path: Option<String>,
    surface: Option<Arc<FakeSurface>>,
}

impl NotePane for FakePane {
    fn note_path(&self) -> Option<String> {
        self.path.clone()
    }

    fn content_surface(&self) -> Option<Arc<dyn ContentSurface>> {
        self.surface
            .clone()
            .map(|surface| surface as Arc<dyn ContentSurface>)
    }
}

#[derive(Default)]
struct FakeRegistry {
    panes: Vec<Arc<FakePane>>,
    frontmatter: BTreeMap<String, Frontmatter>,
    active: Option<String>,
}

impl FakeRegistry {
    fn add_pane(&mut self, path: Option<&str>, surface: Option<Arc<FakeSurface>>) {
        self.panes.push(Arc::new(FakePane {
            path: path.map(str::to_string),
            surface,
        }));
    }

    fn set_frontmatter(&mut self, path: &str, key: &str, value: &str) {
        self.frontmatter
            .entry(path.to_string())
            .or_default()
            .insert(key.to_string(), FrontmatterValue::from(value));
    }
}

impl NoteRegistry for FakeRegistry {
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
        self.active.clone()
    }
}

fn folder_rule(id: &str, value: &str, color: &str) -> ColorRule {
    ColorRule {
        id: id.to_string(),
        value: value.to_string(),
        kind: RuleKind::Folder,
        color: color.to_string(),
        alpha: 0.04,
    }
}

fn frontmatter_rule(id: &str, value: &str, color: &str) -> ColorRule {
    ColorRule {
        id: id.to_string(),
        value: value.to_string(),
        kind: RuleKind::Frontmatter,
        color: color.to_string(),
        alpha: 0.04,
    }
}

#[test]
fn full_pass_paints_matches_and_clears_the_rest() {
    let mut registry = FakeRegistry::default();
    let inbox = FakeSurface::new();
    let public = FakeSurface::new();
    let stale = FakeSurface::with_stale_highlight("rgba(0,0,0,1)");
    registry.add_pane(Some("Inbox/todo.md"), Some(inbox.clone()));
    registry.add_pane(Some("Projects/x.md"), Some(public.clone()));
    registry.add_pane(Some("Projects/y.md"), Some(stale.clone()));
    registry.set_frontmatter("Projects/x.md", "category", "public");
    registry.set_frontmatter("Projects/y.md", "category", "internal");

    let rules = vec![
        folder_rule("inbox", "Inbox", "#ffb300"),
        frontmatter_rule("public", "category: public", "#499749"),
    ];
    let summary = PaneHighlighter::new(&registry, &rules).reconcile(None);

    assert_eq!(summary.panes_visited, 3);
    assert_eq!(summary.panes_skipped, 0);
    assert_eq!(summary.highlights_applied, 2);

    assert!(inbox.has_class(HIGHLIGHT_CLASS));
    assert_eq!(
        inbox.property(HIGHLIGHT_COLOR_PROPERTY).as_deref(),
        Some("rgba(255,179,0,0.04)")
    );
    assert!(public.has_class(HIGHLIGHT_CLASS));
    assert_eq!(
        public.property(HIGHLIGHT_COLOR_PROPERTY).as_deref(),
        Some("rgba(73,151,73,0.04)")
    );
    assert!(!stale.has_class(HIGHLIGHT_CLASS));
    assert_eq!(stale.property(HIGHLIGHT_COLOR_PROPERTY), None);
}

#[test]
fn repeated_passes_keep_one_class_and_one_property() {
    let mut registry = FakeRegistry::default();
    let surface = FakeSurface::new();
    registry.add_pane(Some("Inbox/todo.md"), Some(surface.clone()));

    let rules = vec![folder_rule("inbox", "Inbox", "#ffb300")];
    let highlighter = PaneHighlighter::new(&registry, &rules);
    highlighter.reconcile(None);
    highlighter.reconcile(None);

    assert_eq!(surface.class_count(), 1);
    assert_eq!(surface.property_count(), 1);
    assert!(surface.has_class(HIGHLIGHT_CLASS));
}

#[test]
fn clearing_a_never_highlighted_pane_changes_nothing() {
    let mut registry = FakeRegistry::default();
    let surface = FakeSurface::new();
    // A host class the engine does not own.
    surface.add_class("markdown-reading-view");
    registry.add_pane(Some("Projects/y.md"), Some(surface.clone()));

    let rules = vec![folder_rule("inbox", "Inbox", "#ffb300")];
    let summary = PaneHighlighter::new(&registry, &rules).reconcile(None);

    assert_eq!(summary.panes_visited, 1);
    assert_eq!(summary.highlights_applied, 0);
    assert_eq!(surface.class_count(), 1);
    assert!(surface.has_class("markdown-reading-view"));
    assert_eq!(surface.property_count(), 0);
}

#[test]
fn scoped_pass_leaves_unrelated_panes_untouched() {
    let mut registry = FakeRegistry::default();
    let unrelated = FakeSurface::with_stale_highlight("rgba(9,9,9,0.9)");
    let target = FakeSurface::new();
    registry.add_pane(Some("Notes/a.md"), Some(unrelated.clone()));
    registry.add_pane(Some("Inbox/b.md"), Some(target.clone()));

    let rules = vec![folder_rule("inbox", "Inbox", "#ffb300")];
    let summary = PaneHighlighter::new(&registry, &rules).reconcile(Some("Inbox/b.md"));

    assert_eq!(summary.panes_visited, 1);
    assert_eq!(summary.panes_skipped, 1);
    assert_eq!(summary.highlights_applied, 1);

    // The out-of-scope pane keeps even stale state; the scope check comes
    // before any clearing.
    assert!(unrelated.has_class(HIGHLIGHT_CLASS));
    assert_eq!(
        unrelated.property(HIGHLIGHT_COLOR_PROPERTY).as_deref(),
        Some("rgba(9,9,9,0.9)")
    );
    assert!(target.has_class(HIGHLIGHT_CLASS));
}

#[test]
fn unresolved_notes_and_missing_surfaces_are_skipped() {
    let mut registry = FakeRegistry::default();
    let orphaned = FakeSurface::with_stale_highlight("rgba(1,2,3,0.5)");
    let painted = FakeSurface::new();
    registry.add_pane(None, Some(orphaned.clone()));
    registry.add_pane(Some("Inbox/x.md"), None);
    registry.add_pane(Some("Inbox/y.md"), Some(painted.clone()));

    let rules = vec![folder_rule("inbox", "Inbox", "#ffb300")];
    let summary = PaneHighlighter::new(&registry, &rules).reconcile(None);

    assert_eq!(summary.panes_visited, 1);
    assert_eq!(summary.panes_skipped, 2);
    assert_eq!(summary.highlights_applied, 1);

    assert!(orphaned.has_class(HIGHLIGHT_CLASS));
    assert!(painted.has_class(HIGHLIGHT_CLASS));
}

#[test]
fn unparseable_stored_color_leaves_the_pane_cleared() {
    let mut registry = FakeRegistry::default();
    let broken = FakeSurface::with_stale_highlight("rgba(0,0,0,1)");
    let healthy = FakeSurface::new();
    registry.add_pane(Some("Inbox/todo.md"), Some(broken.clone()));
    registry.add_pane(Some("Archive/old.md"), Some(healthy.clone()));

    // The bad color bypasses the form guard via direct construction.
    let rules = vec![
        folder_rule("bad", "Inbox", "#12345"),
        folder_rule("good", "Archive", "#499749"),
    ];
    let summary = PaneHighlighter::new(&registry, &rules).reconcile(None);

    assert_eq!(summary.panes_visited, 2);
    assert_eq!(summary.highlights_applied, 1);

    assert!(!broken.has_class(HIGHLIGHT_CLASS));
    assert_eq!(broken.property(HIGHLIGHT_COLOR_PROPERTY), None);
    assert!(healthy.has_class(HIGHLIGHT_CLASS));
}

#[test]
fn clear_all_sweeps_every_surfaced_pane() {
    let mut registry = FakeRegistry::default();
    let first = FakeSurface::with_stale_highlight("rgba(255,179,0,0.04)");
    let pathless = FakeSurface::with_stale_highlight("rgba(73,151,73,0.04)");
    registry.add_pane(Some("Inbox/todo.md"), Some(first.clone()));
    registry.add_pane(None, Some(pathless.clone()));
    registry.add_pane(Some("Inbox/x.md"), None);

    let rules = vec![folder_rule("inbox", "Inbox", "#ffb300")];
    let cleared = PaneHighlighter::new(&registry, &rules).clear_all();

    assert_eq!(cleared, 2);
    assert!(!first.has_class(HIGHLIGHT_CLASS));
    assert_eq!(first.property_count(), 0);
    assert!(!pathless.has_class(HIGHLIGHT_CLASS));
    assert_eq!(pathless.property_count(), 0);
}
