//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use bubbles::{Bubbles, BubblesConfig, ClickTarget, LocalSelection, Node, NodeId, Surface, SurfaceEvent};

static TRACING: Once = Once::new();

/// Install the test subscriber once, honoring `BUBBLES_LOG` (e.g.
/// `BUBBLES_LOG=widget=debug`).
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_env("BUBBLES_LOG")
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .init();
    });
}

/// Records every change notification for assertions.
#[derive(Clone, Default)]
pub struct ChangeLog {
    changes: Rc<RefCell<Vec<Vec<String>>>>,
}

impl ChangeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handler to plug into `BubblesConfig::on_change`.
    pub fn handler(&self) -> impl FnMut(&[String]) + 'static {
        let changes = Rc::clone(&self.changes);
        move |snapshot: &[String]| changes.borrow_mut().push(snapshot.to_vec())
    }

    /// All recorded snapshots, oldest first.
    pub fn snapshots(&self) -> Vec<Vec<String>> {
        self.changes.borrow().clone()
    }

    /// The most recent snapshot, if any notification fired.
    pub fn last(&self) -> Option<Vec<String>> {
        self.changes.borrow().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.changes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.borrow().is_empty()
    }
}

/// A widget attached to a fresh surface, with the given initial contents
/// and a change log wired in.
pub fn attached_widget(initial: &[&str]) -> (Bubbles<LocalSelection>, ChangeLog) {
    init_tracing();
    let log = ChangeLog::new();
    let config = BubblesConfig::new()
        .with_class("bubbles")
        .with_initial(initial.iter().copied())
        .on_change(log.handler());
    let mut widget = Bubbles::new(config, LocalSelection::new());
    widget.attach(Surface::new(""));
    (widget, log)
}

/// Id of the bubble node whose committed content equals `content`.
pub fn bubble_id(widget: &Bubbles<LocalSelection>, content: &str) -> NodeId {
    widget
        .surface()
        .expect("widget is attached")
        .children()
        .iter()
        .find_map(|node| match node {
            Node::Bubble(bubble) if bubble.content == content => Some(bubble.id()),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no bubble with content {content:?}"))
}

/// Click a committed bubble, putting it into editing state with its full
/// contents selected.
pub fn click_bubble(widget: &mut Bubbles<LocalSelection>, content: &str) -> NodeId {
    let id = bubble_id(widget, content);
    widget.handle_event(SurfaceEvent::Click(ClickTarget::Node(id)));
    id
}

/// Overwrite the live text of an editing bubble, the way typing over the
/// selection would. Collapses the selection onto the node.
pub fn type_into_bubble(widget: &mut Bubbles<LocalSelection>, id: NodeId, text: &str) {
    let surface = widget.surface_mut().expect("widget is attached");
    match surface.get_mut(id) {
        Some(Node::Bubble(bubble)) => bubble.text = text.to_string(),
        _ => panic!("node {id:?} is not a bubble"),
    }
    widget.env_mut().focus_on(id);
}

/// Number of plain text children currently on the surface.
pub fn text_node_count(widget: &Bubbles<LocalSelection>) -> usize {
    widget
        .surface()
        .expect("widget is attached")
        .children()
        .iter()
        .filter(|node| node.is_text())
        .count()
}

/// True when no bubble node on the surface is marked editing.
pub fn no_editing_bubbles(widget: &Bubbles<LocalSelection>) -> bool {
    widget
        .surface()
        .expect("widget is attached")
        .children()
        .iter()
        .filter_map(Node::as_bubble)
        .all(|bubble| !bubble.editing)
}
