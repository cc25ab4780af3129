//! Selection and caret management.
//!
//! The widget never touches a real selection API. [`SelectionEnvironment`]
//! is the capability it drives instead: hosts bind it to their document
//! selection and focus machinery, tests and headless hosts use
//! [`LocalSelection`].

use crate::content::ZERO_WIDTH_SPACE;
use crate::surface::{Node, NodeId, Surface};

/// Selection and focus capability of the embedding environment.
///
/// Implementations hold whatever handle they need to reach the real
/// selection (a document, a window, nothing at all for tests). The widget
/// is the only caller while it is attached.
pub trait SelectionEnvironment {
    /// Node containing the selection focus, if any.
    fn focus_node(&self) -> Option<NodeId>;

    /// Text content of the current selection. Empty when the selection is
    /// collapsed.
    fn selection_text(&self, surface: &Surface) -> String;

    /// Select the entire contents of `id`.
    fn select_node(&mut self, surface: &Surface, id: NodeId);

    /// Collapse the selection to the very end of the surface contents.
    fn collapse_to_end(&mut self, surface: &Surface);

    /// Give the surface input focus.
    fn focus_surface(&mut self);

    /// Whether the surface currently has input focus.
    fn has_focus(&self) -> bool;
}

/// In-process selection state for tests and headless hosts.
///
/// Tracks which node holds the selection focus, which node (if any) is
/// selected in full, and whether the surface has focus.
#[derive(Debug, Clone, Default)]
pub struct LocalSelection {
    focus: Option<NodeId>,
    selected: Option<NodeId>,
    focused: bool,
}

impl LocalSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the selection focus inside `id`, collapsed. This is how a host
    /// reports the caret landing in a node (or typing over a selection).
    pub fn focus_on(&mut self, id: NodeId) {
        self.focus = Some(id);
        self.selected = None;
    }

    /// The node currently selected in full, if any.
    pub fn selected_node(&self) -> Option<NodeId> {
        self.selected
    }
}

impl SelectionEnvironment for LocalSelection {
    fn focus_node(&self) -> Option<NodeId> {
        self.focus
    }

    fn selection_text(&self, surface: &Surface) -> String {
        match self.selected {
            Some(id) => surface
                .get(id)
                .map(|node| node.text().to_string())
                .unwrap_or_default(),
            None => String::new(),
        }
    }

    fn select_node(&mut self, surface: &Surface, id: NodeId) {
        if surface.contains(id) {
            self.focus = Some(id);
            self.selected = Some(id);
        }
    }

    fn collapse_to_end(&mut self, surface: &Surface) {
        self.selected = None;
        self.focus = surface.children().last().map(Node::id);
    }

    fn focus_surface(&mut self) {
        self.focused = true;
    }

    fn has_focus(&self) -> bool {
        self.focused
    }
}

/// Move the caret to the very end of the surface.
///
/// Appends a fresh zero-width-space text node as a caret anchor, collapses
/// the selection onto the end, and focuses the surface. Runs after the
/// current mutation batch via the deferred queue; running it twice is
/// harmless, and reconciliation sweeps the anchors away.
pub fn move_caret_to_end<E: SelectionEnvironment>(surface: &mut Surface, env: &mut E) {
    surface.push_text(ZERO_WIDTH_SPACE.to_string());
    env.collapse_to_end(surface);
    env.focus_surface();
}

/// Put a bubble node into editing state and select its entire contents so
/// the next keystroke replaces them. No-op for text nodes and unknown ids.
pub fn start_bubble_editing<E: SelectionEnvironment>(
    surface: &mut Surface,
    env: &mut E,
    id: NodeId,
) {
    match surface.get_mut(id).and_then(Node::as_bubble_mut) {
        Some(bubble) => {
            bubble.editing = true;
            bubble.editable = true;
        }
        None => return,
    }
    env.select_node(surface, id);
}

/// Clear a bubble node's editing state. Tolerates nodes a re-render has
/// already dropped.
pub fn end_bubble_editing(surface: &mut Surface, id: NodeId) {
    if let Some(bubble) = surface.get_mut(id).and_then(Node::as_bubble_mut) {
        bubble.editing = false;
        bubble.editable = false;
    }
}

/// Whether `id` is a bubble node currently in editing state.
pub fn is_bubble_editing(surface: &Surface, id: NodeId) -> bool {
    matches!(surface.get(id), Some(Node::Bubble(bubble)) if bubble.editing)
}
