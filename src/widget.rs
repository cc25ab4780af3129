//! The editing surface controller.
//!
//! [`Bubbles`] owns the bubble list and, while attached, the surface tree.
//! The host delivers [`SurfaceEvent`]s, applies the resulting surface state
//! to its rendering environment, then calls [`Bubbles::flush_deferred`] to
//! run the work that must wait for the render (caret moves).

use crate::bubble::BubbleList;
use crate::config::BubblesConfig;
use crate::content::{is_caret_anchor, prepare_content};
use crate::deferred::{DeferredQueue, Task};
use crate::events::{ClickTarget, EventResponse, Key, SurfaceEvent};
use crate::selection::{
    end_bubble_editing, is_bubble_editing, move_caret_to_end, start_bubble_editing,
    SelectionEnvironment,
};
use crate::surface::{Node, NodeId, Surface};

/// The bubble input widget.
///
/// Bridges surface events to bubble list mutations and keeps caret and
/// focus consistent. The list is the source of truth; surface children are
/// ephemeral view state reconciled back into it on commit.
pub struct Bubbles<E: SelectionEnvironment> {
    list: BubbleList,
    surface: Option<Surface>,
    env: E,
    config: BubblesConfig,
    deferred: DeferredQueue<Task>,
}

impl<E: SelectionEnvironment> Bubbles<E> {
    /// Create a detached widget.
    pub fn new(config: BubblesConfig, env: E) -> Self {
        Self {
            list: BubbleList::new(),
            surface: None,
            env,
            config,
            deferred: DeferredQueue::new(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Ordered contents of all committed bubbles.
    pub fn contents(&self) -> Vec<String> {
        self.list.contents()
    }

    /// Number of committed bubbles.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    /// The surface, while attached.
    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    /// Mutable surface access for the host's raw input mutations (typed
    /// text, in-place edits).
    pub fn surface_mut(&mut self) -> Option<&mut Surface> {
        self.surface.as_mut()
    }

    /// The selection environment.
    pub fn env(&self) -> &E {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut E {
        &mut self.env
    }

    /// Whether deferred work is pending.
    pub fn has_pending_tasks(&self) -> bool {
        !self.deferred.is_empty()
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Take ownership of a surface and load the initial contents.
    ///
    /// Initial contents are normalized; duplicates and empty entries are
    /// skipped silently. Loading fires no change notification. A caret move
    /// to the end is scheduled for after the initial render.
    pub fn attach(&mut self, mut surface: Surface) {
        if self.surface.is_some() {
            tracing::warn!(target: "widget", "attach while attached, replacing surface");
        }
        surface.class = self.config.class.clone();
        self.list = self.config.initial.iter().map(String::as_str).collect();
        self.surface = Some(surface);
        self.render_bubbles();
        self.schedule_caret_to_end();
        tracing::debug!(target: "widget", bubbles = self.list.len(), "attached");
    }

    /// Release the surface and drop pending deferred work.
    ///
    /// While detached every event and operation is a silent no-op.
    pub fn detach(&mut self) -> Option<Surface> {
        self.deferred.clear();
        let surface = self.surface.take();
        if surface.is_some() {
            tracing::debug!(target: "widget", "detached");
        }
        surface
    }

    // ========================================================================
    // Event handling
    // ========================================================================

    /// Handle one input event.
    ///
    /// Returns whether the host must suppress the event's default action.
    /// Events arriving while detached are ignored.
    pub fn handle_event(&mut self, event: SurfaceEvent) -> EventResponse {
        if self.surface.is_none() {
            tracing::debug!(target: "widget", ?event, "event while detached, ignoring");
            return EventResponse::Ignored;
        }

        match event {
            SurfaceEvent::KeyDown(Key::Enter) | SurfaceEvent::KeyDown(Key::Space) => {
                self.on_commit_key()
            }
            SurfaceEvent::KeyDown(Key::Backspace) => self.on_backspace(),
            SurfaceEvent::Click(target) => self.on_click(target),
            SurfaceEvent::Blur => self.on_blur(),
            SurfaceEvent::Paste { text } => self.on_paste(text),
        }
    }

    fn on_commit_key(&mut self) -> EventResponse {
        self.commit_editing_bubbles();
        self.commit_text_to_bubbles();
        self.schedule_caret_to_end();
        EventResponse::Consumed
    }

    fn on_backspace(&mut self) -> EventResponse {
        let Some(focus) = self.env.focus_node() else {
            return EventResponse::Ignored;
        };

        if let Some(index) = self.editing_bubble_fully_selected(focus) {
            tracing::debug!(target: "widget", index, "backspace removes editing bubble");
            self.remove_bubble(Some(index));
            self.schedule_caret_to_end();
            return EventResponse::Consumed;
        }

        if self.caret_on_trailing_anchor(focus) {
            tracing::debug!(target: "widget", "backspace pops last bubble");
            self.remove_bubble(None);
            return EventResponse::Consumed;
        }

        EventResponse::Ignored
    }

    fn on_click(&mut self, target: ClickTarget) -> EventResponse {
        match target {
            ClickTarget::Node(id) => {
                let clicked_idle_bubble = match self.surface.as_ref() {
                    Some(surface) => {
                        surface.get(id).is_some_and(Node::is_bubble)
                            && !is_bubble_editing(surface, id)
                    }
                    None => false,
                };
                if clicked_idle_bubble {
                    self.start_editing(id);
                }
            }
            ClickTarget::Surface => {
                self.schedule_caret_to_end();
            }
        }
        EventResponse::Ignored
    }

    fn on_blur(&mut self) -> EventResponse {
        self.commit_editing_bubbles();
        self.commit_text_to_bubbles();
        EventResponse::Ignored
    }

    fn on_paste(&mut self, text: Option<String>) -> EventResponse {
        match text {
            Some(text) => {
                let content = prepare_content(&text);
                if content.is_empty() {
                    tracing::debug!(target: "widget", "paste normalized to nothing, ignoring");
                } else {
                    self.append_bubble(&content, None);
                }
            }
            None => {
                tracing::debug!(target: "widget", "paste without plain-text payload, ignoring");
            }
        }
        EventResponse::Consumed
    }

    // ========================================================================
    // Model operations
    // ========================================================================

    /// Append a bubble with the given content.
    ///
    /// Duplicate content is not inserted; the caret is scheduled to the end
    /// instead and no notification fires.
    pub fn append(&mut self, content: &str) {
        if self.surface.is_none() {
            return;
        }
        self.append_bubble(content, None);
    }

    /// Replace the bubble at `index` with `content`, or append when no
    /// index is given. Duplicates redirect to a caret move; an out-of-range
    /// index is ignored.
    pub fn insert_or_replace(&mut self, content: &str, index: Option<usize>) {
        if self.surface.is_none() {
            return;
        }
        self.append_bubble(content, index);
    }

    /// Remove the bubble at `index`. Out of range is ignored.
    pub fn remove_at(&mut self, index: usize) {
        if self.surface.is_none() {
            return;
        }
        self.remove_bubble(Some(index));
    }

    /// Remove the last bubble. Ignored when the list is empty.
    pub fn remove_last(&mut self) {
        if self.surface.is_none() {
            return;
        }
        self.remove_bubble(None);
    }

    // ========================================================================
    // Reconciliation
    // ========================================================================

    /// Fold every bubble in editing state back into the list.
    ///
    /// An edit whose content already exists at a different position is a
    /// stale duplicate: the bubble at the edited node's position is removed
    /// and the edit discarded. An edit emptied of content removes its
    /// bubble. Every visited node leaves editing state.
    pub fn commit_editing_bubbles(&mut self) {
        let Some(surface) = self.surface.as_ref() else {
            return;
        };
        let editing = surface.editing_bubble_ids();

        for id in editing {
            let snapshot = self.surface.as_ref().and_then(|surface| {
                let bubble = surface.get(id)?.as_bubble()?;
                let node_index = surface.index_of(id)?;
                Some((prepare_content(&bubble.text), node_index))
            });
            let Some((content, node_index)) = snapshot else {
                // An earlier commit in this pass re-rendered it away.
                tracing::warn!(target: "widget", "editing bubble gone before commit, skipping");
                continue;
            };

            if content.is_empty() {
                self.remove_bubble(Some(node_index));
            } else {
                match self.list.position(&content) {
                    Some(list_index) if list_index != node_index => {
                        tracing::debug!(
                            target: "widget",
                            node_index,
                            list_index,
                            "edit duplicates another bubble, discarding"
                        );
                        self.remove_bubble(Some(node_index));
                    }
                    _ => {
                        self.append_bubble(&content, Some(node_index));
                    }
                }
            }

            if let Some(surface) = self.surface.as_mut() {
                end_bubble_editing(surface, id);
            }
        }
    }

    /// Convert every plain text child into a bubble.
    ///
    /// Empty-after-normalization text (caret anchors included) creates
    /// nothing. The raw text nodes are removed either way; the re-render
    /// supplies the committed bubbles.
    pub fn commit_text_to_bubbles(&mut self) {
        let Some(surface) = self.surface.as_ref() else {
            return;
        };
        let text_nodes = surface.text_node_ids();

        for id in text_nodes {
            let content = self
                .surface
                .as_ref()
                .and_then(|surface| surface.get(id))
                .and_then(Node::as_text)
                .map(|text| prepare_content(&text.text));
            let Some(content) = content else {
                continue;
            };

            if !content.is_empty() {
                self.append_bubble(&content, None);
            }

            if let Some(surface) = self.surface.as_mut() {
                surface.remove(id);
            }
        }
    }

    /// Run the deferred tasks. The host calls this after applying the
    /// current render/mutation batch.
    pub fn flush_deferred(&mut self) {
        for task in self.deferred.drain() {
            match task {
                Task::MoveCaretToEnd => {
                    if let Some(surface) = self.surface.as_mut() {
                        move_caret_to_end(surface, &mut self.env);
                    }
                }
            }
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Node index of the editing bubble holding the caret, when its full
    /// text is selected.
    fn editing_bubble_fully_selected(&self, focus: NodeId) -> Option<usize> {
        let surface = self.surface.as_ref()?;
        let bubble = surface.get(focus)?.as_bubble()?;
        if !bubble.editing {
            return None;
        }
        if self.env.selection_text(surface) != bubble.text {
            return None;
        }
        surface.index_of(focus)
    }

    /// True when the caret sits on a bare caret-anchor text node directly
    /// after a bubble.
    fn caret_on_trailing_anchor(&self, focus: NodeId) -> bool {
        let Some(surface) = self.surface.as_ref() else {
            return false;
        };
        let on_anchor = matches!(
            surface.get(focus),
            Some(Node::Text(text)) if is_caret_anchor(&text.text)
        );
        on_anchor && matches!(surface.prev_sibling(focus), Some(Node::Bubble(_)))
    }

    fn start_editing(&mut self, id: NodeId) {
        if let Some(surface) = self.surface.as_mut() {
            start_bubble_editing(surface, &mut self.env, id);
            tracing::trace!(target: "widget", "bubble editing started");
        }
    }

    /// Normalize and insert content. Duplicates schedule a caret move
    /// instead of inserting. With an index, replaces at that position;
    /// out of range is ignored.
    fn append_bubble(&mut self, content: &str, index: Option<usize>) {
        let content = prepare_content(content);
        if content.is_empty() {
            tracing::debug!(target: "widget", "empty content, nothing to append");
            return;
        }

        if !self.list.is_unique(&content) {
            tracing::debug!(target: "widget", "duplicate content, moving caret instead");
            self.schedule_caret_to_end();
            return;
        }

        let changed = match index {
            Some(index) => {
                let changed = self.list.replace_at(index, &content);
                if !changed {
                    tracing::debug!(target: "widget", index, "replace index out of range, ignoring");
                }
                changed
            }
            None => self.list.push(&content),
        };

        if changed {
            self.render_bubbles();
            self.notify_change();
        }
    }

    /// Remove by index, or the last bubble when no index is given.
    fn remove_bubble(&mut self, index: Option<usize>) {
        let changed = match index {
            Some(index) => {
                let changed = self.list.remove_at(index);
                if !changed {
                    tracing::debug!(target: "widget", index, "remove index out of range, ignoring");
                }
                changed
            }
            None => self.list.pop(),
        };

        if changed {
            self.render_bubbles();
            self.notify_change();
        }
    }

    /// Re-render bubble nodes from the list as a keyed update.
    fn render_bubbles(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.sync_bubbles(&self.list, |content| self.config.render_bubble(content));
        }
    }

    /// Invoke the change handler with the full ordered snapshot. Runs only
    /// after the mutation and its re-render have been applied.
    fn notify_change(&mut self) {
        let snapshot = self.list.contents();
        tracing::trace!(target: "widget", bubbles = snapshot.len(), "change");
        if let Some(handler) = self.config.on_change.as_mut() {
            handler(&snapshot);
        }
    }

    /// Queue a caret move for after the current batch.
    fn schedule_caret_to_end(&mut self) {
        self.deferred.push_unique(Task::MoveCaretToEnd);
    }
}
