//! The editing surface: an owned tree of text and bubble nodes.
//!
//! The surface stands in for the content-editable container. The host
//! mirrors it into its real rendering environment and writes raw input
//! (typed text, in-place edits) back into it; the widget reconciles that
//! state against the bubble list. Child order is significant, and node ids
//! stay stable for the lifetime of the surface, so an in-progress edit
//! survives unrelated re-renders.

use crate::bubble::BubbleList;

/// Stable identifier for a surface child node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

/// A plain text child: uncommitted user input or a caret anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    id: NodeId,
    pub text: String,
}

impl TextNode {
    pub fn id(&self) -> NodeId {
        self.id
    }
}

/// A committed bubble child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BubbleNode {
    id: NodeId,
    /// Committed content, the render key. Stays fixed while `text` drifts
    /// during in-place editing.
    pub content: String,
    /// Live editable text.
    pub text: String,
    /// Display string produced by the configured renderer.
    pub display: String,
    /// The transient "is-editing" visual state.
    pub editing: bool,
    /// Whether the node is independently editable.
    pub editable: bool,
}

impl BubbleNode {
    pub fn id(&self) -> NodeId {
        self.id
    }
}

/// A direct child of the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(TextNode),
    Bubble(BubbleNode),
}

impl Node {
    pub fn id(&self) -> NodeId {
        match self {
            Node::Text(text) => text.id,
            Node::Bubble(bubble) => bubble.id,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    pub fn is_bubble(&self) -> bool {
        matches!(self, Node::Bubble(_))
    }

    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            Node::Text(text) => Some(text),
            Node::Bubble(_) => None,
        }
    }

    pub fn as_bubble(&self) -> Option<&BubbleNode> {
        match self {
            Node::Bubble(bubble) => Some(bubble),
            Node::Text(_) => None,
        }
    }

    pub fn as_bubble_mut(&mut self) -> Option<&mut BubbleNode> {
        match self {
            Node::Bubble(bubble) => Some(bubble),
            Node::Text(_) => None,
        }
    }

    /// The node's visible text: the live text for bubbles, the raw text for
    /// text nodes.
    pub fn text(&self) -> &str {
        match self {
            Node::Text(text) => &text.text,
            Node::Bubble(bubble) => &bubble.text,
        }
    }
}

/// The editable container: ordered children plus a styling class name.
#[derive(Debug, Clone, Default)]
pub struct Surface {
    /// Styling class name for the host to apply to the container.
    pub class: String,
    children: Vec<Node>,
    next_id: u64,
}

impl Surface {
    /// Create an empty surface with the given class name.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            children: Vec::new(),
            next_id: 0,
        }
    }

    fn alloc_id(&mut self) -> NodeId {
        self.next_id += 1;
        NodeId(self.next_id)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// All children, in order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.children.iter().find(|node| node.id() == id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.children.iter_mut().find(|node| node.id() == id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Position of `id` among ALL children, text nodes included.
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.children.iter().position(|node| node.id() == id)
    }

    /// The child immediately before `id`.
    pub fn prev_sibling(&self, id: NodeId) -> Option<&Node> {
        match self.index_of(id) {
            Some(0) | None => None,
            Some(index) => self.children.get(index - 1),
        }
    }

    /// Append a plain text child. Returns its id.
    pub fn push_text(&mut self, text: impl Into<String>) -> NodeId {
        let id = self.alloc_id();
        self.children.push(Node::Text(TextNode {
            id,
            text: text.into(),
        }));
        id
    }

    /// Remove the child with `id`, if present.
    pub fn remove(&mut self, id: NodeId) {
        self.children.retain(|node| node.id() != id);
    }

    /// Ids of all bubble children, in order.
    pub fn bubble_ids(&self) -> Vec<NodeId> {
        self.children
            .iter()
            .filter(|node| node.is_bubble())
            .map(Node::id)
            .collect()
    }

    /// Ids of bubble children currently in editing state, in order.
    ///
    /// Reconciliation snapshots this before mutating; iterating children
    /// directly while removing them is unsound.
    pub fn editing_bubble_ids(&self) -> Vec<NodeId> {
        self.children
            .iter()
            .filter_map(Node::as_bubble)
            .filter(|bubble| bubble.editing)
            .map(BubbleNode::id)
            .collect()
    }

    /// Ids of all plain text children, in order. Snapshot semantics as for
    /// [`editing_bubble_ids`](Self::editing_bubble_ids).
    pub fn text_node_ids(&self) -> Vec<NodeId> {
        self.children
            .iter()
            .filter(|node| node.is_text())
            .map(Node::id)
            .collect()
    }

    /// Concatenated visible text of all children.
    pub fn text(&self) -> String {
        self.children.iter().map(Node::text).collect()
    }

    /// Rebuild the bubble children from the list as a keyed update.
    ///
    /// A bubble node whose committed content matches a list entry is reused
    /// in list order, keeping its id, live text, and editing flags. New
    /// entries get fresh nodes, nodes without a matching entry are dropped,
    /// and text children keep their relative order after the bubbles.
    pub fn sync_bubbles(&mut self, list: &BubbleList, render: impl Fn(&str) -> String) {
        let mut bubbles: Vec<BubbleNode> = Vec::new();
        let mut texts: Vec<TextNode> = Vec::new();
        for node in std::mem::take(&mut self.children) {
            match node {
                Node::Bubble(bubble) => bubbles.push(bubble),
                Node::Text(text) => texts.push(text),
            }
        }

        let mut children = Vec::with_capacity(list.len() + texts.len());
        for entry in list.iter() {
            let node = match bubbles
                .iter()
                .position(|node| node.content == entry.content())
            {
                Some(existing) => {
                    let mut node = bubbles.remove(existing);
                    node.display = render(&node.content);
                    node
                }
                None => BubbleNode {
                    id: self.alloc_id(),
                    content: entry.content().to_string(),
                    text: entry.content().to_string(),
                    display: render(entry.content()),
                    editing: false,
                    editable: false,
                },
            };
            children.push(Node::Bubble(node));
        }
        children.extend(texts.into_iter().map(Node::Text));
        self.children = children;
    }
}
