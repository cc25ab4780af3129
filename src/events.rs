//! Input events delivered by the host to the widget.

use crate::surface::NodeId;

/// Keys the widget reacts to. Everything else stays with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Commits pending edits and text into bubbles.
    Enter,
    /// Commits like Enter; the whole pending text becomes one bubble.
    Space,
    /// Removes a bubble when the caret position calls for it.
    Backspace,
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Empty surface space, the container itself.
    Surface,
    /// A direct child node.
    Node(NodeId),
}

/// An input event on the editing surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// A key was pressed.
    KeyDown(Key),
    /// The surface or one of its children was clicked.
    Click(ClickTarget),
    /// The surface lost input focus.
    Blur,
    /// A paste, with the plain-text payload already extracted by the host.
    /// `None` when the clipboard had no plain text.
    Paste { text: Option<String> },
}

impl SurfaceEvent {
    /// A paste event with a payload.
    pub fn paste(text: impl Into<String>) -> Self {
        SurfaceEvent::Paste {
            text: Some(text.into()),
        }
    }

    /// True for events that commit pending state into bubbles.
    pub fn is_commit(&self) -> bool {
        matches!(
            self,
            SurfaceEvent::KeyDown(Key::Enter) | SurfaceEvent::KeyDown(Key::Space) | SurfaceEvent::Blur
        )
    }
}

/// Whether the widget consumed an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    /// The widget acted on the event; the host must suppress its default
    /// action.
    Consumed,
    /// The event is the host's to handle.
    Ignored,
}

impl EventResponse {
    /// True when the default action must be suppressed.
    pub fn is_consumed(self) -> bool {
        matches!(self, EventResponse::Consumed)
    }
}
