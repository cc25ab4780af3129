//! A headless bubble input widget.
//!
//! Typed text becomes discrete, removable content chips ("bubbles"): Enter
//! or Space commits pending text, Backspace removes bubbles, a click
//! reopens a committed bubble for editing, and pasted text joins the list
//! when unique. Contents are de-duplicated and normalized before storage.
//!
//! The widget drives an owned [`Surface`] node tree and an injected
//! [`SelectionEnvironment`] capability instead of a real document, so a
//! host can bind it to any rendering environment and tests can run it
//! entirely in-process.
//!
//! # Example
//!
//! ```
//! use bubbles::{Bubbles, BubblesConfig, Key, LocalSelection, Surface, SurfaceEvent};
//!
//! let config = BubblesConfig::new().with_initial(["red", "green"]);
//! let mut widget = Bubbles::new(config, LocalSelection::new());
//! widget.attach(Surface::new("tags"));
//!
//! // The host mirrors typed input into the surface, then delivers events.
//! widget.surface_mut().unwrap().push_text("blue");
//! widget.handle_event(SurfaceEvent::KeyDown(Key::Enter));
//! widget.flush_deferred();
//!
//! assert_eq!(widget.contents(), vec!["red", "green", "blue"]);
//! ```

pub mod bubble;
pub mod config;
pub mod content;
pub mod deferred;
pub mod events;
pub mod selection;
pub mod surface;
pub mod widget;

// Re-export commonly used types
pub use bubble::{Bubble, BubbleList};
pub use config::{BubbleRenderer, BubblesConfig, ChangeHandler};
pub use content::{is_caret_anchor, prepare_content, ZERO_WIDTH_SPACE};
pub use deferred::{DeferredQueue, Task};
pub use events::{ClickTarget, EventResponse, Key, SurfaceEvent};
pub use selection::{
    end_bubble_editing, is_bubble_editing, move_caret_to_end, start_bubble_editing,
    LocalSelection, SelectionEnvironment,
};
pub use surface::{BubbleNode, Node, NodeId, Surface, TextNode};
pub use widget::Bubbles;
