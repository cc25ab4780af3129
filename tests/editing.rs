//! Tests for in-place bubble editing: entering editing state by click and
//! folding the edited content back into the list.

mod common;

use bubbles::{ClickTarget, EventResponse, Key, SurfaceEvent};

use common::{
    attached_widget, bubble_id, click_bubble, no_editing_bubbles, text_node_count,
    type_into_bubble,
};

// ============================================================================
// Entering editing state
// ============================================================================

#[test]
fn click_puts_bubble_into_editing_with_content_selected() {
    let (mut widget, _log) = attached_widget(&["red", "green"]);

    let id = bubble_id(&widget, "green");
    let response = widget.handle_event(SurfaceEvent::Click(ClickTarget::Node(id)));

    assert_eq!(response, EventResponse::Ignored);
    let surface = widget.surface().unwrap();
    let bubble = surface.get(id).unwrap().as_bubble().unwrap();
    assert!(bubble.editing);
    assert!(bubble.editable);
    assert_eq!(widget.env().selected_node(), Some(id));
}

#[test]
fn click_on_editing_bubble_changes_nothing() {
    let (mut widget, _log) = attached_widget(&["red"]);

    let id = click_bubble(&mut widget, "red");
    // Simulate the host collapsing the selection as the user keeps typing.
    type_into_bubble(&mut widget, id, "re");
    widget.handle_event(SurfaceEvent::Click(ClickTarget::Node(id)));

    let surface = widget.surface().unwrap();
    let bubble = surface.get(id).unwrap().as_bubble().unwrap();
    assert!(bubble.editing);
    assert_eq!(bubble.text, "re");
}

#[test]
fn click_on_surface_background_schedules_caret_move() {
    let (mut widget, _log) = attached_widget(&["red"]);
    widget.flush_deferred();
    assert!(!widget.has_pending_tasks());

    let response = widget.handle_event(SurfaceEvent::Click(ClickTarget::Surface));

    assert_eq!(response, EventResponse::Ignored);
    assert!(widget.has_pending_tasks());
    assert!(no_editing_bubbles(&widget));
}

#[test]
fn click_on_text_node_does_nothing() {
    let (mut widget, log) = attached_widget(&["red"]);
    widget.flush_deferred();

    let id = widget.surface_mut().unwrap().push_text("hello");
    let response = widget.handle_event(SurfaceEvent::Click(ClickTarget::Node(id)));

    assert_eq!(response, EventResponse::Ignored);
    assert!(no_editing_bubbles(&widget));
    assert!(!widget.has_pending_tasks());
    assert!(log.is_empty());
}

// ============================================================================
// Committing edits
// ============================================================================

#[test]
fn edited_content_replaces_bubble_in_its_slot() {
    let (mut widget, log) = attached_widget(&["red", "green", "blue"]);

    let id = click_bubble(&mut widget, "green");
    type_into_bubble(&mut widget, id, "yellow");
    widget.handle_event(SurfaceEvent::KeyDown(Key::Enter));

    assert_eq!(widget.contents(), vec!["red", "yellow", "blue"]);
    assert_eq!(
        log.last(),
        Some(vec!["red".to_string(), "yellow".to_string(), "blue".to_string()])
    );
    assert!(no_editing_bubbles(&widget));
}

#[test]
fn edit_duplicating_another_bubble_is_discarded() {
    let (mut widget, log) = attached_widget(&["red", "green"]);

    let id = click_bubble(&mut widget, "green");
    type_into_bubble(&mut widget, id, "red");
    widget.handle_event(SurfaceEvent::KeyDown(Key::Enter));

    assert_eq!(widget.contents(), vec!["red"]);
    assert_eq!(log.last(), Some(vec!["red".to_string()]));
    assert!(no_editing_bubbles(&widget));
}

#[test]
fn unchanged_edit_commits_without_notification() {
    let (mut widget, log) = attached_widget(&["red", "green"]);
    widget.flush_deferred();

    click_bubble(&mut widget, "green");
    widget.handle_event(SurfaceEvent::KeyDown(Key::Enter));

    assert_eq!(widget.contents(), vec!["red", "green"]);
    assert!(log.is_empty());
    assert!(no_editing_bubbles(&widget));
    assert!(widget.has_pending_tasks());
}

#[test]
fn bubble_emptied_during_editing_is_removed() {
    let (mut widget, log) = attached_widget(&["red", "green"]);

    let id = click_bubble(&mut widget, "green");
    type_into_bubble(&mut widget, id, " \u{200B} ");
    widget.handle_event(SurfaceEvent::KeyDown(Key::Enter));

    assert_eq!(widget.contents(), vec!["red"]);
    assert_eq!(log.last(), Some(vec!["red".to_string()]));
    assert!(no_editing_bubbles(&widget));
}

#[test]
fn editing_state_survives_unrelated_append() {
    let (mut widget, _log) = attached_widget(&["red", "green"]);

    let id = click_bubble(&mut widget, "green");
    type_into_bubble(&mut widget, id, "gree");
    widget.append("blue");

    assert_eq!(widget.contents(), vec!["red", "green", "blue"]);
    // Keyed re-render keeps the edited node, its text, and its state.
    let surface = widget.surface().unwrap();
    let bubble = surface.get(id).unwrap().as_bubble().unwrap();
    assert!(bubble.editing);
    assert_eq!(bubble.text, "gree");
}

// ============================================================================
// Blur
// ============================================================================

#[test]
fn blur_commits_edits_and_text_without_caret_move() {
    let (mut widget, log) = attached_widget(&["red"]);
    widget.flush_deferred();

    let id = click_bubble(&mut widget, "red");
    type_into_bubble(&mut widget, id, "crimson");
    widget.surface_mut().unwrap().push_text(" blue ");
    let response = widget.handle_event(SurfaceEvent::Blur);

    assert_eq!(response, EventResponse::Ignored);
    assert_eq!(widget.contents(), vec!["crimson", "blue"]);
    assert_eq!(log.count(), 2);
    assert!(no_editing_bubbles(&widget));
    assert_eq!(text_node_count(&widget), 0);
    assert!(!widget.has_pending_tasks());
}

#[test]
fn blur_with_nothing_pending_notifies_nothing() {
    let (mut widget, log) = attached_widget(&["red"]);

    let response = widget.handle_event(SurfaceEvent::Blur);

    assert_eq!(response, EventResponse::Ignored);
    assert_eq!(widget.contents(), vec!["red"]);
    assert!(log.is_empty());
}
