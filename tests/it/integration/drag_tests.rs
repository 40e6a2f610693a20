//! Pointer gesture tests - grab, drag, release, and the interactions that
//! suppress dragging.
//!
//! All pointer positions are viewport coordinates; the helpers' CANVAS rect
//! puts the board origin at viewport (40, 60).

use crate::helpers::{CANVAS, session, tiny_image_data_url};
use moodboard::input::Point;
use moodboard::types::{NoteColor, NotePattern, Position};

/// Viewport position of a board-local point under the helper canvas.
fn viewport(x: f32, y: f32) -> Point {
    Point::new(x + CANVAS.origin.x, y + CANVAS.origin.y)
}

fn add_note_at(board: &mut moodboard::Moodboard, x: f32, y: f32) -> String {
    board
        .add_note(Position::new(x, y), NoteColor::Yellow, NotePattern::Plain)
        .unwrap()
}

#[test]
fn grab_and_drag_keeps_the_grab_point_under_the_pointer() {
    let mut board = session();
    let id = add_note_at(&mut board, 100.0, 100.0);

    // Press 10px inside the note's top-left corner.
    board.handle_pointer_down(viewport(110.0, 110.0));
    assert_eq!(board.input.dragging_item(), Some(id.as_str()));
    assert_eq!(board.board.active_item_id.as_deref(), Some(id.as_str()));

    board.handle_pointer_move(viewport(160.0, 160.0));
    let position = board.board.get_item(&id).unwrap().position;
    assert_eq!(position, Position::new(150.0, 150.0));

    // The grabbed corner offset holds across moves.
    board.handle_pointer_move(viewport(20.0, 310.0));
    let position = board.board.get_item(&id).unwrap().position;
    assert_eq!(position, Position::new(10.0, 300.0));
}

#[test]
fn release_ends_the_gesture_and_later_moves_are_inert() {
    let mut board = session();
    let id = add_note_at(&mut board, 100.0, 100.0);

    board.handle_pointer_down(viewport(110.0, 110.0));
    board.handle_pointer_move(viewport(210.0, 210.0));
    board.handle_pointer_up();
    assert!(board.input.is_idle());

    let settled = board.board.get_item(&id).unwrap().position;
    board.handle_pointer_move(viewport(500.0, 500.0));
    assert_eq!(board.board.get_item(&id).unwrap().position, settled);
    // Release keeps the item selected.
    assert_eq!(board.board.active_item_id.as_deref(), Some(id.as_str()));
}

#[test]
fn only_the_grabbed_item_moves() {
    let mut board = session();
    let moved = add_note_at(&mut board, 0.0, 0.0);
    let bystander = add_note_at(&mut board, 400.0, 0.0);

    board.handle_pointer_down(viewport(10.0, 10.0));
    assert_eq!(board.input.dragging_item(), Some(moved.as_str()));

    // Drag right across the other note's area.
    board.handle_pointer_move(viewport(450.0, 50.0));
    assert_eq!(
        board.board.get_item(&moved).unwrap().position,
        Position::new(440.0, 40.0)
    );
    assert_eq!(
        board.board.get_item(&bystander).unwrap().position,
        Position::new(400.0, 0.0)
    );
}

#[test]
fn background_press_deselects_and_cancels_a_stale_gesture() {
    let mut board = session();
    let id = add_note_at(&mut board, 0.0, 0.0);
    board.handle_pointer_down(viewport(10.0, 10.0));
    assert!(board.input.is_dragging());

    // Press far away from any item (note is 200x200 at the origin).
    board.handle_pointer_down(viewport(900.0, 700.0));
    assert!(board.input.is_idle());
    assert_eq!(board.board.active_item_id, None);
    assert!(board.board.get_item(&id).is_some());
}

#[test]
fn overlapping_items_grab_the_topmost_and_prefer_the_active_one() {
    let mut board = session();
    let below = add_note_at(&mut board, 0.0, 0.0);
    let above = add_note_at(&mut board, 50.0, 50.0);

    // In the overlap region the later insertion wins.
    board.handle_pointer_down(viewport(100.0, 100.0));
    assert_eq!(board.input.dragging_item(), Some(above.as_str()));
    board.handle_pointer_up();

    // Once the lower note is active, it wins the same press.
    board.board.set_active_item(Some(&below));
    board.handle_pointer_down(viewport(100.0, 100.0));
    assert_eq!(board.input.dragging_item(), Some(below.as_str()));
}

#[test]
fn deleting_the_dragged_item_makes_moves_a_no_op() {
    let mut board = session();
    let id = add_note_at(&mut board, 0.0, 0.0);
    board.handle_pointer_down(viewport(10.0, 10.0));

    // Remove behind the gesture's back; the bound id now matches nothing.
    board.board.remove_item(&id);
    board.handle_pointer_move(viewport(300.0, 300.0));
    assert!(board.board.get_item(&id).is_none());

    // delete_item, by contrast, cancels the gesture it owns.
    let other = add_note_at(&mut board, 0.0, 0.0);
    board.handle_pointer_down(viewport(10.0, 10.0));
    board.delete_item(&other);
    assert!(board.input.is_idle());
}

#[test]
fn processing_items_select_but_do_not_grab() {
    let mut board = session();
    let id = board
        .add_image(tiny_image_data_url(), Position::new(0.0, 0.0))
        .unwrap();
    board.board.set_active_item(None);
    board.processing.insert(id.clone());

    board.handle_pointer_down(viewport(10.0, 10.0));
    assert_eq!(board.board.active_item_id.as_deref(), Some(id.as_str()));
    assert!(board.input.is_idle());
}

#[test]
fn edit_mode_disables_dragging_until_commit() {
    let mut board = session();
    let id = add_note_at(&mut board, 0.0, 0.0);

    board.handle_pointer_down(viewport(10.0, 10.0));
    board.handle_pointer_up();
    board.handle_double_click(viewport(10.0, 10.0));
    assert_eq!(board.input.editing_note(), Some(id.as_str()));

    // Presses on the note no longer start a drag.
    board.handle_pointer_down(viewport(10.0, 10.0));
    assert_eq!(board.input.editing_note(), Some(id.as_str()));

    // Pointer up does not end the edit either.
    board.handle_pointer_up();
    assert_eq!(board.input.editing_note(), Some(id.as_str()));

    board.commit_note_edit(&id, "done");
    assert!(board.input.is_idle());
    board.handle_pointer_down(viewport(10.0, 10.0));
    assert!(board.input.is_dragging());
}

#[test]
fn edit_commit_survives_a_press_elsewhere_before_blur() {
    // The host delivers blur (and with it the commit) after the press that
    // caused it, so by commit time the press has already left edit mode.
    let mut board = session();
    let edited = add_note_at(&mut board, 0.0, 0.0);
    let other = add_note_at(&mut board, 400.0, 0.0);

    board.handle_pointer_down(viewport(10.0, 10.0));
    board.handle_pointer_up();
    board.handle_double_click(viewport(10.0, 10.0));
    assert_eq!(board.input.editing_note(), Some(edited.as_str()));

    // Press over the other note: edit mode is gone, a drag has started.
    board.handle_pointer_down(viewport(410.0, 10.0));
    assert_eq!(board.input.dragging_item(), Some(other.as_str()));

    // The blur-driven commit still lands, and the new gesture survives it.
    board.commit_note_edit(&edited, "edited text");
    assert_eq!(board.board.get_item(&edited).unwrap().content, "edited text");
    assert_eq!(board.input.dragging_item(), Some(other.as_str()));
}

#[test]
fn edit_commit_survives_a_background_press_before_blur() {
    let mut board = session();
    let edited = add_note_at(&mut board, 0.0, 0.0);

    board.handle_pointer_down(viewport(10.0, 10.0));
    board.handle_pointer_up();
    board.handle_double_click(viewport(10.0, 10.0));
    assert_eq!(board.input.editing_note(), Some(edited.as_str()));

    board.handle_pointer_down(viewport(900.0, 700.0));
    assert!(board.input.is_idle());

    board.commit_note_edit(&edited, "kept after deselect");
    assert_eq!(
        board.board.get_item(&edited).unwrap().content,
        "kept after deselect"
    );
    assert!(board.input.is_idle());
}

#[test]
fn double_click_edits_only_the_already_active_note() {
    let mut board = session();
    let note = add_note_at(&mut board, 0.0, 0.0);
    let image = board
        .add_image(tiny_image_data_url(), Position::new(400.0, 0.0))
        .unwrap();
    board.board.set_active_item(None);

    // First double-click on an inactive note selects without editing.
    board.handle_double_click(viewport(10.0, 10.0));
    assert_eq!(board.board.active_item_id.as_deref(), Some(note.as_str()));
    assert!(board.input.is_idle());

    // Now active, a double-click enters edit mode.
    board.handle_double_click(viewport(10.0, 10.0));
    assert_eq!(board.input.editing_note(), Some(note.as_str()));

    // Images never enter edit mode.
    board.input.reset();
    board.board.set_active_item(Some(&image));
    board.handle_double_click(viewport(410.0, 10.0));
    assert!(board.input.is_idle());
    assert_eq!(board.board.active_item_id.as_deref(), Some(image.as_str()));
}

#[test]
fn pointer_events_are_ignored_until_the_canvas_is_measured() {
    let mut board = session();
    let id = add_note_at(&mut board, 0.0, 0.0);
    board.set_canvas_rect(None);

    board.handle_pointer_down(viewport(10.0, 10.0));
    assert!(board.input.is_idle());
    board.handle_double_click(viewport(10.0, 10.0));
    assert!(board.input.is_idle());

    // Measuring the canvas brings the same press back to life.
    board.set_canvas_rect(Some(CANVAS));
    board.handle_pointer_down(viewport(10.0, 10.0));
    assert_eq!(board.input.dragging_item(), Some(id.as_str()));
}
