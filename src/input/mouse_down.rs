//! Pointer down handling - selection and drag initiation.

use crate::app::Moodboard;
use crate::input::coords::{CoordinateConverter, Point};
use crate::types::ItemKind;
use tracing::trace;

impl Moodboard {
    /// Press at a viewport position: grab the topmost item under the
    /// pointer, or clear the selection on a background press.
    pub fn handle_pointer_down(&mut self, position: Point) {
        let Some(container) = self.canvas_rect else {
            // Container not measured yet; nothing is placeable.
            return;
        };
        let Some(board_pos) =
            CoordinateConverter::viewport_to_board_point(position, Some(container))
        else {
            return;
        };

        let hit = self
            .board
            .hit_test(board_pos)
            .map(|item| (item.id.clone(), item.position));

        let Some((item_id, item_position)) = hit else {
            // Background press: deselect and cancel any stale gesture.
            self.board.set_active_item(None);
            self.input.reset();
            return;
        };

        // Edit mode disables dragging until the edit commits.
        if self.input.editing_note() == Some(item_id.as_str()) {
            return;
        }

        self.board.set_active_item(Some(&item_id));

        // An in-flight background job owns this item's content; no grab.
        if self.processing.contains(&item_id) {
            trace!(item_id, "press on processing item ignored");
            return;
        }

        let grab_offset = CoordinateConverter::grab_offset(position, container, item_position);
        self.input.start_drag(item_id, grab_offset);
    }

    /// Double press: a second activation of the already-active note enters
    /// inline edit mode. Other kinds just (re)select.
    pub fn handle_double_click(&mut self, position: Point) {
        let Some(container) = self.canvas_rect else {
            return;
        };
        let Some(board_pos) =
            CoordinateConverter::viewport_to_board_point(position, Some(container))
        else {
            return;
        };

        let hit = self
            .board
            .hit_test(board_pos)
            .map(|item| (item.id.clone(), item.kind));

        let Some((item_id, kind)) = hit else {
            return;
        };

        if kind == ItemKind::Note
            && self.board.is_active(&item_id)
            && !self.processing.contains(&item_id)
        {
            self.input.start_edit(item_id);
        } else {
            self.board.set_active_item(Some(&item_id));
        }
    }
}
