//! Pointer move handling during a drag.
//!
//! Move events arrive at display rate, so the path is a single position
//! update on the dragged item and an early exit for every other state.

use crate::app::Moodboard;
use crate::input::InputState;
use crate::input::coords::{CoordinateConverter, Point};
use crate::types::ItemPatch;

impl Moodboard {
    /// Pointer moved. Only meaningful mid-drag: the grabbed item follows the
    /// pointer, keeping the grab point fixed under it.
    pub fn handle_pointer_move(&mut self, position: Point) {
        let InputState::DraggingItem {
            item_id,
            grab_offset,
        } = &self.input
        else {
            return;
        };
        let item_id = item_id.clone();
        let grab_offset = *grab_offset;

        let Some(new_position) =
            CoordinateConverter::viewport_to_board(position, self.canvas_rect, grab_offset)
        else {
            return;
        };

        // The id was bound at grab time; this can never touch another item,
        // and a deletion mid-gesture makes this a no-op.
        self.board
            .update_item(&item_id, ItemPatch::new().with_position(new_position));
    }
}
