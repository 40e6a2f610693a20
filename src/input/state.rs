//! Input state machine for pointer interactions.
//!
//! A single explicit state replaces scattered flags and makes impossible
//! combinations (dragging while editing, two simultaneous drags)
//! unrepresentable.
//!
//! ## State transitions
//!
//! ```text
//! Idle -> DraggingItem    (pointer down over a grabbable item)
//! Idle -> EditingNote     (double-activate on the active note)
//!
//! DraggingItem -> Idle    (pointer up)
//! EditingNote  -> Idle    (edit committed / focus lost)
//! ```

use crate::input::coords::Point;

/// Current pointer interaction, if any.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No active interaction.
    #[default]
    Idle,

    /// A drag gesture holds an implicit lock on one item's position. The id
    /// is bound at grab time, so a stale move event can never reposition a
    /// different item.
    DraggingItem {
        item_id: String,
        /// Offset from the item's top-left corner to the pointer.
        grab_offset: Point,
    },

    /// Inline rich-text editing of a note. Dragging is disabled until the
    /// edit commits.
    EditingNote { item_id: String },
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::DraggingItem { .. })
    }

    /// Id of the item being dragged, if any.
    pub fn dragging_item(&self) -> Option<&str> {
        match self {
            Self::DraggingItem { item_id, .. } => Some(item_id),
            _ => None,
        }
    }

    /// Id of the note being edited, if any.
    pub fn editing_note(&self) -> Option<&str> {
        match self {
            Self::EditingNote { item_id } => Some(item_id),
            _ => None,
        }
    }

    pub fn start_drag(&mut self, item_id: String, grab_offset: Point) {
        *self = Self::DraggingItem {
            item_id,
            grab_offset,
        };
    }

    pub fn start_edit(&mut self, item_id: String) {
        *self = Self::EditingNote { item_id };
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
