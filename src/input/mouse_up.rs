//! Pointer up handling - gesture release.

use crate::app::Moodboard;

impl Moodboard {
    /// Release the current drag, if any. No further position updates happen
    /// until the next grab. An in-progress note edit survives pointer up;
    /// it ends when the edit commits.
    pub fn handle_pointer_up(&mut self) {
        if self.input.is_dragging() {
            self.input.reset();
        }
    }
}
