//! Board management - save, load, list, delete, clear, filter, export.

use super::Moodboard;
use crate::constants::EXPORT_SCALE;
use crate::error::{BoardError, BoardResult};
use crate::export::BoardRenderer;
use crate::library::SavedBoard;
use crate::notifications::Toast;
use crate::types::BoardFilter;
use tracing::info;

impl Moodboard {
    /// Snapshot the current items under `name`, overwriting an existing
    /// record with that name, and adopt `name` as the board's name.
    pub fn save_board(&mut self, name: &str) -> BoardResult<()> {
        match self.library.save(name, &self.board.items) {
            Ok(()) => {
                self.board.name = name.trim().to_string();
                info!(name = %self.board.name, items = self.board.items.len(), "board saved");
                self.toasts
                    .push(Toast::success("Moodboard saved successfully!"));
                Ok(())
            }
            Err(e @ BoardError::Validation(_)) => {
                self.toasts.push(Toast::error(e.to_string()));
                Err(e)
            }
            Err(e) => {
                self.toasts.push(Toast::error("Failed to save moodboard."));
                Err(e)
            }
        }
    }

    /// Replace the live board with the saved board named `name`. Selection
    /// is cleared; any gesture or edit in flight is cancelled.
    pub fn load_board(&mut self, name: &str) -> BoardResult<()> {
        let Some(saved) = self.library.get(name) else {
            self.toasts.push(Toast::info("No saved moodboard found."));
            return Err(BoardError::NotFound(name.to_string()));
        };
        let items = saved.items.clone();
        let saved_name = saved.name.clone();

        self.board.replace_items(items);
        self.board.name = saved_name;
        self.input.reset();
        self.toasts
            .push(Toast::success("Moodboard loaded successfully!"));
        Ok(())
    }

    /// All saved records, for the board picker.
    pub fn list_saved(&self) -> &[SavedBoard] {
        self.library.list()
    }

    /// Delete the saved record named `name`. The live board is untouched.
    pub fn delete_saved(&mut self, name: &str) -> BoardResult<()> {
        match self.library.delete(name) {
            Ok(()) => {
                self.toasts.push(Toast::info("Saved board deleted."));
                Ok(())
            }
            Err(e @ BoardError::NotFound(_)) => {
                self.toasts.push(Toast::info("No saved moodboard found."));
                Err(e)
            }
            Err(e) => {
                self.toasts.push(Toast::error("Failed to delete board."));
                Err(e)
            }
        }
    }

    /// Whether legacy single-board data is waiting to be imported.
    pub fn has_legacy_import(&self) -> bool {
        self.library.has_legacy_import()
    }

    /// Import the pending legacy board as a named saved record.
    pub fn import_legacy_board(&mut self, name: &str) -> BoardResult<()> {
        self.library.import_legacy(name)?;
        self.toasts
            .push(Toast::success("Previous moodboard imported."));
        Ok(())
    }

    /// Empty the board. Immediate and irreversible within the session.
    pub fn clear_board(&mut self) {
        self.board.clear();
        self.input.reset();
        self.toasts.push(Toast::info("Moodboard cleared."));
    }

    /// Swap the board-wide filter.
    pub fn set_filter(&mut self, filter: BoardFilter) {
        self.board.set_filter(filter);
    }

    /// Export the board through the injected renderer at the standard
    /// supersampling scale. The selection is cleared first so manipulation
    /// chrome never appears in the output; the board stays interactive
    /// (and deselected) afterward.
    pub fn export_board(&mut self, renderer: &mut dyn BoardRenderer) -> BoardResult<Vec<u8>> {
        self.board.set_active_item(None);
        self.input.reset();
        match renderer.render(&self.board, EXPORT_SCALE) {
            Ok(png) => Ok(png),
            Err(e) => {
                self.toasts.push(Toast::error("Failed to export moodboard."));
                Err(e)
            }
        }
    }
}
