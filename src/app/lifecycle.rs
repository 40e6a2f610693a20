//! Session lifecycle - construction, canvas measurement, job polling.

use super::Moodboard;
use crate::background::BackgroundExecutor;
use crate::board::Board;
use crate::input::{InputState, Rect};
use crate::library::BoardLibrary;
use crate::notifications::{Toast, ToastManager};
use crate::storage::{BlobStore, MemoryStore};
use crate::types::ItemPatch;
use std::collections::HashSet;
use tracing::debug;

impl Moodboard {
    /// Create a session backed by the given blob store. The saved-board
    /// library is loaded here, once; a corrupt store degrades to an empty
    /// library without failing construction.
    pub fn new(store: Box<dyn BlobStore>) -> Self {
        Self {
            board: Board::new(),
            library: BoardLibrary::load(store),
            input: InputState::default(),
            processing: HashSet::new(),
            executor: BackgroundExecutor::new(),
            toasts: ToastManager::new(),
            canvas_rect: None,
        }
    }

    /// Session with no persistence behind it, for tests and ephemeral use.
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    /// Record the measured container rect. The host calls this on mount and
    /// on layout changes; until the first call, placement is unavailable.
    pub fn set_canvas_rect(&mut self, rect: Option<Rect>) {
        self.canvas_rect = rect;
    }

    /// Drain finished background jobs and apply their results.
    ///
    /// Call once per event-loop turn. For each finished job the item's
    /// processing flag is reset; a successful result replaces the item's
    /// displayed content (the unprocessed original is kept), a failure only
    /// surfaces a toast. An item deleted mid-job is skipped.
    pub fn poll_background_jobs(&mut self) {
        while let Some(job) = self.executor.try_recv() {
            self.processing.remove(&job.item_id);
            match job.outcome {
                Ok(processed) => {
                    if self.board.get_item(&job.item_id).is_some() {
                        self.board
                            .update_item(&job.item_id, ItemPatch::new().with_content(processed));
                        self.toasts
                            .push(Toast::success("Background removed successfully!"));
                    } else {
                        debug!(item_id = job.item_id, "item deleted before job finished");
                    }
                }
                Err(e) => {
                    debug!(item_id = job.item_id, error = %e, "background removal failed");
                    self.toasts
                        .push(Toast::error("Failed to remove background. Please try again."));
                }
            }
        }
    }
}
