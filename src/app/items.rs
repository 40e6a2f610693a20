//! Item actions - creation, note editing, image resize and background
//! removal, deletion.

use super::Moodboard;
use crate::constants::{
    DEFAULT_IMAGE_SIZE, DEFAULT_NOTE_TEXT, MIN_IMAGE_SIZE, RESIZE_GROW_FACTOR,
    RESIZE_SHRINK_FACTOR,
};
use crate::error::{BoardError, BoardResult};
use crate::imaging;
use crate::notifications::Toast;
use crate::types::{
    ItemKind, ItemPatch, ItemSize, ItemStyle, MoodItem, NoteColor, NotePattern, Position,
};
use rand::Rng;
use tracing::debug;

/// Direction of a stepwise image resize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeDirection {
    Larger,
    Smaller,
}

impl Moodboard {
    // ==================== Creation actions ====================

    /// Place a sticky note with the starter text. Returns the new item's id;
    /// the note becomes the active item.
    pub fn add_note(
        &mut self,
        position: Position,
        color: NoteColor,
        pattern: NotePattern,
    ) -> BoardResult<String> {
        let rotate = rand::thread_rng().gen_range(-3..3) as f32;
        let note = MoodItem::note(
            DEFAULT_NOTE_TEXT,
            position,
            ItemStyle::note(color, pattern, rotate),
        );
        let id = note.id.clone();
        self.board.add_item(note)?;
        self.toasts.push(Toast::success("Sticky note added!"));
        Ok(id)
    }

    /// Place an uploaded or dropped image file.
    ///
    /// Non-image media types are filtered out silently: the return is `None`
    /// and no error surfaces, matching the ingestion boundary.
    pub fn add_image_file(
        &mut self,
        mime: &str,
        bytes: &[u8],
        position: Position,
    ) -> BoardResult<Option<String>> {
        if !mime.starts_with("image/") {
            debug!(mime, "non-image file skipped");
            return Ok(None);
        }
        let data_url = imaging::to_data_url(mime, bytes);
        self.add_image(data_url, position).map(Some)
    }

    /// Place an image already encoded as a data URL, at the default size.
    pub fn add_image(&mut self, data_url: String, position: Position) -> BoardResult<String> {
        let mut image = MoodItem::image(data_url, position, ItemSize::square(DEFAULT_IMAGE_SIZE));
        let rotate = rand::thread_rng().gen_range(-3..3) as f32;
        image.style = Some(ItemStyle::rotated(rotate));
        let id = image.id.clone();
        self.board.add_item(image)?;
        Ok(id)
    }

    /// Validate a Spotify share URL and place the player embed. A URL that
    /// does not resolve to an embeddable resource is rejected with a
    /// user-facing error and no item is created.
    pub fn add_spotify(&mut self, url: &str, position: Position) -> BoardResult<String> {
        let embed_url = match crate::embed::to_spotify_embed_url(url) {
            Ok(embed_url) => embed_url,
            Err(e) => {
                self.toasts.push(Toast::error(e.to_string()));
                return Err(e);
            }
        };
        let rotate = rand::thread_rng().gen_range(-2..2) as f32;
        let embed = MoodItem::spotify(embed_url, position, ItemStyle::rotated(rotate));
        let id = embed.id.clone();
        self.board.add_item(embed)?;
        self.toasts.push(Toast::success("Spotify player added!"));
        Ok(id)
    }

    // ==================== Note editing ====================

    /// Commit an inline note edit: write the edited HTML back and leave edit
    /// mode. Called when the editor loses focus.
    ///
    /// Blur ordering matters here: the press that blurred the editor may
    /// already have cleared edit state (or started a drag on another item)
    /// before this arrives, so the content is written unconditionally. A
    /// deleted note makes the write a no-op. Input state is only reset when
    /// this note's edit is still the current interaction.
    pub fn commit_note_edit(&mut self, id: &str, content: impl Into<String>) {
        self.board
            .update_item(id, ItemPatch::new().with_content(content));
        if self.input.editing_note() == Some(id) {
            self.input.reset();
        }
    }

    // ==================== Image actions ====================

    /// Grow or shrink an image by one step, with a floor on each dimension.
    pub fn resize_image(&mut self, id: &str, direction: ResizeDirection) -> BoardResult<()> {
        let item = self
            .board
            .get_item(id)
            .ok_or_else(|| BoardError::NotFound(id.to_string()))?;
        if item.kind != ItemKind::Image {
            return Err(BoardError::Validation(
                "only images can be resized".to_string(),
            ));
        }
        let Some(size) = item.size else {
            return Err(BoardError::Validation(
                "item has no size to resize".to_string(),
            ));
        };

        let factor = match direction {
            ResizeDirection::Larger => RESIZE_GROW_FACTOR,
            ResizeDirection::Smaller => RESIZE_SHRINK_FACTOR,
        };
        let new_size = ItemSize::new(
            (size.width * factor).max(MIN_IMAGE_SIZE),
            (size.height * factor).max(MIN_IMAGE_SIZE),
        );
        self.board
            .update_item(id, ItemPatch::new().with_size(new_size));
        Ok(())
    }

    /// Start a background-removal job for an image.
    ///
    /// The job always processes the unprocessed original, so repeated
    /// removals never compound. The item is marked processing (not grabbable,
    /// controls disabled) until the job's result is applied by
    /// `poll_background_jobs`; a second request while one is in flight is
    /// rejected.
    pub fn remove_background(&mut self, id: &str) -> BoardResult<()> {
        if self.processing.contains(id) {
            return Err(BoardError::Processing(
                "background removal already in progress".to_string(),
            ));
        }
        let item = self
            .board
            .get_item(id)
            .ok_or_else(|| BoardError::NotFound(id.to_string()))?;
        let Some(source) = item.original_image.clone() else {
            return Err(BoardError::Processing(
                "item has no source image".to_string(),
            ));
        };

        self.processing.insert(id.to_string());
        self.toasts.push(Toast::info(
            "Removing background... This might take a moment.",
        ));
        self.executor.spawn_removal(id.to_string(), source);
        Ok(())
    }

    /// Whether an item is currently waiting on a background job.
    pub fn is_processing(&self, id: &str) -> bool {
        self.processing.contains(id)
    }

    // ==================== Deletion ====================

    /// Delete an item. Immediate and irreversible within the session; a
    /// drag or edit in flight for it is cancelled.
    pub fn delete_item(&mut self, id: &str) -> bool {
        if self.input.dragging_item() == Some(id) || self.input.editing_note() == Some(id) {
            self.input.reset();
        }
        self.board.remove_item(id)
    }
}
