//! The board state store.
//!
//! Holds the ordered item collection, the single active selection, the
//! board-wide filter, and the board name. All mutations happen synchronously
//! through the methods here; interaction controllers and persistence build on
//! top of this API.
//!
//! Ordering: insertion order is paint order for inactive items. The active
//! item always paints topmost, which `paint_order` and `hit_test` both honor.

use crate::constants::DEFAULT_BOARD_NAME;
use crate::error::{BoardError, BoardResult};
use crate::types::{BoardFilter, ItemPatch, MoodItem, Position};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The full canvas state: items, selection, filter, name.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    /// Placed items in insertion order.
    pub items: Vec<MoodItem>,
    /// At most one selected item, target of manipulation controls.
    #[serde(rename = "activeItemId")]
    pub active_item_id: Option<String>,
    /// Board-wide visual treatment.
    pub filter: BoardFilter,
    /// Display name; the placeholder until a save or load names the board.
    pub name: String,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board with the default filter and placeholder name.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            active_item_id: None,
            filter: BoardFilter::default(),
            name: DEFAULT_BOARD_NAME.to_string(),
        }
    }

    // ==================== Item operations ====================

    /// Append an item and make it the active selection.
    ///
    /// Ids are caller-generated; a duplicate is a programming-error-class
    /// fault. Fails loudly in debug builds and rejects in release builds.
    pub fn add_item(&mut self, item: MoodItem) -> BoardResult<()> {
        if self.items.iter().any(|existing| existing.id == item.id) {
            debug_assert!(false, "duplicate item id: {}", item.id);
            return Err(BoardError::DuplicateId(item.id));
        }
        self.active_item_id = Some(item.id.clone());
        self.items.push(item);
        Ok(())
    }

    /// Shallow-merge `patch` into the item with `id`.
    ///
    /// An unknown id is a silent no-op: a drag gesture may race with deletion
    /// and the stale update must not fault.
    pub fn update_item(&mut self, id: &str, patch: ItemPatch) {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => patch.apply(item),
            None => debug!(item_id = id, "update for unknown item dropped"),
        }
    }

    /// Remove an item. Clears the selection if it was the active item.
    /// Returns whether anything was removed.
    pub fn remove_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        if removed && self.active_item_id.as_deref() == Some(id) {
            self.active_item_id = None;
        }
        removed
    }

    /// Change the selection. Selecting an id that is not on the board clears
    /// the selection instead of leaving it dangling.
    pub fn set_active_item(&mut self, id: Option<&str>) {
        match id {
            Some(id) if self.get_item(id).is_some() => {
                self.active_item_id = Some(id.to_string());
            }
            Some(id) => {
                debug!(item_id = id, "selection of unknown item cleared");
                self.active_item_id = None;
            }
            None => self.active_item_id = None,
        }
    }

    /// Replace the board-wide filter. Item data is untouched.
    pub fn set_filter(&mut self, filter: BoardFilter) {
        self.filter = filter;
    }

    /// Empty the item collection, clear the selection, and reset the name to
    /// the placeholder.
    pub fn clear(&mut self) {
        self.items.clear();
        self.active_item_id = None;
        self.name = DEFAULT_BOARD_NAME.to_string();
    }

    /// Replace the items wholesale (loading a saved board). Selection is
    /// cleared: the restored items carry no active state.
    pub fn replace_items(&mut self, items: Vec<MoodItem>) {
        self.items = items;
        self.active_item_id = None;
    }

    // ==================== Queries ====================

    pub fn get_item(&self, id: &str) -> Option<&MoodItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn get_item_mut(&mut self, id: &str) -> Option<&mut MoodItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_item_id.as_deref() == Some(id)
    }

    /// Items in paint order: insertion order, with the active item moved to
    /// the end so it renders topmost.
    pub fn paint_order(&self) -> Vec<&MoodItem> {
        let mut order: Vec<&MoodItem> = self
            .items
            .iter()
            .filter(|item| !self.is_active(&item.id))
            .collect();
        if let Some(active) = self
            .active_item_id
            .as_deref()
            .and_then(|id| self.get_item(id))
        {
            order.push(active);
        }
        order
    }

    /// Topmost item under a board-local point, or `None` for the empty
    /// background. Checks front-to-back: the active item first, then the
    /// remaining items in reverse insertion order.
    pub fn hit_test(&self, point: Position) -> Option<&MoodItem> {
        if let Some(active) = self
            .active_item_id
            .as_deref()
            .and_then(|id| self.get_item(id))
        {
            if active.contains(point) {
                return Some(active);
            }
        }
        self.items
            .iter()
            .rev()
            .find(|item| !self.is_active(&item.id) && item.contains(point))
    }
}
