//! The saved-board library: named, timestamped snapshots of board items.
//!
//! The canonical persisted shape is the multi-board key `moodboards`, a JSON
//! array of `{name, items, createdAt}` records with `name` as the lookup key.
//! The legacy single-board key `moodboard` (a bare item array) is read once
//! at startup when the multi-board key is absent and held as a pending
//! import; it is never loaded implicitly.
//!
//! Loading the library never fails: a corrupt or unreadable blob logs a
//! warning and falls back to an empty collection.

use crate::constants::{LEGACY_BOARD_KEY, LIBRARY_KEY};
use crate::error::{BoardError, BoardResult};
use crate::storage::BlobStore;
use crate::types::{MoodItem, epoch_millis};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// A named snapshot of a board's items.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SavedBoard {
    pub name: String,
    pub items: Vec<MoodItem>,
    #[serde(rename = "createdAt")]
    pub created_at: u64,
}

/// The persisted collection of saved boards.
pub struct BoardLibrary {
    store: Box<dyn BlobStore>,
    records: Vec<SavedBoard>,
    legacy_items: Option<Vec<MoodItem>>,
}

impl BoardLibrary {
    /// Load the library from the injected store. Corruption degrades to an
    /// empty collection rather than failing startup.
    pub fn load(store: Box<dyn BlobStore>) -> Self {
        let mut library_key_present = false;
        let records = match store.read(LIBRARY_KEY) {
            Ok(Some(blob)) => {
                library_key_present = true;
                match serde_json::from_str::<Vec<SavedBoard>>(&blob) {
                    Ok(records) => records,
                    Err(e) => {
                        warn!(error = %e, "saved-board library is corrupt, starting empty");
                        Vec::new()
                    }
                }
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "saved-board library unreadable, starting empty");
                Vec::new()
            }
        };

        // Migration path: a single-board blob from the old scheme, only
        // considered when the multi-board key has never been written.
        let legacy_items = if library_key_present {
            None
        } else {
            match store.read(LEGACY_BOARD_KEY) {
                Ok(Some(blob)) => match serde_json::from_str::<Vec<MoodItem>>(&blob) {
                    Ok(items) if !items.is_empty() => {
                        info!(items = items.len(), "legacy single-board data found");
                        Some(items)
                    }
                    Ok(_) => None,
                    Err(e) => {
                        warn!(error = %e, "legacy board blob is corrupt, ignoring");
                        None
                    }
                },
                Ok(None) => None,
                Err(e) => {
                    warn!(error = %e, "legacy board blob unreadable, ignoring");
                    None
                }
            }
        };

        Self {
            store,
            records,
            legacy_items,
        }
    }

    // ==================== Record operations ====================

    /// Snapshot `items` under `name`, overwriting any record with that name.
    /// An overwritten record keeps its original creation timestamp.
    ///
    /// A save completes or fails as a unit: when the store write fails, the
    /// in-memory mutation is rolled back so `list` never reports a record
    /// that is not on disk.
    pub fn save(&mut self, name: &str, items: &[MoodItem]) -> BoardResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BoardError::Validation(
                "Please enter a name for the board".to_string(),
            ));
        }

        match self.records.iter_mut().find(|record| record.name == name) {
            Some(record) => {
                let previous = std::mem::replace(&mut record.items, items.to_vec());
                if let Err(e) = self.persist() {
                    if let Some(record) =
                        self.records.iter_mut().find(|record| record.name == name)
                    {
                        record.items = previous;
                    }
                    return Err(e);
                }
            }
            None => {
                self.records.push(SavedBoard {
                    name: name.to_string(),
                    items: items.to_vec(),
                    created_at: epoch_millis(),
                });
                if let Err(e) = self.persist() {
                    self.records.pop();
                    return Err(e);
                }
            }
        }
        Ok(())
    }

    /// Look up a saved board by name.
    pub fn get(&self, name: &str) -> Option<&SavedBoard> {
        self.records.iter().find(|record| record.name == name)
    }

    /// All saved records, in save order.
    pub fn list(&self) -> &[SavedBoard] {
        &self.records
    }

    /// Remove a saved record by name. Like `save`, complete-or-fail: a
    /// failed store write puts the record back in place.
    pub fn delete(&mut self, name: &str) -> BoardResult<()> {
        let index = self
            .records
            .iter()
            .position(|record| record.name == name)
            .ok_or_else(|| BoardError::NotFound(name.to_string()))?;
        let removed = self.records.remove(index);
        if let Err(e) = self.persist() {
            self.records.insert(index, removed);
            return Err(e);
        }
        Ok(())
    }

    // ==================== Legacy import ====================

    /// Whether legacy single-board data is waiting to be imported.
    pub fn has_legacy_import(&self) -> bool {
        self.legacy_items.is_some()
    }

    /// Import the pending legacy board under `name` and retire the legacy
    /// key. The pending data is consumed even if a later step fails, so the
    /// offer is made exactly once.
    pub fn import_legacy(&mut self, name: &str) -> BoardResult<()> {
        let items = self
            .legacy_items
            .take()
            .ok_or_else(|| BoardError::NotFound(LEGACY_BOARD_KEY.to_string()))?;
        self.save(name, &items)?;
        self.store.remove(LEGACY_BOARD_KEY)?;
        info!(name, items = items.len(), "legacy board imported");
        Ok(())
    }

    fn persist(&mut self) -> BoardResult<()> {
        let blob = serde_json::to_string(&self.records)?;
        self.store.write(LIBRARY_KEY, &blob)
    }
}
