//! Monthly item repository for JSON storage
//!
//! Manages the recurring item list (monthly.json) and the per-month
//! enable/disable toggle map (monthly_toggles.json). The two files persist
//! independently but are coupled by the item ids: removing an item must
//! purge its id from every month's toggles.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{DuitError, DuitResult};
use crate::models::{Entry, MonthKey, MonthlyItem, MonthlyItemId, MonthlyToggles};

use super::file_io::{read_json_lenient, write_json_atomic};

/// Repository owning the monthly item list and toggle map
pub struct MonthlyRepository {
    items_path: PathBuf,
    toggles_path: PathBuf,
    items: RwLock<Vec<MonthlyItem>>,
    toggles: RwLock<MonthlyToggles>,
}

fn lock_err<E: std::fmt::Display>(e: E) -> DuitError {
    DuitError::Storage(format!("Failed to acquire lock: {}", e))
}

impl MonthlyRepository {
    /// Create a new monthly repository
    pub fn new(items_path: PathBuf, toggles_path: PathBuf) -> Self {
        Self {
            items_path,
            toggles_path,
            items: RwLock::new(Vec::new()),
            toggles: RwLock::new(MonthlyToggles::new()),
        }
    }

    /// Load items and toggles from disk
    ///
    /// Missing or corrupt files become empty structures.
    pub fn load(&self) -> DuitResult<()> {
        let loaded_items: Vec<MonthlyItem> = read_json_lenient(&self.items_path);
        let loaded_toggles: MonthlyToggles = read_json_lenient(&self.toggles_path);

        *self.items.write().map_err(lock_err)? = loaded_items;
        *self.toggles.write().map_err(lock_err)? = loaded_toggles;
        Ok(())
    }

    /// Save the item list to disk
    pub fn save_items(&self) -> DuitResult<()> {
        let items = self.items.read().map_err(lock_err)?;
        write_json_atomic(&self.items_path, &*items)
    }

    /// Save the toggle map to disk
    pub fn save_toggles(&self) -> DuitResult<()> {
        let toggles = self.toggles.read().map_err(lock_err)?;
        write_json_atomic(&self.toggles_path, &*toggles)
    }

    /// All items in list order
    pub fn items(&self) -> DuitResult<Vec<MonthlyItem>> {
        let items = self.items.read().map_err(lock_err)?;
        Ok(items.clone())
    }

    /// Get one item by position
    pub fn get(&self, index: usize) -> DuitResult<Option<MonthlyItem>> {
        let items = self.items.read().map_err(lock_err)?;
        Ok(items.get(index).cloned())
    }

    /// Append an item
    pub fn append(&self, item: MonthlyItem) -> DuitResult<()> {
        let mut items = self.items.write().map_err(lock_err)?;
        items.push(item);
        Ok(())
    }

    /// Replace the entry fields at a position, keeping the existing id
    ///
    /// Returns false when the position does not exist.
    pub fn replace_entry(&self, index: usize, entry: Entry) -> DuitResult<bool> {
        let mut items = self.items.write().map_err(lock_err)?;
        match items.get_mut(index) {
            Some(item) => {
                item.entry = entry;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove and return the item at a position
    ///
    /// Toggle purging is a separate step; callers that delete an item must
    /// follow up with `purge_toggles`.
    pub fn remove(&self, index: usize) -> DuitResult<Option<MonthlyItem>> {
        let mut items = self.items.write().map_err(lock_err)?;
        if index >= items.len() {
            return Ok(None);
        }
        Ok(Some(items.remove(index)))
    }

    /// Whether an item is enabled for a month; absent entries read as enabled
    pub fn is_enabled(&self, month: MonthKey, id: MonthlyItemId) -> DuitResult<bool> {
        let toggles = self.toggles.read().map_err(lock_err)?;
        Ok(toggles
            .get(&month)
            .and_then(|map| map.get(&id))
            .copied()
            .unwrap_or(true))
    }

    /// Flip an item's enablement for a month
    ///
    /// The first toggle records false (the implicit state is enabled);
    /// later toggles flip the stored value. Returns the new state.
    pub fn toggle(&self, month: MonthKey, id: MonthlyItemId) -> DuitResult<bool> {
        let mut toggles = self.toggles.write().map_err(lock_err)?;
        let month_map = toggles.entry(month).or_default();
        let next = match month_map.get(&id) {
            None => false,
            Some(current) => !current,
        };
        month_map.insert(id, next);
        Ok(next)
    }

    /// Remove an id from every month's toggle map
    pub fn purge_toggles(&self, id: MonthlyItemId) -> DuitResult<()> {
        let mut toggles = self.toggles.write().map_err(lock_err)?;
        for month_map in toggles.values_mut() {
            month_map.remove(&id);
        }
        Ok(())
    }

    /// Snapshot of the toggle map, for export
    pub fn toggles(&self) -> DuitResult<MonthlyToggles> {
        let toggles = self.toggles.read().map_err(lock_err)?;
        Ok(toggles.clone())
    }
}
