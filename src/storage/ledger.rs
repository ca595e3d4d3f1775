//! Ledger repository for JSON storage
//!
//! Manages the per-month map of ledger entries persisted in per_month.json.
//! The first load runs the legacy migration (see `migrate`).

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{DuitError, DuitResult};
use crate::models::{Entry, MonthKey, PerMonth};

use super::file_io::write_json_atomic;
use super::migrate;

/// Repository owning the per-month ledger map
pub struct LedgerRepository {
    path: PathBuf,
    legacy_path: PathBuf,
    data: RwLock<PerMonth>,
}

fn lock_err<E: std::fmt::Display>(e: E) -> DuitError {
    DuitError::Storage(format!("Failed to acquire lock: {}", e))
}

impl LedgerRepository {
    /// Create a new ledger repository
    pub fn new(path: PathBuf, legacy_path: PathBuf) -> Self {
        Self {
            path,
            legacy_path,
            data: RwLock::new(PerMonth::new()),
        }
    }

    /// Load the per-month map from disk, migrating legacy data if present
    pub fn load(&self) -> DuitResult<()> {
        let loaded = migrate::load_per_month(&self.path, &self.legacy_path, MonthKey::current())?;

        let mut data = self.data.write().map_err(lock_err)?;
        *data = loaded;
        Ok(())
    }

    /// Save the per-month map to disk
    pub fn save(&self) -> DuitResult<()> {
        let data = self.data.read().map_err(lock_err)?;
        write_json_atomic(&self.path, &*data)
    }

    /// All month keys present, in chronological order
    pub fn months(&self) -> DuitResult<Vec<MonthKey>> {
        let data = self.data.read().map_err(lock_err)?;
        Ok(data.keys().copied().collect())
    }

    /// The entries of one month (empty if the month has no key yet)
    pub fn entries(&self, month: MonthKey) -> DuitResult<Vec<Entry>> {
        let data = self.data.read().map_err(lock_err)?;
        Ok(data.get(&month).cloned().unwrap_or_default())
    }

    /// Get one entry by position
    pub fn get(&self, month: MonthKey, index: usize) -> DuitResult<Option<Entry>> {
        let data = self.data.read().map_err(lock_err)?;
        Ok(data.get(&month).and_then(|entries| entries.get(index)).cloned())
    }

    /// Insert an empty list for the month if it has no key yet
    ///
    /// Returns true if a key was inserted (the caller decides whether to
    /// persist).
    pub fn ensure_month(&self, month: MonthKey) -> DuitResult<bool> {
        let mut data = self.data.write().map_err(lock_err)?;
        if data.contains_key(&month) {
            return Ok(false);
        }
        data.insert(month, Vec::new());
        Ok(true)
    }

    /// Append an entry to a month's list
    pub fn append(&self, month: MonthKey, entry: Entry) -> DuitResult<()> {
        let mut data = self.data.write().map_err(lock_err)?;
        data.entry(month).or_default().push(entry);
        Ok(())
    }

    /// Replace the entry at a position wholesale
    ///
    /// Returns false when the position does not exist; no other month is
    /// touched either way.
    pub fn replace(&self, month: MonthKey, index: usize, entry: Entry) -> DuitResult<bool> {
        let mut data = self.data.write().map_err(lock_err)?;
        match data.get_mut(&month).and_then(|entries| entries.get_mut(index)) {
            Some(slot) => {
                *slot = entry;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove and return the entry at a position
    pub fn remove(&self, month: MonthKey, index: usize) -> DuitResult<Option<Entry>> {
        let mut data = self.data.write().map_err(lock_err)?;
        let entries = match data.get_mut(&month) {
            Some(entries) => entries,
            None => return Ok(None),
        };
        if index >= entries.len() {
            return Ok(None);
        }
        Ok(Some(entries.remove(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Currency, EntryKind};
    use tempfile::TempDir;

    fn repo(temp_dir: &TempDir) -> LedgerRepository {
        LedgerRepository::new(
            temp_dir.path().join("per_month.json"),
            temp_dir.path().join("money.json"),
        )
    }

    fn month() -> MonthKey {
        MonthKey::parse("2024-05").unwrap()
    }

    #[test]
    fn test_load_seeds_and_saves() {
        let temp_dir = TempDir::new().unwrap();
        let repository = repo(&temp_dir);

        repository.load().unwrap();

        // migration seeded the current month
        let months = repository.months().unwrap();
        assert_eq!(months, vec![MonthKey::current()]);
    }

    #[test]
    fn test_ensure_month_inserts_once() {
        let temp_dir = TempDir::new().unwrap();
        let repository = repo(&temp_dir);

        assert!(repository.ensure_month(month()).unwrap());
        assert!(!repository.ensure_month(month()).unwrap());
        assert_eq!(repository.entries(month()).unwrap(), vec![]);
    }

    #[test]
    fn test_append_replace_remove() {
        let temp_dir = TempDir::new().unwrap();
        let repository = repo(&temp_dir);

        repository.append(month(), Entry::example()).unwrap();

        let replacement = Entry::new("kopi", EntryKind::Expense, 25000.0, Currency::Idr);
        assert!(repository.replace(month(), 0, replacement.clone()).unwrap());
        assert_eq!(repository.get(month(), 0).unwrap(), Some(replacement.clone()));

        let removed = repository.remove(month(), 0).unwrap();
        assert_eq!(removed, Some(replacement));
        assert!(repository.entries(month()).unwrap().is_empty());
    }

    #[test]
    fn test_out_of_range_is_rejected_without_side_effects() {
        let temp_dir = TempDir::new().unwrap();
        let repository = repo(&temp_dir);

        let other = MonthKey::parse("2024-06").unwrap();
        repository.append(other, Entry::example()).unwrap();

        assert!(!repository.replace(month(), 5, Entry::example()).unwrap());
        assert_eq!(repository.remove(month(), 5).unwrap(), None);

        // the populated month is untouched
        assert_eq!(repository.entries(other).unwrap().len(), 1);
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let repository = repo(&temp_dir);

        repository.append(month(), Entry::example()).unwrap();
        repository.save().unwrap();

        let reloaded = repo(&temp_dir);
        reloaded.load().unwrap();
        assert_eq!(reloaded.entries(month()).unwrap().len(), 1);
    }
}
