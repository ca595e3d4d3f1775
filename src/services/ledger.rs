//! Ledger service
//!
//! Business logic for the per-month ledger: activation of a month, entry
//! CRUD, conversion to the monthly store, and the remaining-budget
//! aggregate. Every mutation persists synchronously before returning.

use crate::error::{DuitError, DuitResult};
use crate::models::{Entry, MonthKey, MonthlyItem};
use crate::rates::RateTable;
use crate::storage::Storage;

/// Service for ledger operations against one active month
pub struct LedgerService<'a> {
    storage: &'a Storage,
    active_month: MonthKey,
}

impl<'a> LedgerService<'a> {
    /// Create a ledger service for the given month
    ///
    /// Activation inserts (and persists) an empty list for the month if it
    /// has no key yet, so every subsequent read finds one.
    pub fn new(storage: &'a Storage, month: MonthKey) -> DuitResult<Self> {
        let service = Self {
            storage,
            active_month: month,
        };
        service.ensure_active_month()?;
        Ok(service)
    }

    fn ensure_active_month(&self) -> DuitResult<()> {
        if self.storage.ledger.ensure_month(self.active_month)? {
            self.storage.ledger.save()?;
        }
        Ok(())
    }

    /// Switch the active month, creating its key if needed
    pub fn set_active_month(&mut self, month: MonthKey) -> DuitResult<()> {
        self.active_month = month;
        self.ensure_active_month()
    }

    /// The month this service operates on
    pub fn active_month(&self) -> MonthKey {
        self.active_month
    }

    /// The active month's entries in list order
    pub fn entries(&self) -> DuitResult<Vec<Entry>> {
        self.storage.ledger.entries(self.active_month)
    }

    /// All months that have a ledger key, newest first
    pub fn months(&self) -> DuitResult<Vec<MonthKey>> {
        let mut months = self.storage.ledger.months()?;
        months.reverse();
        Ok(months)
    }

    /// Append the default "example" entry to the active month
    pub fn add_entry(&self) -> DuitResult<Entry> {
        self.append(Entry::example())
    }

    /// Append an entry to the active month
    pub fn append(&self, entry: Entry) -> DuitResult<Entry> {
        self.storage.ledger.append(self.active_month, entry.clone())?;
        self.storage.ledger.save()?;
        Ok(entry)
    }

    /// Replace the entry at a position wholesale
    pub fn update_entry(&self, index: usize, entry: Entry) -> DuitResult<()> {
        if !self.storage.ledger.replace(self.active_month, index, entry)? {
            return Err(DuitError::entry_not_found(index));
        }
        self.storage.ledger.save()
    }

    /// Remove and return the entry at a position
    pub fn delete_entry(&self, index: usize) -> DuitResult<Entry> {
        let removed = self
            .storage
            .ledger
            .remove(self.active_month, index)?
            .ok_or_else(|| DuitError::entry_not_found(index))?;
        self.storage.ledger.save()?;
        Ok(removed)
    }

    /// Move the entry at a position into the monthly store
    ///
    /// The new monthly item gets a fresh id with selected reset to true.
    /// The append to the monthly store is persisted before the removal from
    /// the ledger: a failure between the two saves leaves a duplicate line
    /// rather than a lost one.
    pub fn convert_to_monthly(&self, index: usize) -> DuitResult<MonthlyItem> {
        let source = self
            .storage
            .ledger
            .get(self.active_month, index)?
            .ok_or_else(|| DuitError::entry_not_found(index))?;

        let item = MonthlyItem::from_entry(source);
        self.storage.monthly.append(item.clone())?;
        self.storage.monthly.save_items()?;

        self.storage.ledger.remove(self.active_month, index)?;
        self.storage.ledger.save()?;

        Ok(item)
    }

    /// Remaining budget for the active month, in IDR
    ///
    /// Sums selected ledger entries of the active month plus every monthly
    /// item enabled for that month (income positive, expense negative).
    /// Monthly items are gated by their toggle, not by month membership.
    pub fn remaining_budget(&self, rates: &RateTable) -> DuitResult<i64> {
        let mut total: i64 = 0;

        for entry in self.entries()? {
            if entry.selected {
                total += rates.signed_idr(&entry)?;
            }
        }

        for item in self.storage.monthly.items()? {
            if self.storage.monthly.is_enabled(self.active_month, item.id)? {
                total += rates.signed_idr(&item.entry)?;
            }
        }

        Ok(total)
    }
}
