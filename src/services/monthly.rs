//! Monthly item service
//!
//! Business logic for recurring items: CRUD with id preservation, per-month
//! enablement toggles with cascading cleanup, conversion back into the
//! ledger, and the monthly total. Every mutation persists synchronously.

use crate::error::{DuitError, DuitResult};
use crate::models::{Entry, MonthKey, MonthlyItem, MonthlyItemId};
use crate::rates::RateTable;
use crate::storage::Storage;

/// Service for monthly item operations against one active month
pub struct MonthlyService<'a> {
    storage: &'a Storage,
    active_month: MonthKey,
}

impl<'a> MonthlyService<'a> {
    /// Create a monthly service for the given month
    pub fn new(storage: &'a Storage, month: MonthKey) -> Self {
        Self {
            storage,
            active_month: month,
        }
    }

    /// All monthly items in list order
    pub fn items(&self) -> DuitResult<Vec<MonthlyItem>> {
        self.storage.monthly.items()
    }

    /// Append the default "monthly item" template
    pub fn add_item(&self) -> DuitResult<MonthlyItem> {
        self.append(MonthlyItem::template())
    }

    /// Append a monthly item
    pub fn append(&self, item: MonthlyItem) -> DuitResult<MonthlyItem> {
        self.storage.monthly.append(item.clone())?;
        self.storage.monthly.save_items()?;
        Ok(item)
    }

    /// Replace the entry fields at a position, preserving the item's id
    pub fn update_item(&self, index: usize, entry: Entry) -> DuitResult<()> {
        if !self.storage.monthly.replace_entry(index, entry)? {
            return Err(DuitError::monthly_item_not_found(index));
        }
        self.storage.monthly.save_items()
    }

    /// Remove the item at a position and purge its toggles everywhere
    pub fn delete_item(&self, index: usize) -> DuitResult<MonthlyItem> {
        let removed = self
            .storage
            .monthly
            .remove(index)?
            .ok_or_else(|| DuitError::monthly_item_not_found(index))?;
        self.storage.monthly.save_items()?;

        self.storage.monthly.purge_toggles(removed.id)?;
        self.storage.monthly.save_toggles()?;

        Ok(removed)
    }

    /// Whether an item is enabled for the active month
    pub fn is_enabled(&self, id: MonthlyItemId) -> DuitResult<bool> {
        self.storage.monthly.is_enabled(self.active_month, id)
    }

    /// Flip an item's enablement for the active month; returns the new state
    pub fn toggle(&self, id: MonthlyItemId) -> DuitResult<bool> {
        let enabled = self.storage.monthly.toggle(self.active_month, id)?;
        self.storage.monthly.save_toggles()?;
        Ok(enabled)
    }

    /// Move the item at a position into the active month's ledger
    ///
    /// The ledger gains a plain entry (id dropped, selected reset to true)
    /// in the *currently active* month, regardless of where the item was
    /// toggled on. The ledger append is persisted before the item removal:
    /// a failure between the two saves leaves a duplicate line rather than
    /// a lost one.
    pub fn convert_to_ledger(&self, index: usize) -> DuitResult<Entry> {
        let source = self
            .storage
            .monthly
            .get(index)?
            .ok_or_else(|| DuitError::monthly_item_not_found(index))?;

        let mut entry = source.entry.clone();
        entry.selected = true;

        self.storage.ledger.ensure_month(self.active_month)?;
        self.storage.ledger.append(self.active_month, entry.clone())?;
        self.storage.ledger.save()?;

        self.storage.monthly.remove(index)?;
        self.storage.monthly.save_items()?;
        self.storage.monthly.purge_toggles(source.id)?;
        self.storage.monthly.save_toggles()?;

        Ok(entry)
    }

    /// Signed IDR total over items enabled for the active month
    pub fn total(&self, rates: &RateTable) -> DuitResult<i64> {
        let mut total: i64 = 0;
        for item in self.items()? {
            if self.is_enabled(item.id)? {
                total += rates.signed_idr(&item.entry)?;
            }
        }
        Ok(total)
    }
}
