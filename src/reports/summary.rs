//! Budget summary report
//!
//! Combines the active month's ledger, the monthly items, and the rate
//! state. Totals are only present when rates are available; a missing
//! table yields `None` rather than a figure computed from made-up rates.

use crate::error::DuitResult;
use crate::models::MonthKey;
use crate::rates::RatesState;
use crate::services::{LedgerService, MonthlyService};
use crate::storage::Storage;

/// Aggregated figures for one month
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSummary {
    /// The month the summary covers
    pub month: MonthKey,

    /// Ledger entries plus monthly items
    pub item_count: usize,

    /// Selected ledger entries plus enabled monthly items
    pub selected_count: usize,

    /// Remaining budget in IDR; None while rates are not available
    pub remaining_idr: Option<i64>,

    /// Monthly items total in IDR; None while rates are not available
    pub monthly_total_idr: Option<i64>,
}

impl BudgetSummary {
    /// Compute the summary for a month
    pub fn compute(storage: &Storage, month: MonthKey, rates: &RatesState) -> DuitResult<Self> {
        let ledger = LedgerService::new(storage, month)?;
        let monthly = MonthlyService::new(storage, month);

        let entries = ledger.entries()?;
        let items = monthly.items()?;

        let mut selected_count = entries.iter().filter(|e| e.selected).count();
        for item in &items {
            if monthly.is_enabled(item.id)? {
                selected_count += 1;
            }
        }

        let (remaining_idr, monthly_total_idr) = match rates.table() {
            Some(table) => (
                Some(ledger.remaining_budget(table)?),
                Some(monthly.total(table)?),
            ),
            None => (None, None),
        };

        Ok(Self {
            month,
            item_count: entries.len() + items.len(),
            selected_count,
            remaining_idr,
            monthly_total_idr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::DuitPaths;
    use crate::models::{Currency, Entry, EntryKind, MonthlyItem};
    use crate::rates::RateTable;
    use tempfile::TempDir;

    fn storage(temp_dir: &TempDir) -> Storage {
        let paths = DuitPaths::with_base_dir(temp_dir.path().to_path_buf());
        Storage::new(paths).unwrap()
    }

    fn month() -> MonthKey {
        MonthKey::parse("2024-05").unwrap()
    }

    fn ready_rates() -> RatesState {
        RatesState::Ready(RateTable::new(vec![
            (Currency::Idr, 15000.0),
            (Currency::Jpy, 160.0),
            (Currency::Usd, 1.0),
        ]))
    }

    #[test]
    fn test_totals_present_when_rates_ready() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);

        let ledger = LedgerService::new(&storage, month()).unwrap();
        ledger
            .append(Entry::new("gaji", EntryKind::Income, 100.0, Currency::Idr))
            .unwrap();
        storage
            .monthly
            .append(MonthlyItem::new(Entry::new(
                "sewa",
                EntryKind::Expense,
                30.0,
                Currency::Idr,
            )))
            .unwrap();

        let summary = BudgetSummary::compute(&storage, month(), &ready_rates()).unwrap();

        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.selected_count, 2);
        assert_eq!(summary.remaining_idr, Some(70));
        assert_eq!(summary.monthly_total_idr, Some(-30));
    }

    #[test]
    fn test_totals_absent_without_rates() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);

        let summary = BudgetSummary::compute(&storage, month(), &RatesState::Pending).unwrap();
        assert_eq!(summary.remaining_idr, None);
        assert_eq!(summary.monthly_total_idr, None);

        let summary = BudgetSummary::compute(
            &storage,
            month(),
            &RatesState::Unavailable("down".into()),
        )
        .unwrap();
        assert_eq!(summary.remaining_idr, None);
    }

    #[test]
    fn test_disabled_items_not_counted_as_selected() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage(&temp_dir);

        let item = MonthlyItem::template();
        storage.monthly.append(item.clone()).unwrap();
        storage.monthly.toggle(month(), item.id).unwrap();

        let summary = BudgetSummary::compute(&storage, month(), &ready_rates()).unwrap();
        assert_eq!(summary.item_count, 1);
        assert_eq!(summary.selected_count, 0);
    }
}
