//! Legacy storage migration
//!
//! Earlier versions kept a single flat collection: a JSON array whose first
//! element holds a `moneys` list. The current format partitions entries per
//! month. This module performs the one-way, best-effort transform at first
//! load of the ledger file.
//!
//! Policy, in order:
//! 1. the per-month file parses to a non-empty map → used as-is;
//! 2. the legacy file holds a non-empty `moneys` list → wrapped under the
//!    current month's key and persisted under the new file (the legacy file
//!    is never written);
//! 3. otherwise → seeded with a fixed default set of example entries.

use std::path::Path;

use serde::Deserialize;

use crate::error::DuitResult;
use crate::models::{Currency, Entry, EntryKind, MonthKey, PerMonth};

use super::file_io::{read_json_lenient, write_json_atomic};

/// Shape of one element of the legacy array
#[derive(Debug, Default, Deserialize)]
struct LegacyBlock {
    #[serde(default)]
    moneys: Vec<Entry>,
}

/// The seed entries used when no usable data exists
pub fn default_entries() -> Vec<Entry> {
    vec![
        Entry::new("gaji", EntryKind::Income, 3500000.0, Currency::Idr),
        Entry::new("yt premium", EntryKind::Expense, 50000.0, Currency::Idr),
        Entry::new("t3-chat", EntryKind::Expense, 8.0, Currency::Usd),
    ]
}

/// Load the per-month ledger map, migrating or seeding if needed
///
/// `current_month` is the key migrated/seeded data is filed under. Parse
/// failures anywhere are swallowed as "no usable data."
pub fn load_per_month<P: AsRef<Path>>(
    per_month_path: P,
    legacy_path: P,
    current_month: MonthKey,
) -> DuitResult<PerMonth> {
    let existing: PerMonth = read_json_lenient(&per_month_path);
    if !existing.is_empty() {
        return Ok(existing);
    }

    let legacy: Vec<LegacyBlock> = read_json_lenient(&legacy_path);
    if let Some(block) = legacy.into_iter().next() {
        if !block.moneys.is_empty() {
            let mut migrated = PerMonth::new();
            migrated.insert(current_month, block.moneys);
            write_json_atomic(&per_month_path, &migrated)?;
            return Ok(migrated);
        }
    }

    let mut seeded = PerMonth::new();
    seeded.insert(current_month, default_entries());
    write_json_atomic(&per_month_path, &seeded)?;
    Ok(seeded)
}
