//! Core data models for duit
//!
//! This module contains the data structures of the budgeting domain:
//! ledger entries, monthly (recurring) items, and the month keys that
//! partition the ledger.

pub mod entry;
pub mod month;
pub mod monthly;

pub use entry::{Currency, Entry, EntryKind};
pub use month::{MonthKey, MonthKeyParseError};
pub use monthly::{MonthlyItem, MonthlyItemId};

use std::collections::BTreeMap;

/// Ordered map from month key to that month's ledger entries
pub type PerMonth = BTreeMap<MonthKey, Vec<Entry>>;

/// Per-month enablement of monthly items; absence means "enabled"
pub type MonthlyToggles = BTreeMap<MonthKey, BTreeMap<MonthlyItemId, bool>>;
