//! Monthly (recurring) item model
//!
//! A monthly item is an entry with a stable identifier. The id is generated
//! once at creation, survives edits, and is the join key for the per-month
//! enable/disable toggle map.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::entry::{Currency, Entry, EntryKind};

/// Stable identifier for a monthly item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthlyItemId(Uuid);

impl MonthlyItemId {
    /// Create a new random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for MonthlyItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MonthlyItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MonthlyItemId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A recurring line item, independent of any single month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyItem {
    /// Stable identity, preserved across edits
    pub id: MonthlyItemId,

    /// The entry fields (name, type, amount, currency, selected)
    #[serde(flatten)]
    pub entry: Entry,
}

impl MonthlyItem {
    /// Create a monthly item with a fresh id
    pub fn new(entry: Entry) -> Self {
        Self {
            id: MonthlyItemId::new(),
            entry,
        }
    }

    /// The default template appended by "add monthly"
    pub fn template() -> Self {
        Self::new(Entry::new(
            "monthly item",
            EntryKind::Expense,
            50000.0,
            Currency::Idr,
        ))
    }

    /// Build a monthly item from a ledger entry
    ///
    /// Used by ledger-to-monthly conversion: fresh id, selected reset to true.
    pub fn from_entry(mut entry: Entry) -> Self {
        entry.selected = true;
        Self::new(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(MonthlyItemId::new(), MonthlyItemId::new());
    }

    #[test]
    fn test_id_serializes_as_string() {
        let id = MonthlyItemId::new();
        let json = serde_json::to_string(&id).unwrap();
        let back: MonthlyItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
        assert!(json.starts_with('"'));
    }

    #[test]
    fn test_template_defaults() {
        let item = MonthlyItem::template();
        assert_eq!(item.entry.name, "monthly item");
        assert_eq!(item.entry.kind, EntryKind::Expense);
        assert_eq!(item.entry.amount, 50000.0);
        assert_eq!(item.entry.currency, Currency::Idr);
        assert!(item.entry.selected);
    }

    #[test]
    fn test_entry_fields_are_flattened() {
        let item = MonthlyItem::template();
        let json = serde_json::to_value(&item).unwrap();

        // id sits beside the entry fields, not nested under "entry"
        assert!(json.get("id").is_some());
        assert_eq!(json["name"], "monthly item");
        assert_eq!(json["type"], "expense");
        assert!(json.get("entry").is_none());
    }

    #[test]
    fn test_from_entry_resets_selected() {
        let mut entry = Entry::new("rent", EntryKind::Expense, 100.0, Currency::Usd);
        entry.selected = false;

        let item = MonthlyItem::from_entry(entry.clone());
        assert!(item.entry.selected);
        assert_eq!(item.entry.name, entry.name);
        assert_eq!(item.entry.amount, entry.amount);
    }
}
