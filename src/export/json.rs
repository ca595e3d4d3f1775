//! JSON export functionality
//!
//! Serializes the three persisted structures under the same top-level names
//! the storage files use, so a snapshot doubles as a faithful backup of the
//! on-disk state.

use std::io::Write;

use serde::Serialize;

use crate::error::{DuitError, DuitResult};
use crate::models::{MonthlyItem, MonthlyToggles, PerMonth};
use crate::storage::Storage;

/// Read-only snapshot of everything duit persists
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Month-partitioned ledger entries
    pub per_month: PerMonth,

    /// Monthly (recurring) items
    pub monthly: Vec<MonthlyItem>,

    /// Per-month enablement of monthly items
    pub monthly_toggles: MonthlyToggles,
}

impl Snapshot {
    /// Build a snapshot from the loaded storage
    pub fn from_storage(storage: &Storage) -> DuitResult<Self> {
        let mut per_month = PerMonth::new();
        for month in storage.ledger.months()? {
            per_month.insert(month, storage.ledger.entries(month)?);
        }

        Ok(Self {
            per_month,
            monthly: storage.monthly.items()?,
            monthly_toggles: storage.monthly.toggles()?,
        })
    }

    /// Write the snapshot as pretty-printed JSON
    pub fn write_to<W: Write>(&self, writer: &mut W) -> DuitResult<()> {
        serde_json::to_writer_pretty(&mut *writer, self)
            .map_err(|e| DuitError::Export(format!("Failed to serialize snapshot: {}", e)))?;
        writer
            .write_all(b"\n")
            .map_err(|e| DuitError::Export(format!("Failed to write snapshot: {}", e)))?;
        Ok(())
    }

    /// Render the snapshot as a pretty-printed JSON string
    pub fn to_json_string(&self) -> DuitResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DuitError::Export(format!("Failed to serialize snapshot: {}", e)))
    }
}
