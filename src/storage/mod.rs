//! Storage layer for duit
//!
//! Provides JSON file storage with atomic writes, lenient reads, and the
//! one-time legacy migration.

pub mod file_io;
pub mod ledger;
pub mod migrate;
pub mod monthly;

pub use file_io::{read_json_lenient, write_json_atomic};
pub use ledger::LedgerRepository;
pub use monthly::MonthlyRepository;

use crate::config::paths::DuitPaths;
use crate::error::DuitError;

/// Main storage coordinator that provides access to both repositories
pub struct Storage {
    paths: DuitPaths,
    pub ledger: LedgerRepository,
    pub monthly: MonthlyRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: DuitPaths) -> Result<Self, DuitError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            ledger: LedgerRepository::new(paths.per_month_file(), paths.legacy_file()),
            monthly: MonthlyRepository::new(paths.monthly_file(), paths.monthly_toggles_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &DuitPaths {
        &self.paths
    }

    /// Load all data from disk (runs the legacy migration on first load)
    pub fn load_all(&self) -> Result<(), DuitError> {
        self.ledger.load()?;
        self.monthly.load()?;
        Ok(())
    }
}
