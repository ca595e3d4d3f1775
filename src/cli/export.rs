//! Export CLI command
//!
//! Prints the JSON snapshot to stdout so it can be redirected to a backup
//! file. Nothing reads it back in; restoring is a manual operation.

use std::io::{self, Write};

use crate::error::{DuitError, DuitResult};
use crate::export::Snapshot;
use crate::storage::Storage;

/// Handle the export command
pub fn handle_export_command(storage: &Storage) -> DuitResult<()> {
    let snapshot = Snapshot::from_storage(storage)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    snapshot.write_to(&mut handle)?;
    handle
        .flush()
        .map_err(|e| DuitError::Export(format!("Failed to flush snapshot: {}", e)))?;

    Ok(())
}
