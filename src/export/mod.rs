//! Export functionality for duit
//!
//! A read-only JSON snapshot of the persisted structures for manual backup.
//! There is no import path; the snapshot is for copying out only.

pub mod json;

pub use json::Snapshot;
