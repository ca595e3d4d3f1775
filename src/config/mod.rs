//! Configuration module for duit
//!
//! Provides XDG-compliant path resolution for the data directory and the
//! JSON files that hold ledger, monthly, and toggle state.

pub mod paths;

pub use paths::DuitPaths;
