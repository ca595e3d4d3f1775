//! duit - Terminal-based monthly budget tracker
//!
//! This library provides the core functionality for the duit budgeting
//! application: a per-month ledger of income/expense line items, a list of
//! recurring monthly items with per-month enablement, and running totals
//! converted to IDR with fetched exchange rates.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management for the data directory
//! - `error`: Custom error types
//! - `models`: Core data models (entries, monthly items, month keys)
//! - `rates`: Exchange-rate table, IDR conversion, and the one-shot fetch
//! - `storage`: JSON file storage layer with legacy migration
//! - `services`: Business logic layer over both stores
//! - `reports`: Budget summary aggregation
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers
//! - `export`: Read-only JSON snapshot for backups
//!
//! # Example
//!
//! ```rust,ignore
//! use duit::config::paths::DuitPaths;
//! use duit::storage::Storage;
//!
//! let paths = DuitPaths::new()?;
//! let storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod rates;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::DuitError;
