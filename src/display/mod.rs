//! Display formatting for duit
//!
//! Formats ledger rows, monthly items, rates, and the summary for terminal
//! output. All functions return strings; printing is the caller's job.

pub mod entry;
pub mod summary;

pub use entry::{format_ledger_table, format_monthly_table};
pub use summary::{format_idr, format_rates, format_summary};
