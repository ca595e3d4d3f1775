//! Service layer for duit
//!
//! The service layer provides business logic on top of the storage layer:
//! month activation, entry and item operations, conversions between the two
//! stores, and the aggregate totals.

pub mod ledger;
pub mod monthly;

pub use ledger::LedgerService;
pub use monthly::MonthlyService;
