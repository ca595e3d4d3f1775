//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the service layer.

pub mod export;
pub mod ledger;
pub mod monthly;
pub mod summary;

pub use export::handle_export_command;
pub use ledger::{handle_ledger_command, LedgerCommands};
pub use monthly::{handle_monthly_command, MonthlyCommands};
pub use summary::{handle_rates_command, handle_summary_command};

use crate::rates::RatesState;

/// How (and whether) to perform the one-shot rate fetch
///
/// Handlers only load rates for subcommands that display converted values,
/// so mutations never touch the network.
#[derive(Debug, Clone)]
pub struct RatesOptions {
    /// Endpoint returning USD-based rates
    pub url: String,
    /// Skip the fetch entirely; rates stay in the pending state
    pub offline: bool,
}

impl RatesOptions {
    /// Perform the fetch (or skip it in offline mode)
    pub fn load(&self) -> RatesState {
        RatesState::load(&self.url, self.offline)
    }
}
