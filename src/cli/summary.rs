//! Summary and rates CLI commands

use crate::display::{format_rates, format_summary};
use crate::error::DuitResult;
use crate::models::MonthKey;
use crate::reports::BudgetSummary;
use crate::storage::Storage;

use super::RatesOptions;

/// Handle the summary command
pub fn handle_summary_command(
    storage: &Storage,
    month: MonthKey,
    rates: &RatesOptions,
) -> DuitResult<()> {
    let state = rates.load();
    let summary = BudgetSummary::compute(storage, month, &state)?;
    print!("{}", format_summary(&summary, &state));
    Ok(())
}

/// Handle the rates command
pub fn handle_rates_command(rates: &RatesOptions) -> DuitResult<()> {
    print!("{}", format_rates(&rates.load()));
    Ok(())
}
