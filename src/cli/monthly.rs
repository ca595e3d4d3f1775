//! Monthly item CLI commands
//!
//! Implements CLI commands for recurring items and their per-month
//! enablement toggles.

use clap::Subcommand;

use crate::display::format_monthly_table;
use crate::error::{DuitError, DuitResult};
use crate::models::{MonthKey, MonthlyItem};
use crate::services::MonthlyService;
use crate::storage::Storage;

use super::ledger::apply_overrides;
use super::RatesOptions;

/// Monthly item subcommands
#[derive(Subcommand)]
pub enum MonthlyCommands {
    /// Add a monthly item (defaults to the "monthly item" template)
    Add {
        /// Item name
        #[arg(short, long)]
        name: Option<String>,
        /// Amount in the item's currency
        #[arg(short, long)]
        amount: Option<f64>,
        /// Currency code (IDR, USD, JPY)
        #[arg(short, long)]
        currency: Option<String>,
        /// Item kind (income, expense)
        #[arg(short, long)]
        kind: Option<String>,
    },
    /// List monthly items with their enablement for the active month
    List,
    /// Edit the item at a position (its id is preserved)
    Update {
        /// Row index from `monthly list`
        index: usize,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<f64>,
        /// New currency code (IDR, USD, JPY)
        #[arg(short, long)]
        currency: Option<String>,
        /// New kind (income, expense)
        #[arg(short, long)]
        kind: Option<String>,
    },
    /// Delete the item at a position (purges its toggles everywhere)
    Delete {
        /// Row index from `monthly list`
        index: usize,
    },
    /// Flip the item's enablement for the active month
    Toggle {
        /// Row index from `monthly list`
        index: usize,
    },
    /// Convert the item at a position into a ledger entry for the active month
    ToLedger {
        /// Row index from `monthly list`
        index: usize,
    },
}

/// Handle a monthly item command
pub fn handle_monthly_command(
    storage: &Storage,
    month: MonthKey,
    rates: &RatesOptions,
    cmd: MonthlyCommands,
) -> DuitResult<()> {
    let service = MonthlyService::new(storage, month);

    match cmd {
        MonthlyCommands::Add {
            name,
            amount,
            currency,
            kind,
        } => {
            let mut item = MonthlyItem::template();
            apply_overrides(&mut item.entry, name, amount, currency, kind)?;
            let added = service.append(item)?;
            println!("Added monthly item '{}' ({})", added.entry.name, added.id);
        }

        MonthlyCommands::List => {
            let items = service.items()?;
            let mut enabled = Vec::with_capacity(items.len());
            for item in &items {
                enabled.push(service.is_enabled(item.id)?);
            }
            println!("Monthly items (toggles for {})", month);
            print!("{}", format_monthly_table(&items, &enabled, &rates.load()));
        }

        MonthlyCommands::Update {
            index,
            name,
            amount,
            currency,
            kind,
        } => {
            let mut entry = service
                .items()?
                .get(index)
                .map(|item| item.entry.clone())
                .ok_or_else(|| DuitError::monthly_item_not_found(index))?;

            apply_overrides(&mut entry, name, amount, currency, kind)?;
            service.update_item(index, entry)?;
            println!("Updated monthly item {}", index);
        }

        MonthlyCommands::Delete { index } => {
            let removed = service.delete_item(index)?;
            println!("Deleted monthly item '{}'", removed.entry.name);
        }

        MonthlyCommands::Toggle { index } => {
            let item = service
                .items()?
                .get(index)
                .cloned()
                .ok_or_else(|| DuitError::monthly_item_not_found(index))?;

            let enabled = service.toggle(item.id)?;
            println!(
                "'{}' is now {} for {}",
                item.entry.name,
                if enabled { "enabled" } else { "disabled" },
                month
            );
        }

        MonthlyCommands::ToLedger { index } => {
            let entry = service.convert_to_ledger(index)?;
            println!("Converted '{}' to a ledger entry in {}", entry.name, month);
        }
    }

    Ok(())
}
