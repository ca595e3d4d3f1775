//! Ledger CLI commands
//!
//! Implements CLI commands for the active month's ledger entries. Row
//! indexes shown by `list` are the positions the editing commands take.

use clap::Subcommand;

use crate::display::format_ledger_table;
use crate::error::{DuitError, DuitResult};
use crate::models::{Currency, Entry, EntryKind, MonthKey};
use crate::services::LedgerService;
use crate::storage::Storage;

use super::RatesOptions;

/// Ledger subcommands
#[derive(Subcommand)]
pub enum LedgerCommands {
    /// Add a line item (defaults to the "example" template)
    Add {
        /// Entry name
        #[arg(short, long)]
        name: Option<String>,
        /// Amount in the entry's currency
        #[arg(short, long)]
        amount: Option<f64>,
        /// Currency code (IDR, USD, JPY)
        #[arg(short, long)]
        currency: Option<String>,
        /// Entry kind (income, expense)
        #[arg(short, long)]
        kind: Option<String>,
    },
    /// List the active month's entries
    List,
    /// Edit the entry at a position
    Update {
        /// Row index from `ledger list`
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
        /// Count the entry toward the total
        #[arg(long, conflicts_with = "deselect")]
        select: bool,
        /// Exclude the entry from the total
        #[arg(long)]
        deselect: bool,
    },
    /// Delete the entry at a position
    Delete {
        /// Row index from `ledger list`
        index: usize,
    },
    /// Convert the entry at a position into a monthly item
    ToMonthly {
        /// Row index from `ledger list`
        index: usize,
    },
}

/// Parse a currency argument, or fail with a validation error
pub(crate) fn parse_currency(raw: &str) -> DuitResult<Currency> {
    Currency::parse(raw).ok_or_else(|| {
        DuitError::Validation(format!(
            "Invalid currency: '{}'. Valid currencies: IDR, USD, JPY",
            raw
        ))
    })
}

/// Parse a kind argument, or fail with a validation error
pub(crate) fn parse_kind(raw: &str) -> DuitResult<EntryKind> {
    EntryKind::parse(raw).ok_or_else(|| {
        DuitError::Validation(format!(
            "Invalid kind: '{}'. Valid kinds: income, expense",
            raw
        ))
    })
}

/// Apply optional field overrides onto an entry
pub(crate) fn apply_overrides(
    entry: &mut Entry,
    name: Option<String>,
    amount: Option<f64>,
    currency: Option<String>,
    kind: Option<String>,
) -> DuitResult<()> {
    if let Some(name) = name {
        entry.name = name;
    }
    if let Some(amount) = amount {
        entry.amount = amount;
    }
    if let Some(currency) = currency {
        entry.currency = parse_currency(&currency)?;
    }
    if let Some(kind) = kind {
        entry.kind = parse_kind(&kind)?;
    }
    Ok(())
}

/// Handle a ledger command
pub fn handle_ledger_command(
    storage: &Storage,
    month: MonthKey,
    rates: &RatesOptions,
    cmd: LedgerCommands,
) -> DuitResult<()> {
    let service = LedgerService::new(storage, month)?;

    match cmd {
        LedgerCommands::Add {
            name,
            amount,
            currency,
            kind,
        } => {
            let mut entry = Entry::example();
            apply_overrides(&mut entry, name, amount, currency, kind)?;
            let added = service.append(entry)?;
            println!("Added '{}' to {}", added.name, month);
        }

        LedgerCommands::List => {
            let entries = service.entries()?;
            println!("Ledger for {}", month);
            print!("{}", format_ledger_table(&entries, &rates.load()));
        }

        LedgerCommands::Update {
            index,
            name,
            amount,
            currency,
            kind,
            select,
            deselect,
        } => {
            let mut entry = service
                .entries()?
                .get(index)
                .cloned()
                .ok_or_else(|| DuitError::entry_not_found(index))?;

            apply_overrides(&mut entry, name, amount, currency, kind)?;
            if select {
                entry.selected = true;
            }
            if deselect {
                entry.selected = false;
            }

            service.update_entry(index, entry)?;
            println!("Updated entry {}", index);
        }

        LedgerCommands::Delete { index } => {
            let removed = service.delete_entry(index)?;
            println!("Deleted '{}'", removed.name);
        }

        LedgerCommands::ToMonthly { index } => {
            let item = service.convert_to_monthly(index)?;
            println!("Converted '{}' to a monthly item ({})", item.entry.name, item.id);
        }
    }

    Ok(())
}
