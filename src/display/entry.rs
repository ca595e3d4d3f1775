//! Entry display formatting
//!
//! Formats ledger entries and monthly items as indexed tables. Row indexes
//! are the positions the update/delete/convert commands take, so the table
//! order must match list order.

use crate::models::{Entry, MonthlyItem};
use crate::rates::RatesState;

use super::summary::format_idr;

/// The converted IDR value for one entry, or a placeholder
fn idr_cell(entry: &Entry, rates: &RatesState) -> String {
    match rates.table() {
        Some(table) => match table.to_idr(entry.amount, entry.currency) {
            Ok(idr) => format_idr(idr),
            Err(_) => "n/a".to_string(),
        },
        None => "-".to_string(),
    }
}

fn name_width<'a, I: Iterator<Item = &'a str>>(names: I) -> usize {
    names.map(|n| n.len()).max().unwrap_or(4).max(4)
}

/// Format the active month's ledger entries as a table
pub fn format_ledger_table(entries: &[Entry], rates: &RatesState) -> String {
    if entries.is_empty() {
        return "No entries this month.\n".to_string();
    }

    let name_width = name_width(entries.iter().map(|e| e.name.as_str()));

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:<3}  {:<name_width$}  {:<7}  {:>12}  {:<3}  {:>14}\n",
        "#", "Sel", "Name", "Kind", "Amount", "Cur", "IDR Value",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:->3}  {:->3}  {:-<name_width$}  {:-<7}  {:->12}  {:-<3}  {:->14}\n",
        "", "", "", "", "", "", "",
        name_width = name_width,
    ));

    for (index, entry) in entries.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}  {:<3}  {:<name_width$}  {:<7}  {:>12}  {:<3}  {:>14}\n",
            index,
            if entry.selected { "[x]" } else { "[ ]" },
            entry.name,
            entry.kind.to_string(),
            entry.amount,
            entry.currency.code(),
            idr_cell(entry, rates),
            name_width = name_width,
        ));
    }

    output
}

/// Format the monthly items as a table
///
/// `enabled` must be index-aligned with `items` and reflect the active
/// month's toggles.
pub fn format_monthly_table(items: &[MonthlyItem], enabled: &[bool], rates: &RatesState) -> String {
    if items.is_empty() {
        return "No monthly items.\n".to_string();
    }

    let name_width = name_width(items.iter().map(|i| i.entry.name.as_str()));

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:<3}  {:<name_width$}  {:<7}  {:>12}  {:<3}  {:>14}  {}\n",
        "#", "On", "Name", "Kind", "Amount", "Cur", "IDR Value", "Id",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:->3}  {:->3}  {:-<name_width$}  {:-<7}  {:->12}  {:-<3}  {:->14}  {:-<8}\n",
        "", "", "", "", "", "", "", "",
        name_width = name_width,
    ));

    for (index, item) in items.iter().enumerate() {
        let on = enabled.get(index).copied().unwrap_or(true);
        let short_id = item.id.to_string();
        output.push_str(&format!(
            "{:>3}  {:<3}  {:<name_width$}  {:<7}  {:>12}  {:<3}  {:>14}  {}\n",
            index,
            if on { "[x]" } else { "[ ]" },
            item.entry.name,
            item.entry.kind.to_string(),
            item.entry.amount,
            item.entry.currency.code(),
            idr_cell(&item.entry, rates),
            &short_id[..8],
            name_width = name_width,
        ));
    }

    output
}
