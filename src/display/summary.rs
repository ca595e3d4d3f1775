//! Summary and rates display formatting

use crate::rates::RatesState;
use crate::reports::BudgetSummary;

/// Format a whole-IDR amount with thousands separators ("Rp 3,500,000")
pub fn format_idr(idr: i64) -> String {
    let digits = idr.abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if idr < 0 {
        format!("-Rp {}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}

/// Human label for a total that may not be computable
fn total_cell(total: Option<i64>, rates: &RatesState) -> String {
    match total {
        Some(idr) => format_idr(idr),
        None => match rates {
            RatesState::Pending => "rates not loaded".to_string(),
            RatesState::Unavailable(reason) => format!("rates unavailable ({})", reason),
            RatesState::Ready(_) => "n/a".to_string(),
        },
    }
}

/// Format the budget summary block
pub fn format_summary(summary: &BudgetSummary, rates: &RatesState) -> String {
    let mut output = String::new();
    output.push_str(&format!("Budget summary for {}\n", summary.month));
    output.push_str("=========================\n");
    output.push_str(&format!(
        "Items:            {} (selected: {})\n",
        summary.item_count, summary.selected_count
    ));
    output.push_str(&format!(
        "Monthly total:    {}\n",
        total_cell(summary.monthly_total_idr, rates)
    ));
    output.push_str(&format!(
        "Remaining budget: {}\n",
        total_cell(summary.remaining_idr, rates)
    ));
    output
}

/// Format the rate table (USD base)
pub fn format_rates(rates: &RatesState) -> String {
    match rates {
        RatesState::Pending => "rates not loaded (offline)\n".to_string(),
        RatesState::Unavailable(reason) => format!("rates unavailable ({})\n", reason),
        RatesState::Ready(table) => {
            let mut output = String::from("Rates (USD base)\n");
            for (currency, rate) in table.pairs() {
                output.push_str(&format!("  {:<3}  {}\n", currency.code(), rate));
            }
            output
        }
    }
}
