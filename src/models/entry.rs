//! Ledger entry model
//!
//! Represents a single income or expense line item. Amounts are plain f64
//! values in the entry's own currency; conversion to the IDR reporting
//! currency happens in the rates module.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of currencies an entry can be denominated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Indonesian rupiah, the reporting currency
    Idr,
    /// United States dollar, the rate-table base
    Usd,
    /// Japanese yen
    Jpy,
}

impl Currency {
    /// All supported currencies, in display order
    pub const ALL: [Currency; 3] = [Currency::Idr, Currency::Usd, Currency::Jpy];

    /// Canonical currency code
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Idr => "IDR",
            Currency::Usd => "USD",
            Currency::Jpy => "JPY",
        }
    }

    /// Parse a currency code (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IDR" => Some(Currency::Idr),
            "USD" => Some(Currency::Usd),
            "JPY" => Some(Currency::Jpy),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Whether an entry adds to or subtracts from the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[default]
    Income,
    Expense,
}

impl EntryKind {
    /// Parse an entry kind (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Some(EntryKind::Income),
            "expense" => Some(EntryKind::Expense),
            _ => None,
        }
    }

    /// Sign applied when aggregating: income positive, expense negative
    pub const fn sign(self) -> i64 {
        match self {
            EntryKind::Income => 1,
            EntryKind::Expense => -1,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Income => write!(f, "income"),
            EntryKind::Expense => write!(f, "expense"),
        }
    }
}

/// A single income/expense line item
///
/// Edits replace the whole entry at its list position; there is no partial
/// field update at this level. The serialized field name for `kind` is
/// `type` to match the persisted JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Human label for the line
    pub name: String,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: EntryKind,

    /// Amount in `currency` units; expected non-negative, not validated
    pub amount: f64,

    /// Currency the amount is denominated in
    pub currency: Currency,

    /// Whether the entry counts toward the ledger total
    pub selected: bool,
}

impl Entry {
    /// Create an entry; `selected` defaults to true
    pub fn new(name: impl Into<String>, kind: EntryKind, amount: f64, currency: Currency) -> Self {
        Self {
            name: name.into(),
            kind,
            amount,
            currency,
            selected: true,
        }
    }

    /// The default template appended by "add line"
    pub fn example() -> Self {
        Self::new("example", EntryKind::Income, 50000.0, Currency::Idr)
    }
}
