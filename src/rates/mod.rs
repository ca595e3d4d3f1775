//! Exchange rates and IDR conversion
//!
//! All aggregates report in IDR. Other currencies are normalized through a
//! USD-based rate table: the IDR rate is the IDR-per-USD multiplier, and JPY
//! amounts go through USD on the way to IDR.

pub mod fetch;

pub use fetch::{fetch_rate_table, DEFAULT_RATES_URL};

use std::fmt;

use crate::models::{Currency, Entry};

/// The fetched set of conversion multipliers relative to USD
///
/// Immutable for the session. A successfully fetched table always contains
/// `(USD, 1.0)`; lookups return the first pair matching the code.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    pairs: Vec<(Currency, f64)>,
}

impl RateTable {
    /// Build a table from (currency, rate) pairs
    pub fn new(pairs: Vec<(Currency, f64)>) -> Self {
        Self { pairs }
    }

    /// Whether the table holds no rates at all
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The pairs in fetch order, for display
    pub fn pairs(&self) -> &[(Currency, f64)] {
        &self.pairs
    }

    /// Look up the rate for a currency, if present
    pub fn rate(&self, currency: Currency) -> Option<f64> {
        self.pairs
            .iter()
            .find(|(code, _)| *code == currency)
            .map(|(_, rate)| *rate)
    }

    /// Convert an amount in the given currency to whole IDR
    ///
    /// Results are floored. An empty table fails outright; a table that is
    /// missing a required rate is reported explicitly rather than treated
    /// as zero.
    pub fn to_idr(&self, amount: f64, currency: Currency) -> Result<i64, RateError> {
        if self.pairs.is_empty() {
            return Err(RateError::EmptyTable);
        }

        let idr = match currency {
            Currency::Idr => amount,
            Currency::Usd => {
                let idr_rate = self
                    .rate(Currency::Idr)
                    .ok_or(RateError::MissingRate(Currency::Idr))?;
                amount * idr_rate
            }
            Currency::Jpy => {
                let idr_rate = self
                    .rate(Currency::Idr)
                    .ok_or(RateError::MissingRate(Currency::Idr))?;
                let jpy_rate = self
                    .rate(Currency::Jpy)
                    .ok_or(RateError::MissingRate(Currency::Jpy))?;
                amount * idr_rate / jpy_rate
            }
        };

        Ok(idr.floor() as i64)
    }

    /// Convert an entry to signed IDR: income positive, expense negative
    pub fn signed_idr(&self, entry: &Entry) -> Result<i64, RateError> {
        let idr = self.to_idr(entry.amount, entry.currency)?;
        Ok(entry.kind.sign() * idr)
    }
}

/// Error type for rate lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateError {
    /// The table holds no rates (fetch returned nothing usable)
    EmptyTable,
    /// A rate required for the conversion is not in the table
    MissingRate(Currency),
}

impl fmt::Display for RateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateError::EmptyTable => write!(f, "rate table is empty"),
            RateError::MissingRate(c) => write!(f, "no rate for {}", c),
        }
    }
}

impl std::error::Error for RateError {}

impl From<RateError> for crate::error::DuitError {
    fn from(err: RateError) -> Self {
        Self::Rates(err.to_string())
    }
}

/// Observable state of the one-shot rate fetch
///
/// Totals are only computable in the `Ready` state; the display layer shows
/// a placeholder for the other two instead of a wrong number.
#[derive(Debug, Clone)]
pub enum RatesState {
    /// Not fetched (offline mode)
    Pending,
    /// Fetch succeeded
    Ready(RateTable),
    /// Fetch or parse failed; no retry
    Unavailable(String),
}

impl RatesState {
    /// Perform the one-shot fetch, or skip it in offline mode
    pub fn load(url: &str, offline: bool) -> Self {
        if offline {
            return Self::Pending;
        }
        match fetch_rate_table(url) {
            Ok(table) => Self::Ready(table),
            Err(err) => Self::Unavailable(err.to_string()),
        }
    }

    /// The table, if ready
    pub fn table(&self) -> Option<&RateTable> {
        match self {
            Self::Ready(table) => Some(table),
            _ => None,
        }
    }
}
