//! One-shot exchange-rate fetch
//!
//! Issues a single blocking GET against a public exchange-rate endpoint with
//! USD as the base currency. The response's rate map is filtered down to the
//! supported currency set and `(USD, 1.0)` is appended, since the base
//! currency is not included in its own rate map. No caching, no retry.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::DuitResult;
use crate::models::Currency;

use super::RateTable;

/// Default endpoint, USD base
pub const DEFAULT_RATES_URL: &str = "https://api.frankfurter.dev/v1/latest?base=USD";

/// The subset of the response body we care about
#[derive(Debug, Deserialize)]
struct RatesResponse {
    rates: BTreeMap<String, f64>,
}

/// Fetch the rate table from the given endpoint
pub fn fetch_rate_table(url: &str) -> DuitResult<RateTable> {
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    let body: RatesResponse = response.json()?;
    Ok(build_table(body))
}

fn build_table(response: RatesResponse) -> RateTable {
    let mut pairs: Vec<(Currency, f64)> = response
        .rates
        .iter()
        .filter_map(|(code, rate)| Currency::parse(code).map(|currency| (currency, *rate)))
        .collect();
    pairs.push((Currency::Usd, 1.0));
    RateTable::new(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(entries: &[(&str, f64)]) -> RatesResponse {
        RatesResponse {
            rates: entries
                .iter()
                .map(|(code, rate)| (code.to_string(), *rate))
                .collect(),
        }
    }

    #[test]
    fn test_filters_to_supported_currencies() {
        let table = build_table(response(&[
            ("EUR", 0.9),
            ("IDR", 15000.0),
            ("JPY", 160.0),
            ("GBP", 0.8),
        ]));

        assert_eq!(table.rate(Currency::Idr), Some(15000.0));
        assert_eq!(table.rate(Currency::Jpy), Some(160.0));
        assert_eq!(table.pairs().len(), 3); // IDR, JPY, plus appended USD
    }

    #[test]
    fn test_appends_usd_base() {
        let table = build_table(response(&[("IDR", 15000.0)]));
        assert_eq!(table.rate(Currency::Usd), Some(1.0));
    }

    #[test]
    fn test_empty_response_still_has_usd() {
        let table = build_table(response(&[]));
        assert_eq!(table.rate(Currency::Usd), Some(1.0));
        assert_eq!(table.rate(Currency::Idr), None);
    }
}
