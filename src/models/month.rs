//! Month key representation
//!
//! A `MonthKey` identifies one calendar month ("2025-08") and partitions the
//! ledger. Keys serialize through their string form so they can be used as
//! JSON object keys in the persisted per-month map.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar month used as the ledger partition key
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a month key; fails on an out-of-range month
    pub fn new(year: i32, month: u32) -> Result<Self, MonthKeyParseError> {
        if !(1..=12).contains(&month) {
            return Err(MonthKeyParseError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// The current calendar month in local time
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Parse a "YYYY-MM" string
    pub fn parse(s: &str) -> Result<Self, MonthKeyParseError> {
        let s = s.trim();
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 2 {
            return Err(MonthKeyParseError::InvalidFormat(s.to_string()));
        }

        let year: i32 = parts[0]
            .parse()
            .map_err(|_| MonthKeyParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = parts[1]
            .parse()
            .map_err(|_| MonthKeyParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }

    /// The year component
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month component (1-12)
    pub fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = MonthKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MonthKey {
    type Error = MonthKeyParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}

/// Error type for month key parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthKeyParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for MonthKeyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthKeyParseError::InvalidFormat(s) => write!(f, "Invalid month format: {}", s),
            MonthKeyParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for MonthKeyParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_parse_and_display() {
        let key = MonthKey::parse("2024-05").unwrap();
        assert_eq!(key.year(), 2024);
        assert_eq!(key.month(), 5);
        assert_eq!(key.to_string(), "2024-05");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(MonthKey::parse("2024").is_err());
        assert!(MonthKey::parse("2024-13").is_err());
        assert!(MonthKey::parse("2024-00").is_err());
        assert!(MonthKey::parse("not-a-month").is_err());
    }

    #[test]
    fn test_ordering() {
        let a = MonthKey::parse("2024-12").unwrap();
        let b = MonthKey::parse("2025-01").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_serializes_as_map_key() {
        let mut map: BTreeMap<MonthKey, Vec<u32>> = BTreeMap::new();
        map.insert(MonthKey::parse("2024-05").unwrap(), vec![1]);

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"2024-05":[1]}"#);

        let back: BTreeMap<MonthKey, Vec<u32>> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn test_current_is_valid() {
        let key = MonthKey::current();
        assert!((1..=12).contains(&key.month()));
    }
}
