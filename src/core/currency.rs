//! Currency conversion types and abstractions

use anyhow::{Result, bail};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// An uppercase currency code such as `USD`.
///
/// Codes are not checked against a currency registry; an unknown code only
/// shows up as a missing rate during lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CurrencyCode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        if code.is_empty() {
            bail!("Currency code cannot be empty");
        }
        Ok(CurrencyCode(code.to_uppercase()))
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub amount: f64,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
}

impl ConversionRequest {
    pub fn new(amount: f64, from: &str, to: &str) -> Result<Self> {
        if !amount.is_finite() || amount < 0.0 {
            bail!("Amount must be a non-negative number, got {amount}");
        }
        Ok(ConversionRequest {
            amount,
            from: from.parse()?,
            to: to.parse()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionResult {
    pub converted_amount: f64,
    pub rate: f64,
}

/// Latest conversion rates for one base currency.
#[derive(Debug, Clone)]
pub struct RateTable {
    pub base: CurrencyCode,
    pub rates: HashMap<String, f64>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl RateTable {
    pub fn rate_for(&self, code: &CurrencyCode) -> Option<f64> {
        self.rates.get(code.as_str()).copied()
    }
}

#[derive(Error, Debug)]
pub enum ConversionError {
    /// The lookup service could not be reached, answered with a failure
    /// status, or sent a body we could not read.
    #[error("Rate service error for {base}: {message}")]
    Service {
        base: CurrencyCode,
        status: Option<StatusCode>,
        message: String,
    },

    #[error("No rate for {target} in {base} conversion table")]
    MissingRate {
        base: CurrencyCode,
        target: CurrencyCode,
    },
}

#[async_trait]
pub trait RateTableProvider: Send + Sync {
    async fn latest_rates(&self, base: &CurrencyCode) -> Result<RateTable, ConversionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code_is_case_normalized() {
        let lower: CurrencyCode = "usd".parse().unwrap();
        let upper: CurrencyCode = "USD".parse().unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.as_str(), "USD");

        let padded: CurrencyCode = "  eur ".parse().unwrap();
        assert_eq!(padded.to_string(), "EUR");
    }

    #[test]
    fn test_empty_currency_code_rejected() {
        assert!("".parse::<CurrencyCode>().is_err());
        assert!("   ".parse::<CurrencyCode>().is_err());
    }

    #[test]
    fn test_conversion_request_validation() {
        let req = ConversionRequest::new(100.0, "usd", "eur").unwrap();
        assert_eq!(req.from.as_str(), "USD");
        assert_eq!(req.to.as_str(), "EUR");

        assert!(ConversionRequest::new(0.0, "USD", "EUR").is_ok());

        let err = ConversionRequest::new(-1.0, "USD", "EUR").unwrap_err();
        assert!(err.to_string().contains("non-negative"));
        assert!(ConversionRequest::new(f64::NAN, "USD", "EUR").is_err());
        assert!(ConversionRequest::new(f64::INFINITY, "USD", "EUR").is_err());
        assert!(ConversionRequest::new(1.0, "USD", "").is_err());
    }

    #[test]
    fn test_rate_table_lookup() {
        let table = RateTable {
            base: "USD".parse().unwrap(),
            rates: HashMap::from([("EUR".to_string(), 0.93), ("USD".to_string(), 1.0)]),
            last_updated: None,
        };
        assert_eq!(table.rate_for(&"eur".parse().unwrap()), Some(0.93));
        assert_eq!(table.rate_for(&"XYZ".parse().unwrap()), None);
    }
}
