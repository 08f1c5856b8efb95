//! Statement money: parsing the `1,234.56` shape and rendering `-$1,234.56`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    #[error("malformed statement number: {0:?}")]
    Malformed(String),
}

/// Parse a statement number such as `1,234.56` or `56.00`.
///
/// Thousands separators are dropped; what remains must be ASCII digits, a
/// point, and exactly two fractional digits.
pub fn parse_statement_number(text: &str) -> Result<Decimal, MoneyError> {
    let cleaned = text.trim().replace(',', "");
    let malformed = || MoneyError::Malformed(text.to_string());

    let (int_part, frac_part) = cleaned.split_once('.').ok_or_else(malformed)?;
    if int_part.is_empty()
        || frac_part.len() != 2
        || !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(malformed());
    }

    Decimal::from_str(&cleaned).map_err(|_| malformed())
}

/// How signed amounts are rendered in the output table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub symbol: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
        }
    }
}

impl CurrencyFormat {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    pub fn format(&self, value: Decimal) -> String {
        format_currency(value, &self.symbol)
    }
}

/// Sign, then symbol, then the comma-grouped magnitude with two decimals.
pub fn format_currency(value: Decimal, symbol: &str) -> String {
    let value = value.round_dp(2);
    let magnitude = format!("{:.2}", value.abs());
    let (int_part, frac_part) = magnitude
        .split_once('.')
        .unwrap_or((magnitude.as_str(), "00"));

    let grouped = group_thousands(int_part);
    let sign = if value.is_sign_negative() && !value.is_zero() {
        "-"
    } else {
        ""
    };

    format!("{sign}{symbol}{grouped}.{frac_part}")
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
