//! Running balance carried between accepted statement lines.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which way money moved on a statement line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "credit")]
    Credit,
    #[serde(rename = "debit")]
    Debit,
}

impl Direction {
    /// Apply this direction to an unsigned amount. Zero stays unsigned.
    pub fn sign(&self, amount: Decimal) -> Decimal {
        if amount.is_zero() {
            return Decimal::ZERO;
        }
        match self {
            Direction::Credit => amount.abs(),
            Direction::Debit => -amount.abs(),
        }
    }
}

/// Balance of the most recently accepted line, or unset before the first one.
///
/// This is a plain value: each accepted line consumes the old state and
/// produces the next, so a run is a fold with no shared mutable state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningBalance(Option<Decimal>);

impl RunningBalance {
    pub fn unset() -> Self {
        Self(None)
    }

    pub fn get(&self) -> Option<Decimal> {
        self.0
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// Infer direction from the new balance.
    ///
    /// A drop below the previous balance is a debit; equal or higher is a
    /// credit. With no previous balance the line is treated as a credit.
    pub fn direction_for(&self, new_balance: Decimal) -> Direction {
        match self.0 {
            Some(prev) if new_balance < prev => Direction::Debit,
            _ => Direction::Credit,
        }
    }

    /// Replace (never accumulate) with the balance of the line just accepted.
    pub fn advance(self, new_balance: Decimal) -> Self {
        Self(Some(new_balance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_first_line_is_credit() {
        assert_eq!(RunningBalance::unset().direction_for(d("0.00")), Direction::Credit);
        assert_eq!(RunningBalance::unset().direction_for(d("5000.00")), Direction::Credit);
    }

    #[test]
    fn test_drop_is_debit_and_equal_is_credit() {
        let state = RunningBalance::unset().advance(d("5000.00"));
        assert_eq!(state.direction_for(d("4954.50")), Direction::Debit);
        assert_eq!(state.direction_for(d("5000.00")), Direction::Credit);
        assert_eq!(state.direction_for(d("5000.01")), Direction::Credit);
    }

    #[test]
    fn test_advance_replaces() {
        let state = RunningBalance::unset().advance(d("10.00")).advance(d("3.00"));
        assert_eq!(state.get(), Some(d("3.00")));
        assert!(state.is_set());
    }

    #[test]
    fn test_direction_sign() {
        assert_eq!(Direction::Debit.sign(d("45.50")), d("-45.50"));
        assert_eq!(Direction::Credit.sign(d("45.50")), d("45.50"));
    }

    #[test]
    fn test_zero_debit_is_not_negative() {
        let zero = Direction::Debit.sign(d("0.00"));
        assert!(!zero.is_sign_negative());
        assert_eq!(zero.to_string(), "0");
    }
}
