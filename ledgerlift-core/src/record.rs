//! Ledger record types produced from statement lines

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::balance::Direction;

/// Fields captured from one transaction line, before any numeric work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTransaction {
    /// Short date token such as "12 Jan"
    pub date: String,
    /// 2-4 letter category code, empty when the line has none
    pub kind: String,
    pub description: String,
    /// Unsigned amount text, e.g. "1,000.00"
    pub amount_text: String,
    /// Resulting balance text, e.g. "5,000.00"
    pub balance_text: String,
}

/// One row of the output ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    /// Signed amount rendered as currency ("-$45.50")
    pub amount: String,
    /// Signed amount as a number
    pub value: Decimal,
    /// Balance printed on the source line
    pub balance: Decimal,
}

impl TransactionRecord {
    pub fn direction(&self) -> Direction {
        if self.value.is_sign_negative() && !self.value.is_zero() {
            Direction::Debit
        } else {
            Direction::Credit
        }
    }

    pub fn is_debit(&self) -> bool {
        self.direction() == Direction::Debit
    }

    /// The four output columns: Date, Type, Description, Amount
    pub fn columns(&self) -> [&str; 4] {
        [&self.date, &self.kind, &self.description, &self.amount]
    }
}
