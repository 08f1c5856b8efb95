//! ledgerlift-core: ledger record types and statement money handling

pub mod balance;
pub mod money;
pub mod record;

pub use balance::{Direction, RunningBalance};
pub use money::{CurrencyFormat, MoneyError, format_currency, parse_statement_number};
pub use record::{RawTransaction, TransactionRecord};
