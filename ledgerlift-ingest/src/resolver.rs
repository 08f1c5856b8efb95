//! Sign resolver: turns captured fields into a signed ledger record.

use ledgerlift_core::{
    CurrencyFormat, MoneyError, RawTransaction, RunningBalance, TransactionRecord,
    parse_statement_number,
};

/// Resolve one matched line against the running balance.
///
/// Statements print an unsigned amount and the resulting balance, so the sign
/// comes from comparing that balance with the previous one. The returned state
/// always holds this line's balance, whatever sign was inferred.
pub fn resolve(
    state: RunningBalance,
    raw: RawTransaction,
    format: &CurrencyFormat,
) -> Result<(RunningBalance, TransactionRecord), MoneyError> {
    let amount = parse_statement_number(&raw.amount_text)?;
    let balance = parse_statement_number(&raw.balance_text)?;

    let value = state.direction_for(balance).sign(amount);

    let record = TransactionRecord {
        date: raw.date,
        kind: raw.kind,
        description: raw.description.trim().to_string(),
        amount: format.format(value),
        value,
        balance,
    };

    Ok((state.advance(balance), record))
}
