//! Transaction display formatting
//!
//! Ledger views for a single account.

use crate::models::{BankAccount, Transaction};

/// Format one ledger entry as a register row
///
/// Credits are shown with a `+`, debits with a `-`.
pub fn format_transaction_row(txn: &Transaction) -> String {
    let sign = if txn.transaction_type.is_credit() { '+' } else { '-' };
    let counterparty = if txn.transaction_type.is_credit() {
        &txn.sender_name
    } else {
        &txn.receiver_name
    };

    format!(
        "{} {:<17} {:<24} {:>1}{:>12}  {}",
        txn.date.format("%Y-%m-%d"),
        txn.transaction_type,
        truncate(counterparty, 24),
        sign,
        txn.amount.to_string(),
        txn.details
    )
}

/// Format an account's ledger, entries in the given order
pub fn format_history(account: &BankAccount, transactions: &[Transaction]) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{} ({}, {})\n",
        account.iban,
        account.account_type,
        account.balance.format_with_currency(account.currency)
    ));

    if transactions.is_empty() {
        output.push_str("No transactions found.\n");
        return output;
    }

    output.push_str(&format!(
        "{:<10} {:<17} {:<24} {:>13}  {}\n",
        "Date", "Type", "Counterparty", "Amount", "Details"
    ));
    output.push_str(&"-".repeat(80));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn));
        output.push('\n');
    }

    output
}

/// Truncate a string to `max_len` characters, ending in `...` when cut
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
