//! CSV export of an account's ledger

use std::io::Write;

use crate::error::{BankError, BankResult};
use crate::models::{BankAccount, Transaction};

const HEADER: [&str; 10] = [
    "ID", "Date", "Type", "Amount", "Currency", "From", "To", "Sender", "Receiver", "Details",
];

/// Write `transactions` of `account` as CSV, one row per entry
///
/// Amounts are sign-less, as booked; the Type column gives the direction.
pub fn export_history_csv<W: Write>(
    account: &BankAccount,
    transactions: &[Transaction],
    writer: W,
) -> BankResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);

    csv.write_record(HEADER).map_err(export_error)?;

    for txn in transactions {
        let from = txn.source.as_ref().map(|s| s.iban.as_str()).unwrap_or("");
        let to = txn
            .destination
            .as_ref()
            .map(|d| d.iban.as_str())
            .unwrap_or("");

        csv.write_record([
            txn.id.to_string().as_str(),
            txn.date.format("%Y-%m-%d").to_string().as_str(),
            txn.transaction_type.to_string().as_str(),
            txn.amount.to_string().as_str(),
            account.currency.code(),
            from,
            to,
            txn.sender_name.as_str(),
            txn.receiver_name.as_str(),
            txn.details.as_str(),
        ])
        .map_err(export_error)?;
    }

    csv.flush()
        .map_err(|e| BankError::Io(format!("Failed to write CSV: {}", e)))?;
    Ok(())
}

fn export_error(e: ::csv::Error) -> BankError {
    BankError::Io(format!("Failed to write CSV: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountSnapshot, AccountType, Currency, Money, TransactionType};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_export_history_csv() {
        let mut account =
            BankAccount::new("RO01PPOO00000000000001", Currency::Eur, AccountType::Current);
        let at = Utc.with_ymd_and_hms(2025, 3, 14, 10, 0, 0).unwrap();
        let deposit = Transaction::new(
            at,
            Money::from_cents(12_050),
            TransactionType::Deposit,
            None,
            Some(AccountSnapshot::from(&account)),
            "ATM Deposit",
            "Ana Pop",
            "Cash Deposit at ATM",
        );
        let transfer = Transaction::new(
            at,
            Money::from_units(20),
            TransactionType::TransferSent,
            Some(AccountSnapshot::from(&account)),
            None,
            "Ana Pop",
            "Bob Ionescu",
            "rent, march",
        );
        account.transactions = vec![deposit, transfer];

        let mut output = Vec::new();
        export_history_csv(&account, &account.transactions, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "ID,Date,Type,Amount,Currency,From,To,Sender,Receiver,Details"
        );
        assert!(lines[1].contains(
            ",2025-03-14,DEPOSIT,120.50,EUR,,RO01PPOO00000000000001,ATM Deposit,Ana Pop,"
        ));
        // Embedded commas are quoted
        assert!(lines[2].ends_with(",\"rent, march\""));
    }

    #[test]
    fn test_export_empty_history() {
        let account = BankAccount::new("RO01", Currency::Ron, AccountType::Savings);
        let mut output = Vec::new();
        export_history_csv(&account, &[], &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap().lines().count(), 1);
    }
}
