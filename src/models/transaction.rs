//! Transaction model
//!
//! A transaction is one immutable ledger entry on one account. Transfers
//! produce two entries, one per leg. Amounts are sign-less; the direction is
//! carried by [`TransactionType`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::account::{AccountType, BankAccount};
use super::currency::Currency;
use super::ids::TransactionId;
use super::money::Money;

/// Kind of ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// Cash deposited into the account
    Deposit,
    /// Cash withdrawn from the account
    Withdraw,
    /// Outgoing leg of a transfer
    TransferSent,
    /// Incoming leg of a transfer
    TransferReceived,
}

impl TransactionType {
    /// Whether this entry increases the account balance
    pub fn is_credit(&self) -> bool {
        matches!(self, Self::Deposit | Self::TransferReceived)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit => write!(f, "DEPOSIT"),
            Self::Withdraw => write!(f, "WITHDRAW"),
            Self::TransferSent => write!(f, "TRANSFER_SENT"),
            Self::TransferReceived => write!(f, "TRANSFER_RECEIVED"),
        }
    }
}

/// Point-in-time reference to an account involved in a transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub iban: String,
    pub currency: Currency,
    pub account_type: AccountType,
}

impl From<&BankAccount> for AccountSnapshot {
    fn from(account: &BankAccount) -> Self {
        Self {
            iban: account.iban.clone(),
            currency: account.currency,
            account_type: account.account_type,
        }
    }
}

/// An immutable ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    /// Booking date
    pub date: NaiveDate,

    /// Exact booking time; both legs of a transfer share it
    pub created_at: DateTime<Utc>,

    /// Sign-less amount in the currency of the account holding the entry
    pub amount: Money,

    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    /// Debited account, absent for cash deposits
    pub source: Option<AccountSnapshot>,

    /// Credited account, absent for cash withdrawals
    pub destination: Option<AccountSnapshot>,

    pub sender_name: String,
    pub receiver_name: String,

    #[serde(default)]
    pub details: String,
}

impl Transaction {
    /// Create a ledger entry booked at `at`
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        at: DateTime<Utc>,
        amount: Money,
        transaction_type: TransactionType,
        source: Option<AccountSnapshot>,
        destination: Option<AccountSnapshot>,
        sender_name: impl Into<String>,
        receiver_name: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            date: at.date_naive(),
            created_at: at,
            amount,
            transaction_type,
            source,
            destination,
            sender_name: sender_name.into(),
            receiver_name: receiver_name.into(),
            details: details.into(),
        }
    }

    /// Signed effect of this entry on its account's balance
    pub fn signed_amount(&self) -> Money {
        if self.transaction_type.is_credit() {
            self.amount
        } else {
            -self.amount
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date, self.transaction_type, self.amount, self.details
        )
    }
}
