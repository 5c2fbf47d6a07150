//! Bank account model
//!
//! An account belongs to exactly one client and carries its own ordered
//! transaction history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::currency::Currency;
use super::money::Money;
use super::transaction::Transaction;

/// Type of bank account
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    /// Everyday current account
    Current,
    /// Savings account
    Savings,
    /// Term deposit
    Deposit,
    /// Business account
    Business,
}

impl AccountType {
    pub const ALL: [AccountType; 4] = [
        AccountType::Current,
        AccountType::Savings,
        AccountType::Deposit,
        AccountType::Business,
    ];

    /// Parse account type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "current" | "checking" => Some(Self::Current),
            "savings" => Some(Self::Savings),
            "deposit" | "term" => Some(Self::Deposit),
            "business" => Some(Self::Business),
            _ => None,
        }
    }
}

impl Default for AccountType {
    fn default() -> Self {
        Self::Current
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Current => write!(f, "CURRENT"),
            Self::Savings => write!(f, "SAVINGS"),
            Self::Deposit => write!(f, "DEPOSIT"),
            Self::Business => write!(f, "BUSINESS"),
        }
    }
}

impl FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!(
                "Invalid account type: '{}'. Valid types: current, savings, deposit, business",
                s
            )
        })
    }
}

/// A bank account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    /// Synthetic IBAN, unique across the bank
    pub iban: String,

    pub balance: Money,

    pub currency: Currency,

    #[serde(rename = "type")]
    pub account_type: AccountType,

    /// Blocked accounts refuse withdrawals
    #[serde(default)]
    pub blocked: bool,

    pub created_at: DateTime<Utc>,

    /// Ledger entries, oldest first
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl BankAccount {
    /// Create a zero-balance, unblocked account
    pub fn new(iban: impl Into<String>, currency: Currency, account_type: AccountType) -> Self {
        Self {
            iban: iban.into(),
            balance: Money::zero(),
            currency,
            account_type,
            blocked: false,
            created_at: Utc::now(),
            transactions: Vec::new(),
        }
    }

    /// Check whether `amount` can be debited without going negative
    pub fn has_funds(&self, amount: Money) -> bool {
        self.balance >= amount
    }

    pub fn block(&mut self) {
        self.blocked = true;
    }

    pub fn unblock(&mut self) {
        self.blocked = false;
    }
}

impl fmt::Display for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {})",
            self.iban,
            self.account_type,
            self.balance.format_with_currency(self.currency)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account() {
        let account = BankAccount::new("RO01PPOO00000000000000", Currency::Eur, AccountType::Savings);
        assert_eq!(account.balance, Money::zero());
        assert!(!account.blocked);
        assert!(account.transactions.is_empty());
    }

    #[test]
    fn test_block_unblock() {
        let mut account = BankAccount::new("RO01", Currency::Ron, AccountType::Current);
        account.block();
        assert!(account.blocked);
        account.unblock();
        assert!(!account.blocked);
    }

    #[test]
    fn test_has_funds() {
        let mut account = BankAccount::new("RO01", Currency::Ron, AccountType::Current);
        account.balance = Money::from_units(100);
        assert!(account.has_funds(Money::from_units(100)));
        assert!(!account.has_funds(Money::from_cents(10001)));
    }

    #[test]
    fn test_account_type_parsing() {
        assert_eq!(AccountType::parse("current"), Some(AccountType::Current));
        assert_eq!(AccountType::parse("SAVINGS"), Some(AccountType::Savings));
        assert_eq!(AccountType::parse("checking"), Some(AccountType::Current));
        assert_eq!(AccountType::parse("invalid"), None);
    }

    #[test]
    fn test_display() {
        let account = BankAccount::new("RO01", Currency::Usd, AccountType::Current);
        assert_eq!(format!("{}", account), "RO01 (CURRENT, 0.00 USD)");
    }

    #[test]
    fn test_serialization() {
        let account = BankAccount::new("RO01", Currency::Usd, AccountType::Business);
        let json = serde_json::to_string(&account).unwrap();
        let deserialized: BankAccount = serde_json::from_str(&json).unwrap();
        assert_eq!(account, deserialized);
    }
}
