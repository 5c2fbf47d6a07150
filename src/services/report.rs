//! Report service
//!
//! Read-only statistics over the whole client collection.

use std::collections::BTreeMap;

use crate::error::{BankError, BankResult};
use crate::models::{AccountType, Currency, Money};
use crate::storage::ClientRepository;

/// Bank-wide totals
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BankSummary {
    pub clients: usize,
    pub accounts: usize,
    pub blocked_accounts: usize,
    pub transactions: usize,
    pub accounts_by_currency: BTreeMap<Currency, usize>,
    pub accounts_by_type: BTreeMap<AccountType, usize>,
    /// Sum of balances, per currency (never converted)
    pub balance_by_currency: BTreeMap<Currency, Money>,
}

/// Service for bank-wide reports
pub struct ReportService<'a> {
    repository: &'a ClientRepository,
}

impl<'a> ReportService<'a> {
    pub fn new(repository: &'a ClientRepository) -> Self {
        Self { repository }
    }

    /// Compute the summary from a snapshot of every client
    pub fn summary(&self) -> BankResult<BankSummary> {
        let clients = self.repository.get_all()?;

        let mut summary = BankSummary {
            clients: clients.len(),
            ..BankSummary::default()
        };

        for account in clients.iter().flat_map(|c| &c.accounts) {
            summary.accounts += 1;
            summary.transactions += account.transactions.len();
            if account.blocked {
                summary.blocked_accounts += 1;
            }
            *summary
                .accounts_by_currency
                .entry(account.currency)
                .or_default() += 1;
            *summary
                .accounts_by_type
                .entry(account.account_type)
                .or_default() += 1;
            let total = summary
                .balance_by_currency
                .entry(account.currency)
                .or_default();
            *total = total.checked_add(account.balance).ok_or_else(|| {
                BankError::BusinessRule(format!("{} balance total overflows", account.currency))
            })?;
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BankAccount, Client};
    use tempfile::TempDir;

    fn client(id: &str, accounts: Vec<BankAccount>) -> Client {
        Client {
            firstname: "Test".into(),
            lastname: id.into(),
            email: "t@example.com".into(),
            phone: "0722123456".into(),
            personal_id: id.into(),
            password: "enc".into(),
            gdpr_accepted: true,
            accounts,
        }
    }

    fn account(iban: &str, currency: Currency, account_type: AccountType, cents: i64) -> BankAccount {
        let mut account = BankAccount::new(iban, currency, account_type);
        account.balance = Money::from_cents(cents);
        account
    }

    #[test]
    fn test_empty_bank() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ClientRepository::new(temp_dir.path().join("clients.json"));

        let summary = ReportService::new(&repo).summary().unwrap();
        assert_eq!(summary, BankSummary::default());
    }

    #[test]
    fn test_summary_counts() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ClientRepository::new(temp_dir.path().join("clients.json"));

        let mut blocked = account("RO03", Currency::Eur, AccountType::Savings, 500);
        blocked.blocked = true;
        repo.add(client(
            "a",
            vec![
                account("RO01", Currency::Ron, AccountType::Current, 1_000),
                account("RO02", Currency::Ron, AccountType::Savings, 250),
            ],
        ))
        .unwrap();
        repo.add(client("b", vec![blocked])).unwrap();
        repo.add(client("c", Vec::new())).unwrap();

        let summary = ReportService::new(&repo).summary().unwrap();
        assert_eq!(summary.clients, 3);
        assert_eq!(summary.accounts, 3);
        assert_eq!(summary.blocked_accounts, 1);
        assert_eq!(summary.accounts_by_currency[&Currency::Ron], 2);
        assert_eq!(summary.accounts_by_type[&AccountType::Savings], 2);
        assert_eq!(
            summary.balance_by_currency[&Currency::Ron],
            Money::from_cents(1_250)
        );
        assert_eq!(
            summary.balance_by_currency[&Currency::Eur],
            Money::from_cents(500)
        );
        assert!(!summary.accounts_by_currency.contains_key(&Currency::Usd));
    }

    #[test]
    fn test_balance_total_overflow_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ClientRepository::new(temp_dir.path().join("clients.json"));

        repo.add(client(
            "a",
            vec![
                account("RO01", Currency::Usd, AccountType::Current, i64::MAX),
                account("RO02", Currency::Usd, AccountType::Savings, 1),
            ],
        ))
        .unwrap();

        let err = ReportService::new(&repo).summary().unwrap_err();
        assert!(err.is_business_rule());
    }
}
