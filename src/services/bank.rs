//! Bank service
//!
//! Money movement and account lifecycle. Every mutation follows the same
//! protocol: take the repository's writer guard, read a copy of the owning
//! client, mutate the copy, write it back with `update`.

use chrono::Utc;
use rand::Rng;

use crate::error::{BankError, BankResult};
use crate::models::{
    AccountSnapshot, AccountType, BankAccount, Client, Currency, Money, Transaction,
    TransactionType,
};
use crate::storage::ClientRepository;

use super::currency::CurrencyService;

/// Sender label on cash deposits
pub const ATM_DEPOSIT_LABEL: &str = "ATM Deposit";
/// Receiver label on cash withdrawals
pub const ATM_WITHDRAW_LABEL: &str = "ATM Withdraw";

const DEPOSIT_DETAILS: &str = "Cash Deposit at ATM";
const WITHDRAW_DETAILS: &str = "Cash Withdrawal from ATM";

/// Fresh identifiers to try before giving up on account creation
const IBAN_ATTEMPTS: usize = 16;

/// Service for accounts and money movement
pub struct BankService<'a> {
    repository: &'a ClientRepository,
    currency: &'a CurrencyService,
}

/// Result of a transfer
#[derive(Debug, Clone)]
pub struct TransferResult {
    /// Entry booked on the source account, in the source currency
    pub sent: Transaction,
    /// Entry booked on the destination account, in the destination currency
    pub received: Transaction,
}

impl TransferResult {
    /// Whether the two legs were in different currencies
    pub fn is_cross_currency(&self) -> bool {
        self.sent
            .source
            .as_ref()
            .zip(self.received.destination.as_ref())
            .is_some_and(|(from, to)| from.currency != to.currency)
    }
}

impl<'a> BankService<'a> {
    pub fn new(repository: &'a ClientRepository, currency: &'a CurrencyService) -> Self {
        Self {
            repository,
            currency,
        }
    }

    /// Open a zero-balance account for a registered client
    ///
    /// The account is appended to the stored client, not to `client`; re-read
    /// the client to see it.
    pub fn create_account(
        &self,
        client: &Client,
        currency: Currency,
        account_type: AccountType,
    ) -> BankResult<BankAccount> {
        let _guard = self.repository.lock_writes()?;

        let mut stored = self
            .repository
            .find_by_personal_id(&client.personal_id)?
            .ok_or_else(|| BankError::client_not_found(client.full_name()))?;

        let iban = self.unused_iban()?;
        let account = BankAccount::new(iban, currency, account_type);
        stored.accounts.push(account.clone());
        self.persist(&stored)?;

        tracing::info!(
            iban = %account.iban,
            currency = %currency,
            account_type = %account_type,
            "opened account"
        );
        Ok(account)
    }

    /// Credit cash to an account
    ///
    /// Blocked accounts still accept deposits.
    pub fn deposit(&self, iban: &str, amount: Money) -> BankResult<Transaction> {
        ensure_positive(amount)?;
        let _guard = self.repository.lock_writes()?;

        let mut owner = self.owner_of(iban)?;
        let holder = owner.full_name();
        let account = owned_account(&mut owner, iban)?;

        account.balance = checked_credit(account.balance, amount)?;
        let transaction = Transaction::new(
            Utc::now(),
            amount,
            TransactionType::Deposit,
            None,
            Some(AccountSnapshot::from(&*account)),
            ATM_DEPOSIT_LABEL,
            holder,
            DEPOSIT_DETAILS,
        );
        account.transactions.push(transaction.clone());
        let balance = account.balance;

        self.persist(&owner)?;
        tracing::info!(%iban, %amount, %balance, "deposit booked");
        Ok(transaction)
    }

    /// Debit cash from an account
    pub fn withdraw(&self, iban: &str, amount: Money) -> BankResult<Transaction> {
        ensure_positive(amount)?;
        let _guard = self.repository.lock_writes()?;

        let mut owner = self.owner_of(iban)?;
        let holder = owner.full_name();
        let account = owned_account(&mut owner, iban)?;

        if account.blocked {
            tracing::warn!(%iban, "withdrawal refused: account blocked");
            return Err(BankError::AccountBlocked(iban.to_string()));
        }
        if !account.has_funds(amount) {
            tracing::warn!(%iban, %amount, "withdrawal refused: insufficient funds");
            return Err(BankError::InsufficientFunds {
                iban: iban.to_string(),
                needed: amount,
                available: account.balance,
            });
        }

        account.balance -= amount;
        let transaction = Transaction::new(
            Utc::now(),
            amount,
            TransactionType::Withdraw,
            Some(AccountSnapshot::from(&*account)),
            None,
            holder,
            ATM_WITHDRAW_LABEL,
            WITHDRAW_DETAILS,
        );
        account.transactions.push(transaction.clone());
        let balance = account.balance;

        self.persist(&owner)?;
        tracing::info!(%iban, %amount, %balance, "withdrawal booked");
        Ok(transaction)
    }

    /// Move money between two accounts, converting into the destination currency
    ///
    /// `amount` is in the source currency and is checked against the source
    /// balance before conversion. The blocked flag of either account is not
    /// consulted. Nothing is written if conversion fails.
    ///
    /// The source client is written first; if writing the destination client
    /// then fails, the two stored clients disagree.
    pub fn transfer(
        &self,
        from_iban: &str,
        to_iban: &str,
        amount: Money,
        details: &str,
    ) -> BankResult<TransferResult> {
        ensure_positive(amount)?;
        if from_iban == to_iban {
            return Err(BankError::BusinessRule(
                "Cannot transfer to the same account".into(),
            ));
        }

        let _guard = self.repository.lock_writes()?;

        let mut sender = self.owner_of(from_iban)?;
        // Same-owner transfers mutate a single copy
        let mut receiver = if sender.owns(to_iban) {
            None
        } else {
            Some(self.owner_of(to_iban)?)
        };

        let sender_name = sender.full_name();
        let receiver_name = receiver
            .as_ref()
            .map_or_else(|| sender_name.clone(), Client::full_name);

        let source = sender
            .account(from_iban)
            .ok_or_else(|| BankError::account_not_found(from_iban))?;
        let destination = receiver
            .as_ref()
            .unwrap_or(&sender)
            .account(to_iban)
            .ok_or_else(|| BankError::account_not_found(to_iban))?;

        if !source.has_funds(amount) {
            tracing::warn!(from = %from_iban, %amount, "transfer refused: insufficient funds");
            return Err(BankError::InsufficientFunds {
                iban: from_iban.to_string(),
                needed: amount,
                available: source.balance,
            });
        }

        let converted = self
            .currency
            .convert(amount, source.currency, destination.currency)?;
        let credited = checked_credit(destination.balance, converted)?;

        let source_ref = AccountSnapshot::from(source);
        let destination_ref = AccountSnapshot::from(destination);
        let at = Utc::now();

        let sent = Transaction::new(
            at,
            amount,
            TransactionType::TransferSent,
            Some(source_ref.clone()),
            Some(destination_ref.clone()),
            sender_name.as_str(),
            receiver_name.as_str(),
            details,
        );
        let received = Transaction::new(
            at,
            converted,
            TransactionType::TransferReceived,
            Some(source_ref),
            Some(destination_ref),
            sender_name.as_str(),
            receiver_name.as_str(),
            details,
        );

        let source = owned_account(&mut sender, from_iban)?;
        source.balance -= amount;
        source.transactions.push(sent.clone());

        let destination = owned_account(receiver.as_mut().unwrap_or(&mut sender), to_iban)?;
        destination.balance = credited;
        destination.transactions.push(received.clone());

        self.persist(&sender)?;
        if let Some(receiver) = &receiver {
            self.persist(receiver)?;
        }

        tracing::info!(
            from = %from_iban,
            to = %to_iban,
            %amount,
            %converted,
            "transfer booked"
        );
        Ok(TransferResult { sent, received })
    }

    /// Block or unblock an account
    pub fn set_blocked(&self, iban: &str, blocked: bool) -> BankResult<BankAccount> {
        let _guard = self.repository.lock_writes()?;

        let mut owner = self.owner_of(iban)?;
        let account = owned_account(&mut owner, iban)?;
        if blocked {
            account.block();
        } else {
            account.unblock();
        }
        let account = account.clone();

        self.persist(&owner)?;
        tracing::info!(%iban, blocked, "account status changed");
        Ok(account)
    }

    /// Remove an account whose balance is zero
    pub fn close_account(&self, iban: &str) -> BankResult<BankAccount> {
        let _guard = self.repository.lock_writes()?;

        let mut owner = self.owner_of(iban)?;
        let position = owner
            .accounts
            .iter()
            .position(|a| a.iban == iban)
            .ok_or_else(|| BankError::account_not_found(iban))?;

        let balance = owner.accounts[position].balance;
        if !balance.is_zero() {
            return Err(BankError::BusinessRule(format!(
                "Account {} still holds {} and cannot be closed",
                iban,
                balance.format_with_currency(owner.accounts[position].currency)
            )));
        }

        let account = owner.accounts.remove(position);
        self.persist(&owner)?;
        tracing::info!(%iban, "account closed");
        Ok(account)
    }

    /// Look up an account and its holder
    pub fn find_account(&self, iban: &str) -> BankResult<Option<(Client, BankAccount)>> {
        let Some(owner) = self.repository.find_by_iban(iban)? else {
            return Ok(None);
        };
        let account = owner.account(iban).cloned();
        Ok(account.map(|account| (owner, account)))
    }

    /// Ledger entries of one account, newest first
    pub fn history(&self, iban: &str) -> BankResult<Vec<Transaction>> {
        let (_, account) = self
            .find_account(iban)?
            .ok_or_else(|| BankError::account_not_found(iban))?;

        let mut transactions = account.transactions;
        transactions.reverse();
        Ok(transactions)
    }

    fn owner_of(&self, iban: &str) -> BankResult<Client> {
        self.repository
            .find_by_iban(iban)?
            .ok_or_else(|| BankError::account_not_found(iban))
    }

    fn persist(&self, client: &Client) -> BankResult<()> {
        if self.repository.update(client)? {
            Ok(())
        } else {
            Err(BankError::client_not_found(client.full_name()))
        }
    }

    fn unused_iban(&self) -> BankResult<String> {
        let mut rng = rand::thread_rng();
        for _ in 0..IBAN_ATTEMPTS {
            let iban = generate_iban(&mut rng);
            if !self.repository.iban_exists(&iban)? {
                return Ok(iban);
            }
            tracing::debug!("generated IBAN already in use, retrying");
        }
        Err(BankError::BusinessRule(
            "Could not generate an unused IBAN".into(),
        ))
    }
}

/// Synthetic identifier: `RO`, two digits, `PPOO`, fourteen digits
pub fn generate_iban<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "RO{:02}PPOO{:014}",
        rng.gen_range(0..100u32),
        rng.gen_range(0..100_000_000_000_000u64)
    )
}

fn ensure_positive(amount: Money) -> BankResult<()> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(BankError::BusinessRule("Amount must be positive.".into()))
    }
}

fn checked_credit(balance: Money, amount: Money) -> BankResult<Money> {
    balance
        .checked_add(amount)
        .ok_or_else(|| BankError::BusinessRule("Balance would overflow".into()))
}

fn owned_account<'c>(client: &'c mut Client, iban: &str) -> BankResult<&'c mut BankAccount> {
    client
        .account_mut(iban)
        .ok_or_else(|| BankError::account_not_found(iban))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tempfile::TempDir;

    struct Fixture {
        _temp_dir: TempDir,
        repository: ClientRepository,
        currency: CurrencyService,
    }

    impl Fixture {
        fn new() -> Self {
            let temp_dir = TempDir::new().unwrap();
            let repository = ClientRepository::new(temp_dir.path().join("clients.json"));
            let currency = CurrencyService::from_rates([(
                Currency::Usd,
                Currency::Eur,
                Decimal::from_str("0.9").unwrap(),
            )]);
            Self {
                _temp_dir: temp_dir,
                repository,
                currency,
            }
        }

        fn service(&self) -> BankService<'_> {
            BankService::new(&self.repository, &self.currency)
        }

        fn add_client(&self, id: &str, first: &str, last: &str) -> Client {
            let client = Client {
                firstname: first.into(),
                lastname: last.into(),
                email: format!("{}@example.com", first.to_lowercase()),
                phone: "0722123456".into(),
                personal_id: id.into(),
                password: "enc".into(),
                gdpr_accepted: true,
                accounts: Vec::new(),
            };
            self.repository.add(client.clone()).unwrap();
            client
        }

        fn open(&self, client: &Client, currency: Currency, units: i64) -> String {
            let service = self.service();
            let account = service
                .create_account(client, currency, AccountType::Current)
                .unwrap();
            if units > 0 {
                service
                    .deposit(&account.iban, Money::from_units(units))
                    .unwrap();
            }
            account.iban
        }

        fn balance(&self, iban: &str) -> Money {
            self.service().find_account(iban).unwrap().unwrap().1.balance
        }

        fn transactions(&self, iban: &str) -> Vec<Transaction> {
            self.service().find_account(iban).unwrap().unwrap().1.transactions
        }
    }

    #[test]
    fn test_generate_iban_format() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let iban = generate_iban(&mut rng);
            assert_eq!(iban.len(), 22);
            assert!(iban.starts_with("RO"));
            assert_eq!(&iban[4..8], "PPOO");
            assert!(iban[2..4].chars().all(|c| c.is_ascii_digit()));
            assert!(iban[8..].chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_create_account() {
        let fx = Fixture::new();
        let ana = fx.add_client("id-a", "Ana", "Pop");

        let account = fx
            .service()
            .create_account(&ana, Currency::Eur, AccountType::Savings)
            .unwrap();
        assert!(account.balance.is_zero());
        assert!(!account.blocked);

        let stored = fx.repository.find_by_personal_id("id-a").unwrap().unwrap();
        assert_eq!(stored.accounts.len(), 1);
        assert_eq!(stored.accounts[0].iban, account.iban);
        assert_eq!(stored.accounts[0].account_type, AccountType::Savings);
    }

    #[test]
    fn test_create_account_for_unknown_client() {
        let fx = Fixture::new();
        let ghost = Client {
            firstname: "Ghost".into(),
            lastname: "User".into(),
            email: "g@example.com".into(),
            phone: "0722123456".into(),
            personal_id: "missing".into(),
            password: "enc".into(),
            gdpr_accepted: true,
            accounts: Vec::new(),
        };

        let err = fx
            .service()
            .create_account(&ghost, Currency::Eur, AccountType::Current)
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_cross_currency_transfer_scenario() {
        let fx = Fixture::new();
        let alice = fx.add_client("id-a", "Alice", "Pop");
        let bob = fx.add_client("id-b", "Bob", "Ionescu");
        let iban1 = fx.open(&alice, Currency::Usd, 100);
        let iban2 = fx.open(&bob, Currency::Eur, 0);

        let result = fx
            .service()
            .transfer(&iban1, &iban2, Money::from_units(50), "rent")
            .unwrap();

        assert_eq!(fx.balance(&iban1), Money::from_units(50));
        assert_eq!(fx.balance(&iban2), Money::from_units(45));
        assert!(result.is_cross_currency());

        let sent = fx.transactions(&iban1).pop().unwrap();
        assert_eq!(sent.transaction_type, TransactionType::TransferSent);
        assert_eq!(sent.amount, Money::from_units(50));

        let received = fx.transactions(&iban2).pop().unwrap();
        assert_eq!(received.transaction_type, TransactionType::TransferReceived);
        assert_eq!(received.amount, Money::from_units(45));

        assert_eq!(sent.date, received.date);
        assert_eq!(sent.created_at, received.created_at);
        for txn in [&sent, &received] {
            assert_eq!(txn.sender_name, "Alice Pop");
            assert_eq!(txn.receiver_name, "Bob Ionescu");
            assert_eq!(txn.details, "rent");
            assert_eq!(txn.source.as_ref().unwrap().iban, iban1);
            assert_eq!(txn.destination.as_ref().unwrap().iban, iban2);
        }
    }

    #[test]
    fn test_transfer_insufficient_funds_leaves_balances() {
        let fx = Fixture::new();
        let alice = fx.add_client("id-a", "Alice", "Pop");
        let bob = fx.add_client("id-b", "Bob", "Ionescu");
        let iban1 = fx.open(&alice, Currency::Usd, 100);
        let iban2 = fx.open(&bob, Currency::Eur, 0);

        let err = fx
            .service()
            .transfer(&iban1, &iban2, Money::from_units(101), "too much")
            .unwrap_err();
        assert!(matches!(err, BankError::InsufficientFunds { .. }));
        assert!(err.is_business_rule());

        assert_eq!(fx.balance(&iban1), Money::from_units(100));
        assert_eq!(fx.balance(&iban2), Money::zero());
        assert_eq!(fx.transactions(&iban1).len(), 1);
        assert!(fx.transactions(&iban2).is_empty());
    }

    #[test]
    fn test_transfer_missing_rate_mutates_nothing() {
        let fx = Fixture::new();
        let alice = fx.add_client("id-a", "Alice", "Pop");
        let bob = fx.add_client("id-b", "Bob", "Ionescu");
        let iban1 = fx.open(&alice, Currency::Gbp, 100);
        let iban2 = fx.open(&bob, Currency::Chf, 0);

        let err = fx
            .service()
            .transfer(&iban1, &iban2, Money::from_units(10), "x")
            .unwrap_err();
        assert!(matches!(err, BankError::NoExchangeRate { .. }));
        assert_eq!(fx.balance(&iban1), Money::from_units(100));
        assert_eq!(fx.transactions(&iban1).len(), 1);
    }

    #[test]
    fn test_transfer_uses_reverse_rate() {
        let fx = Fixture::new();
        let alice = fx.add_client("id-a", "Alice", "Pop");
        let bob = fx.add_client("id-b", "Bob", "Ionescu");
        let eur = fx.open(&alice, Currency::Eur, 90);
        let usd = fx.open(&bob, Currency::Usd, 0);

        fx.service()
            .transfer(&eur, &usd, Money::from_units(9), "back")
            .unwrap();
        assert_eq!(fx.balance(&usd), Money::from_units(10));
    }

    #[test]
    fn test_same_owner_transfer() {
        let fx = Fixture::new();
        let alice = fx.add_client("id-a", "Alice", "Pop");
        let usd = fx.open(&alice, Currency::Usd, 100);
        let eur = fx.open(&alice, Currency::Eur, 0);

        let result = fx
            .service()
            .transfer(&usd, &eur, Money::from_units(20), "savings")
            .unwrap();
        assert_eq!(result.received.receiver_name, "Alice Pop");

        let stored = fx.repository.find_by_personal_id("id-a").unwrap().unwrap();
        assert_eq!(stored.account(&usd).unwrap().balance, Money::from_units(80));
        assert_eq!(stored.account(&eur).unwrap().balance, Money::from_units(18));
    }

    #[test]
    fn test_transfer_to_self_rejected() {
        let fx = Fixture::new();
        let alice = fx.add_client("id-a", "Alice", "Pop");
        let usd = fx.open(&alice, Currency::Usd, 100);

        let err = fx
            .service()
            .transfer(&usd, &usd, Money::from_units(1), "loop")
            .unwrap_err();
        assert!(err.is_business_rule());
        assert_eq!(fx.balance(&usd), Money::from_units(100));
    }

    #[test]
    fn test_transfer_unknown_account() {
        let fx = Fixture::new();
        let alice = fx.add_client("id-a", "Alice", "Pop");
        let usd = fx.open(&alice, Currency::Usd, 100);

        let err = fx
            .service()
            .transfer(&usd, "RO00PPOO00000000000000", Money::from_units(1), "")
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(fx.balance(&usd), Money::from_units(100));
    }

    #[test]
    fn test_non_positive_amounts_rejected() {
        let fx = Fixture::new();
        let alice = fx.add_client("id-a", "Alice", "Pop");
        let bob = fx.add_client("id-b", "Bob", "Ionescu");
        let iban1 = fx.open(&alice, Currency::Usd, 10);
        let iban2 = fx.open(&bob, Currency::Usd, 0);
        let service = fx.service();

        for amount in [Money::zero(), Money::from_units(-5)] {
            let err = service.deposit(&iban1, amount).unwrap_err();
            assert_eq!(err.to_string(), "Amount must be positive.");
            assert!(service.withdraw(&iban1, amount).unwrap_err().is_business_rule());
            assert!(service
                .transfer(&iban1, &iban2, amount, "")
                .unwrap_err()
                .is_business_rule());
        }
        assert_eq!(fx.balance(&iban1), Money::from_units(10));
    }

    #[test]
    fn test_deposit_then_withdraw_restores_balance() {
        let fx = Fixture::new();
        let alice = fx.add_client("id-a", "Alice", "Pop");
        let iban = fx.open(&alice, Currency::Ron, 0);
        let service = fx.service();

        let deposit = service.deposit(&iban, Money::from_units(100)).unwrap();
        let withdrawal = service.withdraw(&iban, Money::from_units(100)).unwrap();

        assert_eq!(fx.balance(&iban), Money::zero());
        let types: Vec<_> = fx
            .transactions(&iban)
            .iter()
            .map(|t| t.transaction_type)
            .collect();
        assert_eq!(types, vec![TransactionType::Deposit, TransactionType::Withdraw]);

        assert!(deposit.source.is_none());
        assert_eq!(deposit.destination.unwrap().iban, iban);
        assert_eq!(deposit.sender_name, ATM_DEPOSIT_LABEL);
        assert_eq!(deposit.receiver_name, "Alice Pop");

        assert!(withdrawal.destination.is_none());
        assert_eq!(withdrawal.source.unwrap().iban, iban);
        assert_eq!(withdrawal.sender_name, "Alice Pop");
        assert_eq!(withdrawal.receiver_name, ATM_WITHDRAW_LABEL);
    }

    #[test]
    fn test_withdraw_insufficient_funds() {
        let fx = Fixture::new();
        let alice = fx.add_client("id-a", "Alice", "Pop");
        let iban = fx.open(&alice, Currency::Ron, 30);

        let err = fx
            .service()
            .withdraw(&iban, Money::from_cents(3001))
            .unwrap_err();
        assert!(matches!(err, BankError::InsufficientFunds { .. }));
        assert_eq!(fx.balance(&iban), Money::from_units(30));
    }

    #[test]
    fn test_blocked_account_refuses_withdraw_but_accepts_deposit() {
        let fx = Fixture::new();
        let alice = fx.add_client("id-a", "Alice", "Pop");
        let iban = fx.open(&alice, Currency::Ron, 50);
        let service = fx.service();

        service.set_blocked(&iban, true).unwrap();

        let err = service.withdraw(&iban, Money::from_units(10)).unwrap_err();
        assert!(matches!(err, BankError::AccountBlocked(_)));
        assert!(err.is_business_rule());
        assert_eq!(fx.balance(&iban), Money::from_units(50));

        service.deposit(&iban, Money::from_units(5)).unwrap();
        assert_eq!(fx.balance(&iban), Money::from_units(55));

        service.set_blocked(&iban, false).unwrap();
        service.withdraw(&iban, Money::from_units(10)).unwrap();
        assert_eq!(fx.balance(&iban), Money::from_units(45));
    }

    #[test]
    fn test_transfer_ignores_blocked_flags() {
        let fx = Fixture::new();
        let alice = fx.add_client("id-a", "Alice", "Pop");
        let bob = fx.add_client("id-b", "Bob", "Ionescu");
        let from = fx.open(&alice, Currency::Usd, 100);
        let to = fx.open(&bob, Currency::Usd, 0);
        let service = fx.service();

        service.set_blocked(&from, true).unwrap();
        service.set_blocked(&to, true).unwrap();
        service
            .transfer(&from, &to, Money::from_units(25), "blocked")
            .unwrap();

        assert_eq!(fx.balance(&from), Money::from_units(75));
        assert_eq!(fx.balance(&to), Money::from_units(25));
    }

    #[test]
    fn test_close_account() {
        let fx = Fixture::new();
        let alice = fx.add_client("id-a", "Alice", "Pop");
        let funded = fx.open(&alice, Currency::Ron, 10);
        let empty = fx.open(&alice, Currency::Ron, 0);
        let service = fx.service();

        let err = service.close_account(&funded).unwrap_err();
        assert!(err.is_business_rule());

        service.close_account(&empty).unwrap();
        let stored = fx.repository.find_by_personal_id("id-a").unwrap().unwrap();
        assert_eq!(stored.accounts.len(), 1);
        assert!(service.find_account(&empty).unwrap().is_none());
        assert!(service.close_account(&empty).unwrap_err().is_not_found());
    }

    #[test]
    fn test_history_newest_first() {
        let fx = Fixture::new();
        let alice = fx.add_client("id-a", "Alice", "Pop");
        let iban = fx.open(&alice, Currency::Ron, 10);
        let service = fx.service();
        service.withdraw(&iban, Money::from_units(3)).unwrap();

        let history = service.history(&iban).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].transaction_type, TransactionType::Withdraw);
        assert_eq!(history[1].transaction_type, TransactionType::Deposit);

        assert!(service.history("RO99").unwrap_err().is_not_found());
    }
}
