//! Bank context
//!
//! Builds every long-lived component once and hands out services that
//! borrow them. Front ends open a [`Bank`], run operations through the
//! services, and call [`Bank::shutdown`] to write the snapshot.

use crate::config::{BankPaths, Settings};
use crate::crypto::EncryptionService;
use crate::error::BankResult;
use crate::services::{BankService, ClientService, CurrencyService, ReportService};
use crate::storage::ClientRepository;

/// Owns the repository, the rate table and the cipher
pub struct Bank {
    paths: BankPaths,
    settings: Settings,
    repository: ClientRepository,
    currency: CurrencyService,
    encryption: EncryptionService,
}

impl Bank {
    /// Load the snapshot and rate table found under `paths`
    pub fn open(paths: BankPaths, settings: Settings) -> BankResult<Self> {
        paths.ensure_directories()?;

        let repository = ClientRepository::new(paths.clients_file());
        repository.load()?;
        let currency = CurrencyService::load(&paths.exchange_rates_file())?;
        let encryption = EncryptionService::new(settings.secret_key().clone());

        tracing::debug!(base_dir = %paths.base_dir().display(), "bank opened");
        Ok(Self {
            paths,
            settings,
            repository,
            currency,
            encryption,
        })
    }

    pub fn paths(&self) -> &BankPaths {
        &self.paths
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn repository(&self) -> &ClientRepository {
        &self.repository
    }

    pub fn currency(&self) -> &CurrencyService {
        &self.currency
    }

    pub fn encryption(&self) -> &EncryptionService {
        &self.encryption
    }

    pub fn clients(&self) -> ClientService<'_> {
        ClientService::new(&self.repository, &self.encryption)
    }

    pub fn accounts(&self) -> BankService<'_> {
        BankService::new(&self.repository, &self.currency)
    }

    pub fn reports(&self) -> ReportService<'_> {
        ReportService::new(&self.repository)
    }

    /// Write the client snapshot to disk
    pub fn save(&self) -> BankResult<()> {
        let _guard = self.repository.lock_writes()?;
        self.repository.save()
    }

    /// Save and release everything
    pub fn shutdown(self) -> BankResult<()> {
        self.save()?;
        tracing::debug!("bank shut down");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountType, ClientRegistration, Currency, Money};
    use tempfile::TempDir;

    fn settings() -> Settings {
        Settings::new("0123456789abcdef", "admin").unwrap()
    }

    fn registration() -> ClientRegistration {
        ClientRegistration {
            firstname: "Ana".into(),
            lastname: "Pop".into(),
            email: "ana@example.com".into(),
            phone: "0722123456".into(),
            cnp: "1960529460012".into(),
            password: "secret".into(),
            gdpr_accepted: true,
        }
    }

    #[test]
    fn test_open_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BankPaths::with_base_dir(temp_dir.path().to_path_buf());

        let bank = Bank::open(paths, settings()).unwrap();
        assert!(bank.repository().is_empty().unwrap());
        assert!(bank.currency().is_empty());
        assert!(temp_dir.path().join("data").exists());
    }

    #[test]
    fn test_shutdown_persists_state() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BankPaths::with_base_dir(temp_dir.path().to_path_buf());

        let bank = Bank::open(paths.clone(), settings()).unwrap();
        let client = bank.clients().register(&registration()).unwrap();
        let account = bank
            .accounts()
            .create_account(&client, Currency::Ron, AccountType::Current)
            .unwrap();
        bank.accounts()
            .deposit(&account.iban, Money::from_units(250))
            .unwrap();
        bank.shutdown().unwrap();

        let reopened = Bank::open(paths, settings()).unwrap();
        let client = reopened
            .clients()
            .login("1960529460012", "secret")
            .unwrap()
            .unwrap();
        assert_eq!(client.accounts.len(), 1);
        assert_eq!(client.accounts[0].balance, Money::from_units(250));
        assert_eq!(client.accounts[0].transactions.len(), 1);
    }

    #[test]
    fn test_wrong_key_cannot_log_in() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BankPaths::with_base_dir(temp_dir.path().to_path_buf());

        let bank = Bank::open(paths.clone(), settings()).unwrap();
        bank.clients().register(&registration()).unwrap();
        bank.shutdown().unwrap();

        let other = Settings::new("fedcba9876543210", "admin").unwrap();
        let reopened = Bank::open(paths, other).unwrap();
        assert!(reopened
            .clients()
            .login("1960529460012", "secret")
            .unwrap()
            .is_none());
    }
}
