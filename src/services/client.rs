//! Client service
//!
//! Registration, authentication and profile maintenance. Personal
//! identifiers and passwords are encrypted before they reach the repository;
//! lookups encrypt the query and compare ciphertexts.

use crate::crypto::EncryptionService;
use crate::error::{BankError, BankResult};
use crate::models::{Client, ClientRegistration};
use crate::storage::ClientRepository;
use crate::validation::validate_client;

/// Digits of the personal identifier left visible by [`ClientService::display_personal_id`]
const VISIBLE_ID_DIGITS: usize = 4;

/// Service for client management
pub struct ClientService<'a> {
    repository: &'a ClientRepository,
    encryption: &'a EncryptionService,
}

impl<'a> ClientService<'a> {
    pub fn new(repository: &'a ClientRepository, encryption: &'a EncryptionService) -> Self {
        Self {
            repository,
            encryption,
        }
    }

    /// Register a new client
    ///
    /// Validates the plaintext data, rejects an already registered CNP and
    /// stores the client with its CNP and password encrypted. Returns the
    /// stored copy.
    pub fn register(&self, registration: &ClientRegistration) -> BankResult<Client> {
        let mut client = registration.to_client();
        validate_client(&client)?;

        if client.password.is_empty() {
            return Err(BankError::Validation("Password can not be empty".into()));
        }

        let encrypted_id = self.encryption.encrypt(&client.personal_id)?;

        let _guard = self.repository.lock_writes()?;
        if self.repository.find_by_personal_id(&encrypted_id)?.is_some() {
            tracing::warn!("registration refused: CNP already registered");
            return Err(BankError::Validation(
                "This CNP is already registered".into(),
            ));
        }

        client.password = self.encryption.encrypt(&client.password)?;
        client.personal_id = encrypted_id;
        self.repository.add(client.clone())?;

        tracing::info!(email = %client.email, "client registered");
        Ok(client)
    }

    /// Save edited profile fields
    ///
    /// Returns `false` when no stored client has this identifier.
    pub fn update(&self, client: &Client) -> BankResult<bool> {
        if client.firstname.trim().is_empty()
            || client.lastname.trim().is_empty()
            || client.email.trim().is_empty()
        {
            return Err(BankError::Validation(
                "First name, last name, and email are required.".into(),
            ));
        }

        let _guard = self.repository.lock_writes()?;
        let updated = self.repository.update(client)?;
        if updated {
            tracing::info!(email = %client.email, "client updated");
        }
        Ok(updated)
    }

    /// Remove a client together with all of its accounts
    pub fn delete(&self, client: &Client) -> BankResult<()> {
        let _guard = self.repository.lock_writes()?;
        match self.repository.remove(client)? {
            0 => Err(BankError::client_not_found(client.full_name())),
            removed => {
                tracing::info!(removed, "client deleted");
                Ok(())
            }
        }
    }

    pub fn list(&self) -> BankResult<Vec<Client>> {
        self.repository.get_all()
    }

    /// Find a client by its encrypted personal identifier
    pub fn find_by_personal_id(&self, encrypted_id: &str) -> BankResult<Option<Client>> {
        self.repository.find_by_personal_id(encrypted_id)
    }

    /// Find a client by plaintext CNP
    pub fn find_by_cnp(&self, cnp: &str) -> BankResult<Option<Client>> {
        let encrypted_id = self.encryption.encrypt(cnp.trim())?;
        self.repository.find_by_personal_id(&encrypted_id)
    }

    /// Authenticate with plaintext CNP and password
    ///
    /// Yields `None` for an unknown CNP, a wrong password, or input that
    /// cannot be encrypted. Only repository failures are errors.
    pub fn login(&self, cnp: &str, password: &str) -> BankResult<Option<Client>> {
        let (Ok(encrypted_id), Ok(encrypted_password)) = (
            self.encryption.encrypt(cnp.trim()),
            self.encryption.encrypt(password),
        ) else {
            return Ok(None);
        };

        let client = self
            .repository
            .find_by_personal_id(&encrypted_id)?
            .filter(|c| c.password == encrypted_password);

        if client.is_none() {
            tracing::warn!("login failed");
        }
        Ok(client)
    }

    /// Replace a client's password
    pub fn reset_password(&self, client: &Client, new_password: &str) -> BankResult<()> {
        if new_password.is_empty() {
            return Err(BankError::Validation("Password can not be empty".into()));
        }
        let encrypted = self.encryption.encrypt(new_password)?;

        let _guard = self.repository.lock_writes()?;
        let mut stored = self
            .repository
            .find_by_personal_id(&client.personal_id)?
            .ok_or_else(|| BankError::client_not_found(client.full_name()))?;
        stored.password = encrypted;
        self.repository.update(&stored)?;

        tracing::info!(email = %stored.email, "password reset");
        Ok(())
    }

    /// Decrypted CNP with all but the last four digits masked
    pub fn display_personal_id(&self, client: &Client) -> BankResult<String> {
        let cnp = self.encryption.decrypt(&client.personal_id)?;
        Ok(mask_identifier(&cnp))
    }
}

fn mask_identifier(value: &str) -> String {
    let len = value.chars().count();
    let hidden = len.saturating_sub(VISIBLE_ID_DIGITS);
    value
        .chars()
        .enumerate()
        .map(|(i, c)| if i < hidden { '*' } else { c })
        .collect()
}
