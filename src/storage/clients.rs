//! Client repository
//!
//! Owns the authoritative, ordered client collection behind a single lock.
//! Every read hands out deep copies: callers may mutate what they get back
//! freely, and must call [`ClientRepository::update`] to make a change stick.
//!
//! A read-copy-update sequence spans several calls, so services that need
//! one to be atomic hold [`ClientRepository::lock_writes`] for its duration.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::BankError;
use crate::models::Client;

use super::file_io::{read_json, write_json_atomic};

/// Serializable snapshot of the whole collection
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ClientData {
    clients: Vec<Client>,
}

/// Repository for client persistence
pub struct ClientRepository {
    path: PathBuf,
    data: RwLock<Vec<Client>>,
    writer: Mutex<()>,
}

impl ClientRepository {
    /// Create an empty repository backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
            writer: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize read-modify-write sequences across callers
    ///
    /// The guard does not block plain reads; it only excludes other holders.
    pub fn lock_writes(&self) -> Result<MutexGuard<'_, ()>, BankError> {
        self.writer
            .lock()
            .map_err(|e| BankError::Persistence(format!("Failed to acquire writer lock: {}", e)))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Client>>, BankError> {
        self.data
            .read()
            .map_err(|e| BankError::Persistence(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Client>>, BankError> {
        self.data
            .write()
            .map_err(|e| BankError::Persistence(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load the snapshot from disk, replacing in-memory state
    ///
    /// A missing or empty file leaves the collection empty.
    pub fn load(&self) -> Result<(), BankError> {
        let file_data: ClientData = read_json(&self.path)?;

        let mut data = self.write()?;
        *data = file_data.clients;

        tracing::info!(
            clients = data.len(),
            path = %self.path.display(),
            "loaded client snapshot"
        );
        Ok(())
    }

    /// Write the whole collection to disk in one pass
    pub fn save(&self) -> Result<(), BankError> {
        let data = self.read()?;

        let file_data = ClientData {
            clients: data.clone(),
        };

        write_json_atomic(&self.path, &file_data)?;
        tracing::debug!(clients = data.len(), "saved client snapshot");
        Ok(())
    }

    /// Find a client by encrypted personal identifier
    pub fn find_by_personal_id(&self, encrypted_id: &str) -> Result<Option<Client>, BankError> {
        let data = self.read()?;
        Ok(data
            .iter()
            .find(|c| c.personal_id == encrypted_id)
            .cloned())
    }

    /// Find the client owning the account with this IBAN
    pub fn find_by_iban(&self, iban: &str) -> Result<Option<Client>, BankError> {
        let data = self.read()?;
        Ok(data.iter().find(|c| c.owns(iban)).cloned())
    }

    /// Get a copy of every client, in insertion order
    pub fn get_all(&self) -> Result<Vec<Client>, BankError> {
        let data = self.read()?;
        Ok(data.clone())
    }

    /// Check whether any account anywhere already uses this IBAN
    pub fn iban_exists(&self, iban: &str) -> Result<bool, BankError> {
        let data = self.read()?;
        Ok(data.iter().any(|c| c.owns(iban)))
    }

    pub fn len(&self) -> Result<usize, BankError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, BankError> {
        Ok(self.read()?.is_empty())
    }

    /// Append a client; uniqueness is the caller's responsibility
    pub fn add(&self, client: Client) -> Result<(), BankError> {
        let mut data = self.write()?;
        data.push(client);
        Ok(())
    }

    /// Overwrite the stored client with the same encrypted identifier
    ///
    /// Copies names, contact details, password and the account list. Returns
    /// `false` without error when no client matches.
    pub fn update(&self, client: &Client) -> Result<bool, BankError> {
        let mut data = self.write()?;

        let Some(stored) = data.iter_mut().find(|c| c.personal_id == client.personal_id) else {
            tracing::debug!("update ignored: no client with that identifier");
            return Ok(false);
        };

        stored.firstname.clone_from(&client.firstname);
        stored.lastname.clone_from(&client.lastname);
        stored.email.clone_from(&client.email);
        stored.phone.clone_from(&client.phone);
        stored.password.clone_from(&client.password);
        stored.accounts.clone_from(&client.accounts);
        Ok(true)
    }

    /// Remove every client with the same encrypted identifier
    ///
    /// Returns how many entries were removed.
    pub fn remove(&self, client: &Client) -> Result<usize, BankError> {
        let mut data = self.write()?;
        let before = data.len();
        data.retain(|c| c.personal_id != client.personal_id);
        Ok(before - data.len())
    }
}
