//! Process settings
//!
//! The bank needs two secrets at startup: the AES key protecting personal
//! identifiers and passwords, and the administrator password. Both come from
//! the environment (optionally seeded from a `.env` file) and a missing or
//! malformed value is a fatal startup error.

use std::fmt;

use zeroize::Zeroizing;

use crate::crypto::SecretKey;
use crate::error::{BankError, BankResult};

pub const AES_KEY_ENV: &str = "AES_SECRET_KEY";
pub const ADMIN_PASSWORD_ENV: &str = "ADMIN_PASSWORD";

/// Validated startup configuration
#[derive(Clone)]
pub struct Settings {
    secret_key: SecretKey,
    admin_password: Zeroizing<String>,
}

impl Settings {
    /// Build settings from explicit values
    pub fn new(aes_key: &str, admin_password: &str) -> BankResult<Self> {
        let secret_key = SecretKey::from_text(aes_key).map_err(|e| {
            BankError::Config(format!("{} is invalid: {}", AES_KEY_ENV, e))
        })?;

        if admin_password.is_empty() {
            return Err(BankError::Config(format!(
                "{} is not configured",
                ADMIN_PASSWORD_ENV
            )));
        }

        Ok(Self {
            secret_key,
            admin_password: Zeroizing::new(admin_password.to_string()),
        })
    }

    /// Load settings from the process environment
    ///
    /// Call [`load_dotenv`](super::load_dotenv) first to seed the
    /// environment from a `.env` file.
    pub fn from_env() -> BankResult<Self> {
        let aes_key = Zeroizing::new(std::env::var(AES_KEY_ENV).map_err(|_| {
            BankError::Config(format!("{} is not configured", AES_KEY_ENV))
        })?);
        let admin_password = Zeroizing::new(std::env::var(ADMIN_PASSWORD_ENV).map_err(|_| {
            BankError::Config(format!("{} is not configured", ADMIN_PASSWORD_ENV))
        })?);

        Self::new(&aes_key, &admin_password)
    }

    pub fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Check an administrator login attempt
    pub fn verify_admin_password(&self, candidate: &str) -> bool {
        // Compare every byte so timing does not reveal the matching prefix.
        let expected = self.admin_password.as_bytes();
        let given = candidate.as_bytes();
        if expected.len() != given.len() {
            return false;
        }
        expected
            .iter()
            .zip(given)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("secret_key", &self.secret_key)
            .field("admin_password", &"[REDACTED]")
            .finish()
    }
}
