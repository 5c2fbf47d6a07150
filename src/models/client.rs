//! Client model
//!
//! A client owns an ordered list of bank accounts. The personal identifier
//! (CNP) and password are held in their encrypted form once the client has
//! been registered; the encrypted identifier is the client's key.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::account::BankAccount;

/// A bank client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,

    /// Encrypted personal identifier; never changes after registration
    #[serde(rename = "cnp")]
    pub personal_id: String,

    /// Encrypted password
    pub password: String,

    pub gdpr_accepted: bool,

    /// Owned accounts, in creation order
    #[serde(default)]
    pub accounts: Vec<BankAccount>,
}

impl Client {
    /// Display name used on ledger entries
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }

    /// Find an owned account by IBAN
    pub fn account(&self, iban: &str) -> Option<&BankAccount> {
        self.accounts.iter().find(|a| a.iban == iban)
    }

    /// Find an owned account by IBAN for modification
    pub fn account_mut(&mut self, iban: &str) -> Option<&mut BankAccount> {
        self.accounts.iter_mut().find(|a| a.iban == iban)
    }

    pub fn owns(&self, iban: &str) -> bool {
        self.account(iban).is_some()
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.full_name(), self.email)
    }
}

/// Plaintext registration data as entered by the client
#[derive(Clone, Default)]
pub struct ClientRegistration {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub cnp: String,
    pub password: String,
    pub gdpr_accepted: bool,
}

impl ClientRegistration {
    /// Build the not-yet-encrypted client this registration describes
    pub fn to_client(&self) -> Client {
        Client {
            firstname: self.firstname.trim().to_string(),
            lastname: self.lastname.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            personal_id: self.cnp.trim().to_string(),
            password: self.password.clone(),
            gdpr_accepted: self.gdpr_accepted,
            accounts: Vec::new(),
        }
    }
}

impl fmt::Debug for ClientRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientRegistration")
            .field("firstname", &self.firstname)
            .field("lastname", &self.lastname)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("cnp", &"[REDACTED]")
            .field("password", &"[REDACTED]")
            .field("gdpr_accepted", &self.gdpr_accepted)
            .finish()
    }
}
