//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod admin;
pub mod client;
pub mod rates;

pub use account::{handle_account_command, AccountCommands};
pub use admin::{handle_admin_command, AdminArgs, AdminCommands};
pub use client::{handle_client_command, ClientCommands};
pub use rates::{handle_rates_command, RatesCommands};

use clap::Args;
use zeroize::Zeroizing;

use crate::bank::Bank;
use crate::error::{BankError, BankResult};
use crate::models::{AccountType, Client, Currency, Money};

/// Client login arguments shared by client and account commands
#[derive(Args, Debug, Clone)]
pub struct Credentials {
    /// Personal identifier (CNP)
    #[arg(long)]
    pub cnp: String,
    /// Password (prompted for when omitted)
    #[arg(long)]
    pub password: Option<String>,
}

impl Credentials {
    /// Log in, failing on an unknown CNP or wrong password
    pub fn authenticate(&self, bank: &Bank) -> BankResult<Client> {
        let password = self.password_or_prompt("Password: ")?;
        bank.clients()
            .login(&self.cnp, &password)?
            .ok_or_else(|| BankError::Validation("Invalid CNP or password".into()))
    }

    fn password_or_prompt(&self, prompt: &str) -> BankResult<Zeroizing<String>> {
        match &self.password {
            Some(password) => Ok(Zeroizing::new(password.clone())),
            None => prompt_password(prompt),
        }
    }
}

/// Read a password from the terminal without echo
pub fn prompt_password(prompt: &str) -> BankResult<Zeroizing<String>> {
    rpassword::prompt_password(prompt)
        .map(Zeroizing::new)
        .map_err(|e| BankError::Io(format!("Failed to read password: {}", e)))
}

/// Prompt for a new password with confirmation
pub fn prompt_new_password() -> BankResult<Zeroizing<String>> {
    let first = prompt_password("New password: ")?;
    let second = prompt_password("Confirm password: ")?;
    if *first != *second {
        return Err(BankError::Validation("Passwords do not match".into()));
    }
    Ok(first)
}

pub(crate) fn parse_amount(input: &str) -> BankResult<Money> {
    Money::parse(input).map_err(|e| {
        BankError::Validation(format!(
            "Invalid amount: '{}'. Use format like '100.50' or '100'. Error: {}",
            input, e
        ))
    })
}

pub(crate) fn parse_currency(input: &str) -> BankResult<Currency> {
    input.parse::<Currency>().map_err(BankError::Validation)
}

pub(crate) fn parse_account_type(input: &str) -> BankResult<AccountType> {
    input.parse::<AccountType>().map_err(BankError::Validation)
}

/// Refuse to act on an account the logged-in client does not own
pub(crate) fn ensure_owner(client: &Client, iban: &str) -> BankResult<()> {
    if client.owns(iban) {
        Ok(())
    } else {
        Err(BankError::account_not_found(iban))
    }
}
