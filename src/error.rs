//! Error types for the banking engine
//!
//! Every failure surfaces to the immediate caller as a [`BankError`]. The
//! variants are fine-grained so callers can match on them, and
//! [`BankError::category`] folds them back onto the coarse taxonomy used by
//! front ends (validation, business rule, encryption, persistence).

use std::fmt;

use thiserror::Error;

use crate::models::{Currency, Money};

/// The main error type for banking operations
#[derive(Error, Debug)]
pub enum BankError {
    /// Missing or malformed process configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed or missing client data
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Debit larger than the available balance
    #[error("Insufficient funds in account {iban}: need {needed}, have {available}")]
    InsufficientFunds {
        iban: String,
        needed: Money,
        available: Money,
    },

    /// Operation refused because the account is blocked
    #[error("Account {0} is BLOCKED. Cannot withdraw funds.")]
    AccountBlocked(String),

    /// No direct or reverse rate for the currency pair
    #[error("No exchange rate found for {from} to {to}")]
    NoExchangeRate { from: Currency, to: Currency },

    /// Any other business rule violation
    #[error("{0}")]
    BusinessRule(String),

    /// Cipher configuration or ciphertext errors
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// Snapshot load/save failures
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Coarse error taxonomy exposed to collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Validation,
    BusinessRule,
    Encryption,
    Persistence,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "configuration"),
            Self::Validation => write!(f, "validation"),
            Self::BusinessRule => write!(f, "business rule"),
            Self::Encryption => write!(f, "encryption"),
            Self::Persistence => write!(f, "persistence"),
        }
    }
}

impl BankError {
    /// Create a "not found" error for bank accounts
    pub fn account_not_found(iban: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: iban.into(),
        }
    }

    /// Create a "not found" error for clients
    pub fn client_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Client",
            identifier: identifier.into(),
        }
    }

    /// Map this error onto the coarse taxonomy
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Config(_) => ErrorCategory::Configuration,
            Self::Validation(_) => ErrorCategory::Validation,
            Self::NotFound { .. }
            | Self::InsufficientFunds { .. }
            | Self::AccountBlocked(_)
            | Self::NoExchangeRate { .. }
            | Self::BusinessRule(_) => ErrorCategory::BusinessRule,
            Self::Encryption(_) => ErrorCategory::Encryption,
            Self::Persistence(_) | Self::Io(_) => ErrorCategory::Persistence,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error belongs to the validation category
    pub fn is_validation(&self) -> bool {
        self.category() == ErrorCategory::Validation
    }

    /// Check if this error belongs to the business rule category
    pub fn is_business_rule(&self) -> bool {
        self.category() == ErrorCategory::BusinessRule
    }
}

impl From<std::io::Error> for BankError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for banking operations
pub type BankResult<T> = Result<T, BankError>;
