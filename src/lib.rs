//! ppoo-bank - a retail bank engine
//!
//! Clients register with a validated personal identifier (CNP), open
//! accounts in several currencies and move money between them: cash
//! deposits and withdrawals, and transfers with currency conversion.
//! Everything is kept in one JSON snapshot; personal identifiers and
//! passwords are stored AES-encrypted.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data paths and startup secrets
//! - `error`: Custom error types
//! - `models`: Core data models (clients, accounts, transactions, money)
//! - `validation`: Client data checks, including the CNP checksum
//! - `crypto`: Deterministic field encryption
//! - `storage`: Client repository and JSON snapshot I/O
//! - `services`: Business logic layer
//! - `bank`: Context owning the shared components
//! - `export`: CSV export of account history
//! - `logging`: `tracing` subscriber setup
//! - `cli` / `display`: Command handlers and terminal formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use ppoo_bank::bank::Bank;
//! use ppoo_bank::config::{load_dotenv, BankPaths, Settings};
//!
//! load_dotenv();
//! let bank = Bank::open(BankPaths::new()?, Settings::from_env()?)?;
//! let client = bank.clients().login("1960529460012", "secret")?;
//! bank.shutdown()?;
//! ```

pub mod bank;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod validation;

pub use bank::Bank;
pub use error::{BankError, BankResult};
