//! Core data models for the bank
//!
//! Clients own accounts, accounts own their transaction history. Every model
//! is plain data: cloning a client yields a fully independent copy.

pub mod account;
pub mod client;
pub mod currency;
pub mod ids;
pub mod money;
pub mod transaction;

pub use account::{AccountType, BankAccount};
pub use client::{Client, ClientRegistration};
pub use currency::Currency;
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{AccountSnapshot, Transaction, TransactionType};
