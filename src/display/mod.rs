//! Display formatting for terminal output
//!
//! Renders accounts, ledgers, clients and reports as plain text.

pub mod account;
pub mod client;
pub mod report;
pub mod transaction;

pub use account::{format_account_details, format_account_list};
pub use client::{format_client_details, format_client_list, ClientRow};
pub use report::{format_rates, format_summary};
pub use transaction::{format_history, format_transaction_row};
