//! Service layer
//!
//! Services borrow the shared repository and collaborators; they hold no
//! state of their own and are cheap to construct per operation.

pub mod bank;
pub mod client;
pub mod currency;
pub mod report;

pub use bank::{generate_iban, BankService, TransferResult};
pub use client::ClientService;
pub use currency::CurrencyService;
pub use report::{BankSummary, ReportService};
