//! Export of account data
//!
//! - CSV: an account's ledger, for spreadsheets

pub mod csv;

pub use self::csv::export_history_csv;
