//! Storage initialization
//!
//! Handles first-run setup: directories and a starter exchange-rate table.

use std::fs;

use crate::config::paths::BankPaths;
use crate::error::BankError;

/// Starter rates written on first run, one `FROM:TO:RATE` per line
pub const DEFAULT_EXCHANGE_RATES: &str = "\
EUR:RON:4.97
USD:RON:4.58
GBP:RON:5.81
CHF:RON:5.21
EUR:USD:1.08
EUR:GBP:0.85
EUR:CHF:0.95
USD:GBP:0.79
";

/// Initialize storage for a fresh installation
///
/// Existing files are left untouched.
pub fn initialize_storage(paths: &BankPaths) -> Result<(), BankError> {
    paths.ensure_directories()?;

    let rates_file = paths.exchange_rates_file();
    if !rates_file.exists() {
        fs::write(&rates_file, DEFAULT_EXCHANGE_RATES).map_err(|e| {
            BankError::Persistence(format!(
                "Failed to write {}: {}",
                rates_file.display(),
                e
            ))
        })?;
        tracing::info!(path = %rates_file.display(), "created default exchange rates");
    }

    Ok(())
}
