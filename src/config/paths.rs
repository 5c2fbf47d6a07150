//! Path management for the bank's data files
//!
//! ## Path Resolution Order
//!
//! 1. `BANK_DATA_DIR` environment variable (if set)
//! 2. The platform data directory for `ppoo-bank` (via `directories`)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::BankError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "BANK_DATA_DIR";

/// Manages all paths used by the bank
#[derive(Debug, Clone)]
pub struct BankPaths {
    base_dir: PathBuf,
}

impl BankPaths {
    /// Resolve the base directory from the environment or platform defaults
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, BankError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create BankPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Client collection snapshot
    pub fn clients_file(&self) -> PathBuf {
        self.data_dir().join("clients.json")
    }

    /// Exchange-rate table
    pub fn exchange_rates_file(&self) -> PathBuf {
        self.data_dir().join("exchange_rates.txt")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), BankError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BankError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BankError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if the bank has been initialized (rates table exists)
    pub fn is_initialized(&self) -> bool {
        self.exchange_rates_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, BankError> {
    ProjectDirs::from("ro", "ppoo", "ppoo-bank")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| BankError::Config("Could not determine home directory".into()))
}
