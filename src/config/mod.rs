//! Configuration module
//!
//! - Data file locations (`paths`)
//! - Startup secrets loaded from the environment (`settings`)

pub mod paths;
pub mod settings;

pub use paths::BankPaths;
pub use settings::Settings;

use std::path::PathBuf;

/// Seed the process environment from a `.env` file, if one is found in the
/// working directory or its parents
///
/// Variables already set in the environment take precedence. Must run before
/// anything reads the environment (log filter, data directory, secrets).
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}
