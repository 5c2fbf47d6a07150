//! Numeric transaction identifiers

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upper bound (exclusive) for generated transaction numbers
const MAX_TRANSACTION_ID: u64 = 1_000_000;

/// Numeric identifier of a ledger entry
///
/// Identifiers are random and only meant for display and correlation; they are
/// not guaranteed to be unique across the whole bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(u64);

impl TransactionId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(rand::thread_rng().gen_range(1..MAX_TRANSACTION_ID))
    }

    pub const fn from_u64(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "txn-{:06}", self.0)
    }
}

impl FromStr for TransactionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("txn-").unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}
