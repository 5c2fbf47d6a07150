//! Symmetric key material
//!
//! The key bytes are wiped from memory when the key is dropped and never
//! appear in `Debug` output.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{BankError, BankResult};

/// AES-128 key length in bytes
pub const KEY_SIZE: usize = 16;

/// A 16-byte AES key that zeros its contents on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey([u8; KEY_SIZE]);

impl SecretKey {
    /// Build a key from raw bytes
    ///
    /// # Errors
    ///
    /// Returns [`BankError::Encryption`] unless exactly [`KEY_SIZE`] bytes are given.
    pub fn from_bytes(bytes: &[u8]) -> BankResult<Self> {
        let key: [u8; KEY_SIZE] = bytes.try_into().map_err(|_| {
            BankError::Encryption(format!(
                "Invalid AES key: must be {} bytes, got {}",
                KEY_SIZE,
                bytes.len()
            ))
        })?;
        Ok(Self(key))
    }

    /// Build a key from a configured string, using its UTF-8 bytes verbatim
    pub fn from_text(text: &str) -> BankResult<Self> {
        if text.is_empty() {
            return Err(BankError::Encryption(
                "Invalid AES key: key is missing".into(),
            ));
        }
        Self::from_bytes(text.as_bytes())
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey([REDACTED])")
    }
}
