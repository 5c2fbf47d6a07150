//! AES-128-ECB field encryption
//!
//! Each value is padded with PKCS#7, encrypted block by block and Base64
//! encoded. The mode is deterministic: the same plaintext always yields the
//! same ciphertext under the same key, and there is no authentication tag.
//! Lookups on encrypted identifiers depend on that property.

use aes::Aes128;
use base64::{engine::general_purpose::STANDARD, Engine};
use ecb::cipher::block_padding::Pkcs7;
use ecb::cipher::{BlockDecryptMut, BlockEncryptMut, KeyInit};

use crate::error::{BankError, BankResult};

use super::secret_key::SecretKey;

type Aes128EcbEnc = ecb::Encryptor<Aes128>;
type Aes128EcbDec = ecb::Decryptor<Aes128>;

/// AES block size in bytes
const BLOCK_SIZE: usize = 16;

/// Encrypts and decrypts sensitive client fields with a fixed key
#[derive(Debug, Clone)]
pub struct EncryptionService {
    key: SecretKey,
}

impl EncryptionService {
    /// Create a service from an already validated key
    pub fn new(key: SecretKey) -> Self {
        Self { key }
    }

    /// Create a service from the configured key text
    ///
    /// # Errors
    ///
    /// Fails with [`BankError::Encryption`] if the key is missing or not 16 bytes.
    pub fn from_key_text(key: &str) -> BankResult<Self> {
        Ok(Self::new(SecretKey::from_text(key)?))
    }

    /// Encrypt a string, returning Base64 ciphertext
    pub fn encrypt(&self, plaintext: &str) -> BankResult<String> {
        let cipher = Aes128EcbEnc::new_from_slice(self.key.as_bytes())
            .map_err(|e| BankError::Encryption(format!("Failed to create cipher: {}", e)))?;

        let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());
        Ok(STANDARD.encode(ciphertext))
    }

    /// Decrypt Base64 ciphertext produced by [`EncryptionService::encrypt`]
    ///
    /// # Errors
    ///
    /// Fails on malformed Base64, a length that is not a whole number of
    /// blocks, bad padding (usually a mismatched key) or non-UTF-8 output.
    pub fn decrypt(&self, ciphertext: &str) -> BankResult<String> {
        let bytes = STANDARD
            .decode(ciphertext.trim())
            .map_err(|e| BankError::Encryption(format!("Invalid ciphertext encoding: {}", e)))?;

        if bytes.is_empty() || bytes.len() % BLOCK_SIZE != 0 {
            return Err(BankError::Encryption(format!(
                "Invalid ciphertext length: {} bytes is not a positive multiple of {}",
                bytes.len(),
                BLOCK_SIZE
            )));
        }

        let cipher = Aes128EcbDec::new_from_slice(self.key.as_bytes())
            .map_err(|e| BankError::Encryption(format!("Failed to create cipher: {}", e)))?;

        let plaintext = cipher.decrypt_padded_vec_mut::<Pkcs7>(&bytes).map_err(|_| {
            BankError::Encryption("Decryption failed: invalid key or corrupted data".to_string())
        })?;

        String::from_utf8(plaintext).map_err(|e| {
            BankError::Encryption(format!("Invalid UTF-8 in decrypted data: {}", e))
        })
    }
}
