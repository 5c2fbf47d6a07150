//! Field-level encryption for sensitive client data
//!
//! Personal identifiers and passwords are stored as AES-128 ciphertexts. The
//! cipher is deterministic so that encrypted values can be compared for
//! equality, which is how the repository looks clients up.

pub mod encryption;
pub mod secret_key;

pub use encryption::EncryptionService;
pub use secret_key::{SecretKey, KEY_SIZE};
