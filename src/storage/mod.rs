//! Storage layer
//!
//! The bank keeps a single snapshot file holding every client with their
//! nested accounts and transactions. Snapshots are written atomically.

pub mod clients;
pub mod file_io;
pub mod init;

pub use clients::ClientRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
