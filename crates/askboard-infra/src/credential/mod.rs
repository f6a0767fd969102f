//! Credential store implementations.
//!
//! - `keychain`: OS keychain via the `keyring` crate
//! - `file`: JSON map in the data directory (headless machines, CI)
//! - `memory`: process-local map, nothing persisted

pub mod file;
pub mod keychain;
pub mod memory;

pub use file::FileCredentialStore;
pub use keychain::KeychainCredentialStore;
pub use memory::MemoryCredentialStore;
