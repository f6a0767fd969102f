//! OS keychain adapter for bearer tokens.
//!
//! Uses the `keyring` crate to store tokens via:
//! - macOS Keychain
//! - Linux Secret Service (GNOME Keyring, KDE Wallet)
//! - Windows Credential Manager

use secrecy::{ExposeSecret, SecretString};

use askboard_core::port::credential::CredentialStore;
use askboard_types::error::CredentialError;

/// Keychain-backed credential store. Every entry lives under one service name.
pub struct KeychainCredentialStore {
    service_name: String,
}

impl KeychainCredentialStore {
    /// Create a store with the default service name "askboard".
    pub fn new() -> Self {
        Self {
            service_name: "askboard".to_string(),
        }
    }

    /// Create a store with a custom service name (useful for testing).
    pub fn with_service(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    fn entry(&self, key: &str) -> Result<keyring::Entry, CredentialError> {
        keyring::Entry::new(&self.service_name, key)
            .map_err(|e| CredentialError::Unavailable(format!("keychain entry error: {e}")))
    }
}

impl Default for KeychainCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore for KeychainCredentialStore {
    async fn get(&self, key: &str) -> Result<Option<SecretString>, CredentialError> {
        let entry = self.entry(key)?;

        match entry.get_password() {
            Ok(value) => Ok(Some(SecretString::from(value))),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(CredentialError::Io(format!("keychain get error: {e}"))),
        }
    }

    async fn set(&self, key: &str, value: &SecretString) -> Result<(), CredentialError> {
        let entry = self.entry(key)?;

        entry
            .set_password(value.expose_secret())
            .map_err(|e| CredentialError::Io(format!("keychain set error: {e}")))
    }

    async fn remove(&self, key: &str) -> Result<(), CredentialError> {
        let entry = self.entry(key)?;

        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(CredentialError::Io(format!("keychain delete error: {e}"))),
        }
    }
}
