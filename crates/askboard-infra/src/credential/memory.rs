use dashmap::DashMap;
use secrecy::{ExposeSecret, SecretString};

use askboard_core::port::credential::CredentialStore;
use askboard_types::error::CredentialError;

/// Process-local credential store. Tokens are lost when the process exits.
#[derive(Default)]
pub struct MemoryCredentialStore {
    entries: DashMap<String, String>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CredentialStore for MemoryCredentialStore {
    async fn get(&self, key: &str) -> Result<Option<SecretString>, CredentialError> {
        Ok(self
            .entries
            .get(key)
            .map(|value| SecretString::from(value.value().clone())))
    }

    async fn set(&self, key: &str, value: &SecretString) -> Result<(), CredentialError> {
        self.entries
            .insert(key.to_string(), value.expose_secret().to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), CredentialError> {
        self.entries.remove(key);
        Ok(())
    }
}
