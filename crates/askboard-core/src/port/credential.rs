//! Credential store trait and its object-safe wrapper.
//!
//! Follows the blanket-impl pattern used for transports:
//! 1. `CredentialStore` uses native async fn in traits (RPITIT)
//! 2. `CredentialStoreDyn` boxes the futures so it can be a trait object
//! 3. `DynCredentialStore` is the shared handle the client holds

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use secrecy::SecretString;

use askboard_types::error::CredentialError;

/// A key-value store local to the client process holding bearer tokens.
///
/// Keys are plain entry names (the client uses a single one, `jwt` by
/// default). Values are wrapped in [`SecretString`] so they never reach logs.
pub trait CredentialStore: Send + Sync {
    /// Read an entry. Returns None if it does not exist.
    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<SecretString>, CredentialError>> + Send;

    /// Create or overwrite an entry.
    fn set(
        &self,
        key: &str,
        value: &SecretString,
    ) -> impl Future<Output = Result<(), CredentialError>> + Send;

    /// Delete an entry. No-op if it does not exist.
    fn remove(&self, key: &str) -> impl Future<Output = Result<(), CredentialError>> + Send;
}

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Object-safe version of [`CredentialStore`] with boxed futures.
pub trait CredentialStoreDyn: Send + Sync {
    fn get_boxed<'a>(
        &'a self,
        key: &'a str,
    ) -> BoxFuture<'a, Result<Option<SecretString>, CredentialError>>;

    fn set_boxed<'a>(
        &'a self,
        key: &'a str,
        value: &'a SecretString,
    ) -> BoxFuture<'a, Result<(), CredentialError>>;

    fn remove_boxed<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<(), CredentialError>>;
}

impl<T: CredentialStore> CredentialStoreDyn for T {
    fn get_boxed<'a>(
        &'a self,
        key: &'a str,
    ) -> BoxFuture<'a, Result<Option<SecretString>, CredentialError>> {
        Box::pin(self.get(key))
    }

    fn set_boxed<'a>(
        &'a self,
        key: &'a str,
        value: &'a SecretString,
    ) -> BoxFuture<'a, Result<(), CredentialError>> {
        Box::pin(self.set(key, value))
    }

    fn remove_boxed<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<(), CredentialError>> {
        Box::pin(self.remove(key))
    }
}

/// Shared, type-erased credential store.
pub type DynCredentialStore = Arc<dyn CredentialStoreDyn>;
