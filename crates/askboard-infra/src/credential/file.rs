//! File-backed credential store.
//!
//! Entries are a flat JSON object in `{data_dir}/credentials.json`. Writes go
//! to a sibling temp file, created with mode 0600 on Unix, that is then
//! renamed over the original.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use askboard_core::port::credential::CredentialStore;
use askboard_types::error::CredentialError;

pub struct FileCredentialStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Store at `{data_dir}/credentials.json`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join("credentials.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<BTreeMap<String, String>, CredentialError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(CredentialError::Io(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )));
            }
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content)
            .map_err(|e| CredentialError::Corrupt(format!("{}: {e}", self.path.display())))
    }

    async fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), CredentialError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                CredentialError::Io(format!("failed to create {}: {e}", parent.display()))
            })?;
        }

        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| CredentialError::Io(format!("failed to serialize credentials: {e}")))?;

        let tmp = self.path.with_extension("json.tmp");
        write_private(&tmp, content.as_bytes()).await?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            CredentialError::Io(format!("failed to replace {}: {e}", self.path.display()))
        })
    }
}

/// Write `bytes` to a freshly created file that only the owner can read.
///
/// A leftover file at `path` is removed first so the mode applies at
/// creation; the token is never on disk with wider permissions.
async fn write_private(path: &Path, bytes: &[u8]) -> Result<(), CredentialError> {
    let io_err =
        |e: std::io::Error| CredentialError::Io(format!("failed to write {}: {e}", path.display()));

    match tokio::fs::remove_file(path).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(io_err(e)),
    }

    let mut options = tokio::fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options.open(path).await.map_err(io_err)?;
    file.write_all(bytes).await.map_err(io_err)?;
    file.sync_all().await.map_err(io_err)
}

impl CredentialStore for FileCredentialStore {
    async fn get(&self, key: &str) -> Result<Option<SecretString>, CredentialError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load().await?;
        Ok(entries.remove(key).map(SecretString::from))
    }

    async fn set(&self, key: &str, value: &SecretString) -> Result<(), CredentialError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load().await?;
        entries.insert(key.to_string(), value.expose_secret().to_string());
        self.save(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<(), CredentialError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load().await?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.save(&entries).await
    }
}
