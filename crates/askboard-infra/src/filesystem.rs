//! Data directory resolution.

use std::path::PathBuf;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "ASKBOARD_DATA_DIR";

/// Resolve the directory holding `config.toml` and `credentials.json`.
///
/// Priority: `ASKBOARD_DATA_DIR`, then `~/.askboard`, then `./.askboard`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".askboard");
    }

    PathBuf::from(".askboard")
}
