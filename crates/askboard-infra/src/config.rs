//! Client configuration loader.
//!
//! Reads `config.toml` from the data directory (`~/.askboard/` by default)
//! and applies environment overrides. Resolved once at process start; the
//! resulting base URL is not revisited afterwards.

use std::path::Path;

use askboard_types::config::ClientConfig;
use askboard_types::error::ApiError;

use crate::http::reqwest_transport::parse_base_url;

/// Environment variable providing the API base URL.
pub const API_URL_ENV: &str = "ASKBOARD_API_URL";

/// Load client configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, starts from [`ClientConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and uses the default.
/// - `ASKBOARD_API_URL`, when set, replaces the base URL.
///
/// The resulting base URL must be an absolute http(s) URL.
pub async fn load_client_config(data_dir: &Path) -> Result<ClientConfig, ApiError> {
    let config = read_config_file(data_dir).await;
    let config = apply_env_overrides(config, |name| std::env::var(name).ok());
    parse_base_url(&config.base_url)?;
    Ok(config)
}

async fn read_config_file(data_dir: &Path) -> ClientConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return ClientConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return ClientConfig::default();
        }
    };

    match toml::from_str::<ClientConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            ClientConfig::default()
        }
    }
}

/// Apply environment overrides using `lookup` to read variables.
pub fn apply_env_overrides(
    mut config: ClientConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> ClientConfig {
    if let Some(url) = lookup(API_URL_ENV).filter(|url| !url.trim().is_empty()) {
        config.base_url = url.trim().to_string();
    }
    config
}
