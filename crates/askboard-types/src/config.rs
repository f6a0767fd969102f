//! Client configuration.
//!
//! `ClientConfig` mirrors the `config.toml` in the data directory. The base
//! URL is fixed for the lifetime of a client once loaded.

use serde::{Deserialize, Serialize};

/// Settings for talking to the Askboard API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Root every request path is resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Name of the credential store entry holding the bearer token.
    #[serde(default = "default_token_key")]
    pub token_key: String,

    /// Whole-request timeout. `None` leaves the transport default in place.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_token_key() -> String {
    "jwt".to_string()
}

fn default_user_agent() -> String {
    format!("askboard/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token_key: default_token_key(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}
