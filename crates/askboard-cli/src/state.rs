//! Application state: the API facade wired to config and a credential store.

use std::sync::Arc;

use anyhow::Context;

use askboard_core::client::ApiClient;
use askboard_core::port::credential::DynCredentialStore;
use askboard_core::resource::Api;
use askboard_infra::config::load_client_config;
use askboard_infra::credential::{FileCredentialStore, KeychainCredentialStore};
use askboard_infra::filesystem::resolve_data_dir;
use askboard_infra::http::ReqwestTransport;

use crate::cli::StoreKind;
use crate::ui::{ConsoleNotifier, TerminalNavigator};

pub struct AppState {
    pub api: Api,
}

impl AppState {
    /// Load config, pick the credential store, and wire the client.
    pub async fn init(
        store: StoreKind,
        api_url: Option<String>,
        quiet: bool,
    ) -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir)
            .await
            .with_context(|| format!("Failed to create {}", data_dir.display()))?;

        let mut config = load_client_config(&data_dir).await?;
        if let Some(url) = api_url {
            config.base_url = url;
        }

        let transport = ReqwestTransport::new(&config)?;
        let credentials: DynCredentialStore = match store {
            StoreKind::Keychain => Arc::new(KeychainCredentialStore::new()),
            StoreKind::File => Arc::new(FileCredentialStore::in_dir(&data_dir)),
        };

        tracing::debug!(
            base_url = %transport.base_url(),
            store = ?store,
            data_dir = %data_dir.display(),
            "Initialized API client"
        );

        let client = ApiClient::builder(Arc::new(transport), credentials)
            .navigator(Arc::new(TerminalNavigator::new(quiet)))
            .notifier(Arc::new(ConsoleNotifier::new(quiet)))
            .token_key(config.token_key.clone())
            .build();

        Ok(Self {
            api: Api::new(Arc::new(client)),
        })
    }
}
