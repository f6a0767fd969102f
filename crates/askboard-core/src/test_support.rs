//! In-memory fakes for the ports, shared by this crate's unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use askboard_types::error::{ApiError, CredentialError};
use askboard_types::http::{ApiRequest, RawResponse};
use askboard_types::ui::{Notification, Route};

use crate::client::ApiClient;
use crate::port::credential::CredentialStore;
use crate::port::transport::HttpTransport;
use crate::port::ui::{Navigator, Notifier};

/// Transport that records requests and replays queued outcomes.
/// Answers `200 null` once the queue is empty.
#[derive(Default)]
pub struct FakeTransport {
    outcomes: Mutex<VecDeque<Result<RawResponse, ApiError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, response: RawResponse) {
        self.outcomes.lock().unwrap().push_back(Ok(response));
    }

    pub fn fail(&self, error: ApiError) {
        self.outcomes.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl HttpTransport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(RawResponse::new(200, Value::Null)))
    }
}

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub fn get_raw(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }
}

impl CredentialStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<SecretString>, CredentialError> {
        Ok(self.get_raw(key).map(SecretString::from))
    }

    async fn set(&self, key: &str, value: &SecretString) -> Result<(), CredentialError> {
        self.insert(key, value.expose_secret());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), CredentialError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

/// Store whose every operation fails.
pub struct BrokenStore;

impl CredentialStore for BrokenStore {
    async fn get(&self, _key: &str) -> Result<Option<SecretString>, CredentialError> {
        Err(CredentialError::Unavailable("locked".to_string()))
    }

    async fn set(&self, _key: &str, _value: &SecretString) -> Result<(), CredentialError> {
        Err(CredentialError::Unavailable("locked".to_string()))
    }

    async fn remove(&self, _key: &str) -> Result<(), CredentialError> {
        Err(CredentialError::Unavailable("locked".to_string()))
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &Route) {
        self.routes.lock().unwrap().push(route.clone());
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        self.notifications.lock().unwrap().push(notification.clone());
    }
}

/// A client wired to fakes, with handles kept for assertions.
pub struct Harness {
    pub client: Arc<ApiClient>,
    pub transport: Arc<FakeTransport>,
    pub store: Arc<MemoryStore>,
    pub navigator: Arc<RecordingNavigator>,
    pub notifier: Arc<RecordingNotifier>,
}

impl Harness {
    pub fn new() -> Self {
        let transport = Arc::new(FakeTransport::new());
        let store = Arc::new(MemoryStore::default());
        let navigator = Arc::new(RecordingNavigator::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let client = ApiClient::builder(transport.clone(), store.clone())
            .navigator(navigator.clone())
            .notifier(notifier.clone())
            .build();

        Self {
            client: Arc::new(client),
            transport,
            store,
            navigator,
            notifier,
        }
    }
}
