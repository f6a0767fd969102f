//! `ApiClient` -- the request pipeline every resource call goes through.
//!
//! 1. Read the bearer token from the credential store and attach it as
//!    `Authorization: Bearer <token>` when present.
//! 2. Send through the transport.
//! 3. On 2xx, decode the body into the caller's type.
//! 4. Otherwise run the interceptor rules, apply their effects, and return
//!    the original error unchanged.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use askboard_types::error::{ApiError, CredentialError, HttpFailure};
use askboard_types::http::{ApiRequest, FilePart, Method};
use askboard_types::query::QueryParams;

use crate::interceptor::{Effect, InterceptorRule, InterceptorRules};
use crate::port::credential::DynCredentialStore;
use crate::port::transport::DynTransport;
use crate::port::ui::{Navigator, Notifier, TracingNavigator, TracingNotifier};

/// Default credential store entry holding the bearer token.
pub const DEFAULT_TOKEN_KEY: &str = "jwt";

/// Explicitly constructed API client shared by all resource clients.
///
/// Nothing here is global: each client owns its transport, credential store,
/// front-end collaborators, and interceptor rules.
pub struct ApiClient {
    transport: DynTransport,
    credentials: DynCredentialStore,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    rules: InterceptorRules,
    token_key: String,
}

impl ApiClient {
    pub fn builder(transport: DynTransport, credentials: DynCredentialStore) -> ApiClientBuilder {
        ApiClientBuilder::new(transport, credentials)
    }

    pub fn rules(&self) -> &InterceptorRules {
        &self.rules
    }

    pub fn token_key(&self) -> &str {
        &self.token_key
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(ApiRequest::new(Method::Get, path)).await
    }

    /// GET with the parameters forwarded verbatim as the query string.
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryParams,
    ) -> Result<T, ApiError> {
        self.execute(ApiRequest::new(Method::Get, path).with_query(query.clone()))
            .await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode(body)?;
        self.execute(ApiRequest::new(Method::Post, path).with_json(body))
            .await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode(body)?;
        self.execute(ApiRequest::new(Method::Put, path).with_json(body))
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(ApiRequest::new(Method::Delete, path)).await
    }

    /// Upload a single file as multipart form data under the `File` field.
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        file: FilePart,
    ) -> Result<T, ApiError> {
        self.execute(ApiRequest::new(Method::Post, path).with_file(file))
            .await
    }

    /// Run a prepared request through the full pipeline.
    pub async fn execute<T: DeserializeOwned>(&self, mut request: ApiRequest) -> Result<T, ApiError> {
        self.authorize(&mut request).await;

        let method = request.method;
        let path = request.path.clone();
        debug!(%method, %path, "Sending API request");

        let outcome = match self.transport.send_boxed(request).await {
            Ok(response) if response.is_success() => Ok(response),
            Ok(response) => Err(ApiError::Http(HttpFailure::from_response(
                method, &path, response,
            ))),
            Err(error) => Err(error),
        };

        match outcome {
            Ok(response) => {
                debug!(%method, %path, status = response.status, "API request succeeded");
                serde_json::from_value(response.body)
                    .map_err(|e| ApiError::Decode(format!("{method} {path}: {e}")))
            }
            Err(error) => {
                warn!(%method, %path, status = ?error.status(), error = %error, "API request failed");
                self.intercept(&error).await;
                Err(error)
            }
        }
    }

    /// Persist a bearer token for subsequent requests.
    pub async fn store_token(&self, token: &SecretString) -> Result<(), CredentialError> {
        self.credentials.set_boxed(&self.token_key, token).await
    }

    /// Forget the stored bearer token.
    pub async fn clear_token(&self) -> Result<(), CredentialError> {
        self.credentials.remove_boxed(&self.token_key).await
    }

    pub async fn token(&self) -> Result<Option<SecretString>, CredentialError> {
        self.credentials.get_boxed(&self.token_key).await
    }

    async fn authorize(&self, request: &mut ApiRequest) {
        match self.credentials.get_boxed(&self.token_key).await {
            Ok(Some(token)) => {
                request.set_header("Authorization", format!("Bearer {}", token.expose_secret()));
            }
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "Could not read stored token, sending request unauthenticated");
            }
        }
    }

    async fn intercept(&self, error: &ApiError) {
        let effects = self.rules.evaluate(error);
        if effects.is_empty() {
            return;
        }
        debug!(rules = ?self.rules.matching(error), "Interceptor rules matched");

        for effect in effects {
            match effect {
                Effect::Notify(notification) => self.notifier.notify(&notification),
                Effect::Navigate(route) => self.navigator.navigate(&route),
                Effect::ClearCredential => {
                    if let Err(e) = self.credentials.remove_boxed(&self.token_key).await {
                        warn!(error = %e, "Failed to remove expired token");
                    }
                }
            }
        }
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Builder for [`ApiClient`].
///
/// Defaults: the standard interceptor rules, token key `jwt`, and
/// navigator/notifier implementations that only log.
pub struct ApiClientBuilder {
    transport: DynTransport,
    credentials: DynCredentialStore,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    rules: InterceptorRules,
    token_key: String,
}

impl ApiClientBuilder {
    pub fn new(transport: DynTransport, credentials: DynCredentialStore) -> Self {
        Self {
            transport,
            credentials,
            navigator: Arc::new(TracingNavigator),
            notifier: Arc::new(TracingNotifier),
            rules: InterceptorRules::standard(),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
        }
    }

    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Replace the whole rule list.
    pub fn rules(mut self, rules: InterceptorRules) -> Self {
        self.rules = rules;
        self
    }

    /// Append one rule after the current ones.
    pub fn rule(mut self, rule: InterceptorRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn token_key(mut self, token_key: impl Into<String>) -> Self {
        self.token_key = token_key.into();
        self
    }

    pub fn build(self) -> ApiClient {
        ApiClient {
            transport: self.transport,
            credentials: self.credentials,
            navigator: self.navigator,
            notifier: self.notifier,
            rules: self.rules,
            token_key: self.token_key,
        }
    }
}
