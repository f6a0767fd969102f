use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

use crate::http::{Method, RawResponse};

/// `WWW-Authenticate` challenge the server sends when a bearer token expired.
pub const EXPIRED_TOKEN_CHALLENGE: &str =
    r#"Bearer error="invalid_token", error_description="The token is expired""#;

/// A non-2xx response, captured once at the transport boundary together with
/// the request that caused it.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpFailure {
    pub status: u16,
    pub method: Method,
    pub path: String,
    pub headers: BTreeMap<String, String>,
    pub body: Value,
}

impl HttpFailure {
    pub fn from_response(method: Method, path: impl Into<String>, response: RawResponse) -> Self {
        Self {
            status: response.status,
            method,
            path: path.into(),
            headers: response.headers,
            body: response.body,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// 401 carrying the expired-token challenge, alone or among others
    /// (repeated headers arrive joined with `", "`).
    pub fn is_expired_token(&self) -> bool {
        self.status == 401
            && self
                .header("www-authenticate")
                .is_some_and(|challenge| challenge.contains(EXPIRED_TOKEN_CHALLENGE))
    }

    /// 400 on a GET whose validation errors mention `id`.
    ///
    /// Matches bodies shaped `{"errors": {"id": [...]}}`. Any other body
    /// shape is simply not a match.
    pub fn is_invalid_id_lookup(&self) -> bool {
        self.status == 400
            && self.method == Method::Get
            && self
                .body
                .get("errors")
                .and_then(Value::as_object)
                .is_some_and(|errors| errors.contains_key("id"))
    }
}

/// Error categories that drive the response interceptor's side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    NetworkFailure,
    NotFound,
    AuthExpired,
    ServerError,
    Unclassified,
}

/// Errors from credential store backends.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("credential store unavailable: {0}")]
    Unavailable(String),

    #[error("credential store I/O error: {0}")]
    Io(String),

    #[error("credential store is corrupt: {0}")]
    Corrupt(String),
}

/// Errors surfaced by every API operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was received.
    #[error("network error: {message}")]
    Network { message: String },

    #[error("HTTP {} on {} {}", .0.status, .0.method, .0.path)]
    Http(HttpFailure),

    #[error("{resource} has no identifier")]
    MissingIdentifier { resource: &'static str },

    #[error("failed to encode request body: {0}")]
    Encode(String),

    #[error("failed to decode response body: {0}")]
    Decode(String),

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    pub fn network(message: impl Into<String>) -> Self {
        ApiError::Network {
            message: message.into(),
        }
    }

    /// Status code when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http(failure) => Some(failure.status),
            _ => None,
        }
    }

    pub fn as_http(&self) -> Option<&HttpFailure> {
        match self {
            ApiError::Http(failure) => Some(failure),
            _ => None,
        }
    }

    /// Map this error onto the interceptor taxonomy.
    pub fn class(&self) -> ErrorClass {
        match self {
            ApiError::Network { .. } => ErrorClass::NetworkFailure,
            ApiError::Http(failure) => match failure.status {
                404 => ErrorClass::NotFound,
                400 if failure.is_invalid_id_lookup() => ErrorClass::NotFound,
                401 if failure.is_expired_token() => ErrorClass::AuthExpired,
                500 => ErrorClass::ServerError,
                _ => ErrorClass::Unclassified,
            },
            _ => ErrorClass::Unclassified,
        }
    }
}
