//! Session identity types: the signed-in user and the login/register form.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A string that must not show up in logs (bearer tokens, passwords).
///
/// Serializes transparently; only `Debug` and `Display` are redacted.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Redacted(String);

impl Redacted {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the underlying value.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the raw value.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Show masked representation: last 4 chars visible.
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 4 {
            "****".to_string()
        } else {
            let tail: String = chars[chars.len() - 4..].iter().collect();
            format!("****{tail}")
        }
    }
}

impl fmt::Debug for Redacted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Redacted(\"***\")")
    }
}

impl fmt::Display for Redacted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***")
    }
}

/// The user returned by the auth endpoints.
///
/// `token` is the bearer credential minted by the server on login or
/// registration; the caller decides whether to persist it.
/// Every other field is kept as received in `fields`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<Redacted>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl User {
    pub fn username(&self) -> Option<&str> {
        self.text("username")
    }

    pub fn display_name(&self) -> Option<&str> {
        self.text("displayName")
    }

    pub fn image(&self) -> Option<&str> {
        self.text("image")
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

/// Credentials submitted to login and the two register endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFormValues {
    pub email: String,

    pub password: Redacted,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl UserFormValues {
    /// Form for the login endpoint (email + password only).
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Redacted::new(password),
            username: None,
            display_name: None,
        }
    }
}
