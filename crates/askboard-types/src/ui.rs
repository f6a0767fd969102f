//! Side-effect vocabulary: where to navigate and what to tell the user.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A view the front-end can be sent to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// The landing page (`/`).
    Root,
    /// The "not found" view (`/notfound`).
    NotFound,
    /// Any other application path.
    Path(String),
}

impl Route {
    pub fn as_path(&self) -> &str {
        match self {
            Route::Root => "/",
            Route::NotFound => "/notfound",
            Route::Path(path) => path,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

/// Severity of a transient notification (toast).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Error,
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationLevel::Info => write!(f, "info"),
            NotificationLevel::Error => write!(f, "error"),
        }
    }
}

/// A user-facing message shown by the notifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub const NETWORK_ERROR: &'static str = "Network error - make sure API is running!";
    pub const SESSION_EXPIRED: &'static str = "Your session has expired, please login again";
    pub const SERVER_ERROR: &'static str = "Server error - check the terminal for more info!";

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}
