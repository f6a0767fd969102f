//! Response interceptor: a list of {condition, effects} rules evaluated
//! against every failed request.
//!
//! Evaluation is pure ([`InterceptorRules::evaluate`] returns the effects to
//! apply); the client applies them against its navigator, notifier, and
//! credential store, then hands the original error back to the caller.
//! Every matching rule fires, in order.

use std::fmt;
use std::sync::Arc;

use askboard_types::error::ApiError;
use askboard_types::ui::{Notification, Route};

/// Predicate half of a rule.
#[derive(Clone)]
pub enum Condition {
    /// The request never got a response.
    NetworkFailure,
    /// The server answered with exactly this status.
    Status(u16),
    /// 401 with the expired-token `WWW-Authenticate` challenge.
    ExpiredToken,
    /// 400 to a GET whose body reports an `errors.id` validation failure.
    ///
    /// Matches the error shape of the id-validated lookup endpoints.
    InvalidIdLookup,
    Custom(Arc<dyn Fn(&ApiError) -> bool + Send + Sync>),
}

impl Condition {
    pub fn matches(&self, error: &ApiError) -> bool {
        match self {
            Condition::NetworkFailure => matches!(error, ApiError::Network { .. }),
            Condition::Status(status) => error.status() == Some(*status),
            Condition::ExpiredToken => error.as_http().is_some_and(|f| f.is_expired_token()),
            Condition::InvalidIdLookup => {
                error.as_http().is_some_and(|f| f.is_invalid_id_lookup())
            }
            Condition::Custom(predicate) => predicate(error),
        }
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::NetworkFailure => write!(f, "NetworkFailure"),
            Condition::Status(status) => write!(f, "Status({status})"),
            Condition::ExpiredToken => write!(f, "ExpiredToken"),
            Condition::InvalidIdLookup => write!(f, "InvalidIdLookup"),
            Condition::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Side effect triggered by a matching rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Notify(Notification),
    Navigate(Route),
    /// Delete the stored bearer token.
    ClearCredential,
}

#[derive(Debug, Clone)]
pub struct InterceptorRule {
    pub name: String,
    pub condition: Condition,
    pub effects: Vec<Effect>,
}

impl InterceptorRule {
    pub fn new(name: impl Into<String>, condition: Condition, effects: Vec<Effect>) -> Self {
        Self {
            name: name.into(),
            condition,
            effects,
        }
    }
}

/// Ordered rule list.
#[derive(Debug, Clone, Default)]
pub struct InterceptorRules {
    rules: Vec<InterceptorRule>,
}

impl InterceptorRules {
    /// No rules: errors propagate without side effects.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The board's dispatch table.
    ///
    /// | condition | effects |
    /// |---|---|
    /// | network failure | error toast |
    /// | 404 | go to not-found |
    /// | 401 + expired-token challenge | clear token, go to root, info toast |
    /// | 400 on GET with `errors.id` | go to not-found |
    /// | 500 | error toast |
    pub fn standard() -> Self {
        Self {
            rules: vec![
                InterceptorRule::new(
                    "network-failure",
                    Condition::NetworkFailure,
                    vec![Effect::Notify(Notification::error(
                        Notification::NETWORK_ERROR,
                    ))],
                ),
                InterceptorRule::new(
                    "not-found",
                    Condition::Status(404),
                    vec![Effect::Navigate(Route::NotFound)],
                ),
                InterceptorRule::new(
                    "expired-token",
                    Condition::ExpiredToken,
                    vec![
                        Effect::ClearCredential,
                        Effect::Navigate(Route::Root),
                        Effect::Notify(Notification::info(Notification::SESSION_EXPIRED)),
                    ],
                ),
                InterceptorRule::new(
                    "invalid-id-lookup",
                    Condition::InvalidIdLookup,
                    vec![Effect::Navigate(Route::NotFound)],
                ),
                InterceptorRule::new(
                    "server-error",
                    Condition::Status(500),
                    vec![Effect::Notify(Notification::error(
                        Notification::SERVER_ERROR,
                    ))],
                ),
            ],
        }
    }

    pub fn push(&mut self, rule: InterceptorRule) {
        self.rules.push(rule);
    }

    pub fn with_rule(mut self, rule: InterceptorRule) -> Self {
        self.push(rule);
        self
    }

    pub fn rules(&self) -> &[InterceptorRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Names of the rules that match `error`, in order.
    pub fn matching(&self, error: &ApiError) -> Vec<&str> {
        self.rules
            .iter()
            .filter(|rule| rule.condition.matches(error))
            .map(|rule| rule.name.as_str())
            .collect()
    }

    /// Effects of every matching rule, concatenated in rule order.
    pub fn evaluate(&self, error: &ApiError) -> Vec<Effect> {
        self.rules
            .iter()
            .filter(|rule| rule.condition.matches(error))
            .flat_map(|rule| rule.effects.iter().cloned())
            .collect()
    }
}
