//! Business logic and port definitions for the Askboard API client.
//!
//! This crate defines the "ports" the infrastructure layer implements
//! (HTTP transport, credential storage) and the front-end collaborators the
//! client reports to (navigator, notifier). On top of them it builds the
//! request pipeline ([`client::ApiClient`]), the rule-driven response
//! interceptor, and the resource clients grouped under [`resource::Api`].
//!
//! It depends only on `askboard-types` -- never on `askboard-infra` or any
//! HTTP/storage crate.

pub mod client;
pub mod interceptor;
pub mod port;
pub mod resource;

#[cfg(test)]
pub(crate) mod test_support;
