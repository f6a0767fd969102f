//! Shared domain types for Askboard.
//!
//! This crate contains the data transfer objects exchanged with the Askboard
//! REST API (questions, answers, users), the client configuration, the
//! navigation/notification vocabulary used by the response interceptor, and
//! the [`error::ApiError`] sum type produced at the transport boundary.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod answer;
pub mod config;
pub mod error;
pub mod http;
pub mod query;
pub mod question;
pub mod ui;
pub mod user;
