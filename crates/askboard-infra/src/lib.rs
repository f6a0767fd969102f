//! Infrastructure layer for Askboard.
//!
//! Contains implementations of the ports defined in `askboard-core`:
//! the reqwest HTTP transport, credential stores (OS keychain, JSON file,
//! in-memory), configuration loading, and data directory resolution.

pub mod config;
pub mod credential;
pub mod filesystem;
pub mod http;
