//! Port trait definitions.
//!
//! `transport` and `credential` are implemented by `askboard-infra`;
//! `ui` is implemented by whatever front-end hosts the client.

pub mod credential;
pub mod transport;
pub mod ui;
