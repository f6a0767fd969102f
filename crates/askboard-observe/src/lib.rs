//! Observability setup shared by Askboard binaries.

pub mod tracing_setup;
