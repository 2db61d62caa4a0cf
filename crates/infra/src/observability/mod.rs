//! Observability infrastructure
//!
//! Structured logging via `tracing`. The subscriber is installed once by the
//! binary; library crates only emit events.

pub mod logging;

pub use logging::{init_tracing, LogFormat, DEFAULT_LOG_FILTER};
