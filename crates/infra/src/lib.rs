//! # Mountview Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP client with retry and backoff
//! - Spreadsheet proxy client implementing the core ports
//! - Configuration loading (environment, then file)
//! - Tracing subscriber setup
//!
//! ## Architecture
//! - Implements traits defined in `mountview-core`
//! - Depends on `mountview-domain` and `mountview-core`
//! - Contains all "impure" code (I/O, network)

pub mod config;
pub mod errors;
pub mod http;
pub mod observability;
pub mod sheets;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use observability::{init_tracing, LogFormat};
pub use sheets::{SheetsClient, SheetsError};
