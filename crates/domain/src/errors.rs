//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Mountview
///
/// The budget engine itself never produces these: malformed request data is
/// normalised, not rejected. Errors come from configuration and from the
/// upstream spreadsheet proxy.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum MountviewError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl MountviewError {
    /// Stable, lowercase label for logs and API error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Network(_) => "network",
            Self::Upstream(_) => "upstream",
            Self::NotFound(_) => "not_found",
            Self::InvalidInput(_) => "invalid_input",
            Self::Internal(_) => "internal",
        }
    }

    /// Whether the caller may retry the operation later.
    ///
    /// Upstream unavailability is recoverable; configuration and input
    /// mistakes are not.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Upstream(_))
    }
}

/// Result type alias for Mountview operations
pub type Result<T> = std::result::Result<T, MountviewError>;
