//! Spreadsheet proxy error types
//!
//! Classifies proxy failures so callers can tell transient unavailability
//! from a misconfigured endpoint or a malformed response.

use mountview_domain::MountviewError;
use reqwest::StatusCode;
use thiserror::Error;

/// Categories of proxy errors for retry decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetsErrorCategory {
    /// Connection failures and timeouts - retryable
    Network,
    /// Proxy answered 5xx - retryable
    Server,
    /// Proxy answered 408 or 429 - retryable after backoff
    Throttled,
    /// Proxy answered 4xx - non-retryable
    Client,
    /// Response body was not JSON - non-retryable
    Decode,
    /// Endpoint or request could not be built - non-retryable
    Config,
}

impl SheetsErrorCategory {
    /// Category of a non-success HTTP status; `None` for 2xx/3xx.
    pub fn for_status(status: StatusCode) -> Option<Self> {
        if status.is_server_error() {
            Some(Self::Server)
        } else if status == StatusCode::REQUEST_TIMEOUT || status == StatusCode::TOO_MANY_REQUESTS {
            Some(Self::Throttled)
        } else if status.is_client_error() {
            Some(Self::Client)
        } else {
            None
        }
    }

    /// Category of a transport-level failure.
    pub fn for_transport(err: &reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode
        } else if err.is_builder() {
            Self::Config
        } else {
            Self::Network
        }
    }

    /// Whether a later attempt may succeed.
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::Network | Self::Server | Self::Throttled)
    }
}

/// Spreadsheet proxy errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SheetsError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Proxy server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Proxy rejected request ({status}): {message}")]
    Client { status: u16, message: String },

    #[error("Malformed proxy response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SheetsError {
    /// Classify a non-success response for `action`.
    pub fn from_status(status: StatusCode, action: &str, body: &str) -> Self {
        let message = if body.is_empty() {
            format!("{action} returned status {status}")
        } else {
            format!("{action} returned status {status}: {body}")
        };

        if status.is_server_error() {
            Self::Server { status: status.as_u16(), message }
        } else {
            Self::Client { status: status.as_u16(), message }
        }
    }

    /// Category used for retry and logging decisions.
    pub fn category(&self) -> SheetsErrorCategory {
        match self {
            Self::Network(_) => SheetsErrorCategory::Network,
            Self::Server { .. } => SheetsErrorCategory::Server,
            Self::Client { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .and_then(SheetsErrorCategory::for_status)
                .unwrap_or(SheetsErrorCategory::Client),
            Self::Decode(_) => SheetsErrorCategory::Decode,
            Self::Config(_) => SheetsErrorCategory::Config,
        }
    }

    /// Whether a later attempt may succeed
    pub fn should_retry(&self) -> bool {
        self.category().is_retryable()
    }
}

/// Errors surfaced by [`crate::http::HttpClient`] while talking to the proxy.
impl From<MountviewError> for SheetsError {
    fn from(err: MountviewError) -> Self {
        match err {
            MountviewError::Network(message) => Self::Network(message),
            MountviewError::Upstream(message) => Self::Decode(message),
            MountviewError::NotFound(message) => Self::Client { status: 404, message },
            MountviewError::InvalidInput(message) => Self::Client { status: 400, message },
            MountviewError::Config(message) | MountviewError::Internal(message) => {
                Self::Config(message)
            }
        }
    }
}

impl From<SheetsError> for MountviewError {
    fn from(err: SheetsError) -> Self {
        match err {
            SheetsError::Network(message) => Self::Network(message),
            SheetsError::Config(message) => Self::Config(message),
            other @ (SheetsError::Server { .. }
            | SheetsError::Client { .. }
            | SheetsError::Decode(_)) => Self::Upstream(other.to_string()),
        }
    }
}
