//! HTTP client with retry and exponential backoff
//!
//! Every upstream call goes through [`HttpClient`]. Outcomes are classified
//! with [`SheetsErrorCategory`]; transport failures and retryable statuses
//! (5xx, 408, 429) are retried and the last response is returned as-is so
//! callers can turn it into a [`crate::sheets::SheetsError`].

use std::time::Duration;

use mountview_domain::{MountviewError, SheetsConfig};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use tracing::{debug, warn};

use crate::errors::InfraError;
use crate::sheets::SheetsErrorCategory;

const DEFAULT_USER_AGENT: &str = concat!("mountview/", env!("CARGO_PKG_VERSION"));

/// HTTP client with built-in retry and timeout support.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    max_attempts: usize,
    base_backoff: Duration,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Client tuned by the proxy configuration's timeout and attempt count.
    pub fn from_config(config: &SheetsConfig) -> Result<Self, MountviewError> {
        Self::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .max_attempts(config.max_attempts)
            .build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the provided request builder with retry semantics.
    ///
    /// Bodies must be clonable (buffered) so the request can be replayed.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, MountviewError> {
        let attempts = self.max_attempts;
        let mut attempt = 1;

        loop {
            let request = builder
                .try_clone()
                .ok_or_else(|| {
                    MountviewError::Internal("streaming request bodies cannot be retried".into())
                })?
                .build()
                .map_err(|err| MountviewError::from(InfraError::from(err)))?;

            let method = request.method().clone();
            let url = request.url().clone();
            debug!(attempt, %method, %url, "sending HTTP request");

            let outcome = self.client.execute(request).await;
            let category = match &outcome {
                Ok(response) => SheetsErrorCategory::for_status(response.status()),
                Err(err) => Some(SheetsErrorCategory::for_transport(err)),
            };
            let retryable = category.is_some_and(SheetsErrorCategory::is_retryable);

            if retryable && attempt < attempts {
                match &outcome {
                    Ok(response) => {
                        debug!(attempt, %url, status = %response.status(), "retrying HTTP request")
                    }
                    Err(err) => debug!(attempt, %url, error = %err, "retrying HTTP request"),
                }
                self.sleep_with_backoff(attempt).await;
                attempt += 1;
                continue;
            }

            if retryable {
                warn!(
                    attempts,
                    %method,
                    %url,
                    ?category,
                    "HTTP request failed after final attempt"
                );
            }

            return outcome.map_err(|err| MountviewError::from(InfraError::from(err)));
        }
    }

    /// `base * 2^(retry - 1)`, capped at 2^8.
    fn backoff_delay(&self, retry_number: usize) -> Duration {
        let shift = retry_number.saturating_sub(1).min(8) as u32;
        self.base_backoff.saturating_mul(1u32 << shift)
    }

    async fn sleep_with_backoff(&self, retry_number: usize) {
        let delay = self.backoff_delay(retry_number);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    max_attempts: usize,
    base_backoff: Duration,
    user_agent: String,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_attempts: 3,
            base_backoff: Duration::from_millis(200),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl HttpClientBuilder {
    /// Per-attempt request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Configure the total number of attempts (initial try + retries).
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Delay before the first retry; doubles on each further retry.
    pub fn base_backoff(mut self, backoff: Duration) -> Self {
        self.base_backoff = backoff;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn build(self) -> Result<HttpClient, MountviewError> {
        let client = ReqwestClient::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .no_proxy()
            .build()
            .map_err(|err| MountviewError::from(InfraError::from(err)))?;

        Ok(HttpClient {
            client,
            max_attempts: self.max_attempts.max(1),
            base_backoff: self.base_backoff,
        })
    }
}
