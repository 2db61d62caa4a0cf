//! Configuration management
//!
//! Configuration is loaded once at the edge (see `mountview-infra::config`)
//! and handed to constructors explicitly. Nothing in the budget engine reads
//! environment variables or other process-global state.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BIND_ADDRESS, DEFAULT_CHART_HEIGHT, DEFAULT_CHART_PADDING, DEFAULT_CHART_WIDTH,
    DEFAULT_HTTP_MAX_ATTEMPTS, DEFAULT_HTTP_TIMEOUT_SECS,
};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub sheets: SheetsConfig,
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Spreadsheet proxy configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetsConfig {
    /// Proxy endpoint that fronts the spreadsheet API
    pub endpoint: String,
    /// Target spreadsheet; omitted from upstream calls when `None`
    #[serde(default)]
    pub spreadsheet_id: Option<String>,
    /// Company whose budget snapshot drives the history view
    #[serde(default)]
    pub company_id: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
}

/// Drawing surface for the running-balance chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

/// HTTP service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
}

impl SheetsConfig {
    /// Create a proxy configuration with default timeouts.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            spreadsheet_id: None,
            company_id: None,
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            max_attempts: DEFAULT_HTTP_MAX_ATTEMPTS,
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            padding: DEFAULT_CHART_PADDING,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_address: DEFAULT_BIND_ADDRESS.to_string() }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}

fn default_max_attempts() -> usize {
    DEFAULT_HTTP_MAX_ATTEMPTS
}
