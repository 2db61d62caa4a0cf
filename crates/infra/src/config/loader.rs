//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If the required endpoint variable is missing, falls back to a file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `MOUNTVIEW_SHEETS_ENDPOINT`: Spreadsheet proxy URL (required)
//! - `MOUNTVIEW_SPREADSHEET_ID`: Target spreadsheet
//! - `MOUNTVIEW_COMPANY_ID`: Company whose budget record is used
//! - `MOUNTVIEW_HTTP_TIMEOUT_SECS`: Per-request timeout in seconds
//! - `MOUNTVIEW_HTTP_MAX_ATTEMPTS`: Attempts per upstream call
//! - `MOUNTVIEW_CHART_WIDTH` / `MOUNTVIEW_CHART_HEIGHT` /
//!   `MOUNTVIEW_CHART_PADDING`: Chart drawing surface in pixels
//! - `MOUNTVIEW_BIND_ADDRESS`: HTTP listen address
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./mountview.{toml,json}` then `./config.{toml,json}`
//! 2. The same names in the parent and grandparent directories
//! 3. The same names relative to the executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use mountview_domain::{ChartConfig, Config, MountviewError, Result, ServerConfig, SheetsConfig};

pub const ENV_SHEETS_ENDPOINT: &str = "MOUNTVIEW_SHEETS_ENDPOINT";
pub const ENV_SPREADSHEET_ID: &str = "MOUNTVIEW_SPREADSHEET_ID";
pub const ENV_COMPANY_ID: &str = "MOUNTVIEW_COMPANY_ID";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "MOUNTVIEW_HTTP_TIMEOUT_SECS";
pub const ENV_HTTP_MAX_ATTEMPTS: &str = "MOUNTVIEW_HTTP_MAX_ATTEMPTS";
pub const ENV_CHART_WIDTH: &str = "MOUNTVIEW_CHART_WIDTH";
pub const ENV_CHART_HEIGHT: &str = "MOUNTVIEW_CHART_HEIGHT";
pub const ENV_CHART_PADDING: &str = "MOUNTVIEW_CHART_PADDING";
pub const ENV_BIND_ADDRESS: &str = "MOUNTVIEW_BIND_ADDRESS";

const CONFIG_FILE_NAMES: &[&str] =
    &["mountview.toml", "mountview.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the endpoint
/// variable is missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `MountviewError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - An environment variable holds an unparseable number
/// - The sheets endpoint is blank
pub fn load() -> Result<Config> {
    if std::env::var_os(ENV_SHEETS_ENDPOINT).is_none() {
        tracing::debug!("{ENV_SHEETS_ENDPOINT} not set, trying config file");
        return load_from_file(None);
    }

    let config = load_from_env()?;
    tracing::info!("Configuration loaded from environment variables");
    Ok(config)
}

/// Load configuration from environment variables
///
/// Only `MOUNTVIEW_SHEETS_ENDPOINT` is required; every other variable falls
/// back to its default.
///
/// # Errors
/// Returns `MountviewError::Config` if the endpoint is missing or blank, or
/// a numeric variable cannot be parsed.
pub fn load_from_env() -> Result<Config> {
    let defaults = ChartConfig::default();

    let mut sheets = SheetsConfig::new(env_var(ENV_SHEETS_ENDPOINT)?);
    sheets.spreadsheet_id = env_opt(ENV_SPREADSHEET_ID);
    sheets.company_id = env_opt(ENV_COMPANY_ID);
    sheets.timeout_secs = env_parse(ENV_HTTP_TIMEOUT_SECS, sheets.timeout_secs)?;
    sheets.max_attempts = env_parse(ENV_HTTP_MAX_ATTEMPTS, sheets.max_attempts)?;

    let chart = ChartConfig {
        width: env_parse(ENV_CHART_WIDTH, defaults.width)?,
        height: env_parse(ENV_CHART_HEIGHT, defaults.height)?,
        padding: env_parse(ENV_CHART_PADDING, defaults.padding)?,
    };

    let server = match env_opt(ENV_BIND_ADDRESS) {
        Some(bind_address) => ServerConfig { bind_address },
        None => ServerConfig::default(),
    };

    validate(Config { sheets, chart, server })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `MountviewError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(MountviewError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            MountviewError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| MountviewError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    let config: Config = match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| MountviewError::Config(format!("Invalid TOML format: {}", e)))?,
        "json" => serde_json::from_str(contents)
            .map_err(|e| MountviewError::Config(format!("Invalid JSON format: {}", e)))?,
        _ => {
            return Err(MountviewError::Config(format!(
                "Unsupported config format: {}",
                extension
            )))
        }
    };

    validate(config)
}

/// Probe multiple paths for configuration files
///
/// Searches the working directory, its parent and grandparent, then the
/// executable's directory and its two ancestors.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.extend([exe_dir.to_path_buf(), exe_dir.join(".."), exe_dir.join("../..")]);
        }
    }

    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

fn validate(mut config: Config) -> Result<Config> {
    config.sheets.endpoint = config.sheets.endpoint.trim().to_string();
    if config.sheets.endpoint.is_empty() {
        return Err(MountviewError::Config("Missing sheets endpoint".into()));
    }
    Ok(config)
}

/// Get required environment variable
///
/// # Errors
/// Returns `MountviewError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        MountviewError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Optional variable; blank counts as unset.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Parse an optional variable, using `default` when unset.
fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env_opt(key) {
        Some(raw) => raw
            .parse()
            .map_err(|e| MountviewError::Config(format!("Invalid value for {key}: {e}"))),
        None => Ok(default),
    }
}
