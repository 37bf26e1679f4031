//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If the store credentials are not in the environment, falls back to a
//!    config file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//! 5. With no file either, uses defaults plus whatever the environment sets;
//!    the store is then left unconfigured
//!
//! ## Environment Variables
//! - `A11YLENS_BIND_ADDR`: HTTP listen address
//! - `A11YLENS_STORE_URL`: Store base URL (required for env-only loading)
//! - `A11YLENS_STORE_ANON_KEY`: Store anon key (required for env-only loading)
//! - `A11YLENS_STORE_SCHEMA`: Store schema
//! - `A11YLENS_RETRY_MAX_ATTEMPTS`: Total attempts for store calls
//! - `A11YLENS_RETRY_INITIAL_DELAY_MS`: Delay before the second attempt
//! - `A11YLENS_FETCH_TIMEOUT_SECS`: Page fetch timeout in seconds
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./a11ylens.toml` or `./a11ylens.json` (current working directory)
//! 2. `../a11ylens.toml` or `../a11ylens.json` (parent directory)
//! 3. `../../a11ylens.toml` or `../../a11ylens.json` (grandparent directory)
//! 4. Next to the executable

use std::path::{Path, PathBuf};
use std::str::FromStr;

use a11ylens_domain::{A11yError, Config, Result};

pub const ENV_BIND_ADDR: &str = "A11YLENS_BIND_ADDR";
pub const ENV_STORE_URL: &str = "A11YLENS_STORE_URL";
pub const ENV_STORE_ANON_KEY: &str = "A11YLENS_STORE_ANON_KEY";
pub const ENV_STORE_SCHEMA: &str = "A11YLENS_STORE_SCHEMA";
pub const ENV_RETRY_MAX_ATTEMPTS: &str = "A11YLENS_RETRY_MAX_ATTEMPTS";
pub const ENV_RETRY_INITIAL_DELAY_MS: &str = "A11YLENS_RETRY_INITIAL_DELAY_MS";
pub const ENV_FETCH_TIMEOUT_SECS: &str = "A11YLENS_FETCH_TIMEOUT_SECS";

const FILE_STEM: &str = "a11ylens";

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `A11yError::Config` if a config file exists but cannot be parsed,
/// or an environment variable holds an invalid value.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            return Ok(config);
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to load from environment, trying file");
        }
    }

    if probe_config_paths().is_some() {
        return load_from_file(None);
    }

    tracing::warn!("No configuration file found; using defaults and environment overrides");
    overlay_env(Config::default())
}

/// Load configuration from environment variables
///
/// The store URL and anon key must be present; every other value falls back
/// to its default.
///
/// # Errors
/// Returns `A11yError::Config` if the store credentials are missing or a
/// variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    env_var(ENV_STORE_URL)?;
    env_var(ENV_STORE_ANON_KEY)?;
    overlay_env(Config::default())
}

/// Apply every set environment variable on top of `config`
///
/// # Errors
/// Returns `A11yError::Config` when a numeric variable does not parse.
pub fn overlay_env(mut config: Config) -> Result<Config> {
    if let Some(addr) = env_opt(ENV_BIND_ADDR) {
        config.server.bind_addr = addr;
    }
    if let Some(url) = env_opt(ENV_STORE_URL) {
        config.store.url = Some(url);
    }
    if let Some(key) = env_opt(ENV_STORE_ANON_KEY) {
        config.store.anon_key = Some(key);
    }
    if let Some(schema) = env_opt(ENV_STORE_SCHEMA) {
        config.store.schema = schema;
    }
    if let Some(attempts) = env_parse::<u32>(ENV_RETRY_MAX_ATTEMPTS, "retry max attempts")? {
        config.retry.max_attempts = attempts;
    }
    if let Some(delay) = env_parse::<u64>(ENV_RETRY_INITIAL_DELAY_MS, "retry initial delay")? {
        config.retry.initial_delay_ms = delay;
    }
    if let Some(secs) = env_parse::<u64>(ENV_FETCH_TIMEOUT_SECS, "fetch timeout")? {
        config.fetcher.request_timeout_secs = secs;
    }
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `A11yError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(A11yError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            A11yError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| A11yError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| A11yError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| A11yError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(A11yError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
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
            roots.push(exe_dir.to_path_buf());
        }
    }

    roots
        .into_iter()
        .flat_map(|root| {
            ["toml", "json"].map(|ext| root.join(format!("{FILE_STEM}.{ext}")))
        })
        .find(|path| path.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    env_opt(key).ok_or_else(|| {
        A11yError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Non-empty environment variable, if set
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn env_parse<T>(key: &str, what: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_opt(key)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| A11yError::Config(format!("Invalid {what} in {key}: {e}")))
        })
        .transpose()
}
