//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `NOTION_TOKEN`: document workspace integration token
//! - `GOOGLE_CALENDAR_CLIENT_ID`: OAuth client id
//! - `GOOGLE_CALENDAR_CLIENT_SECRET`: OAuth client secret
//! - `GOOGLE_CALENDAR_REFRESH_TOKEN`: refresh token provisioned out of band
//! - `DESKHUB_SERVER_HOST`: bind address (optional)
//! - `DESKHUB_SERVER_PORT`: bind port (optional)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./deskhub.json` or `./deskhub.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)

use std::path::{Path, PathBuf};

use deskhub_domain::{Config, DeskHubError, GoogleConfig, NotionConfig, Result, ServerConfig};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `DeskHubError::Config` if configuration cannot be loaded from
/// either source, the file format is invalid, or required fields are missing.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// The credential variables must all be present; server settings fall back
/// to defaults.
///
/// # Errors
/// Returns `DeskHubError::Config` if required variables are missing or have
/// invalid values.
pub fn load_from_env() -> Result<Config> {
    let notion_token = env_var("NOTION_TOKEN")?;
    let client_id = env_var("GOOGLE_CALENDAR_CLIENT_ID")?;
    let client_secret = env_var("GOOGLE_CALENDAR_CLIENT_SECRET")?;
    let refresh_token = env_var("GOOGLE_CALENDAR_REFRESH_TOKEN")?;

    let defaults = ServerConfig::default();
    let host = std::env::var("DESKHUB_SERVER_HOST").unwrap_or(defaults.host);
    let port = match std::env::var("DESKHUB_SERVER_PORT") {
        Ok(raw) => raw
            .parse::<u16>()
            .map_err(|e| DeskHubError::Config(format!("Invalid server port: {e}")))?,
        Err(_) => defaults.port,
    };

    Ok(Config {
        server: ServerConfig { host, port },
        google: GoogleConfig { client_id, client_secret, refresh_token },
        notion: NotionConfig { token: notion_token },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the locations listed in the module docs.
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `DeskHubError::Config` if no config file is found or the file
/// cannot be parsed.
pub fn load_from_file(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(explicit) => explicit.to_path_buf(),
        None => probe_config_paths().ok_or_else(|| {
            DeskHubError::Config("No configuration file found in probed locations".into())
        })?,
    };

    let contents = std::fs::read_to_string(&path).map_err(|e| {
        DeskHubError::Config(format!("Failed to read {}: {e}", path.display()))
    })?;

    let config = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str::<Config>(&contents)
            .map_err(|e| DeskHubError::Config(format!("Invalid JSON config: {e}")))?,
        Some("toml") => toml::from_str::<Config>(&contents)
            .map_err(|e| DeskHubError::Config(format!("Invalid TOML config: {e}")))?,
        _ => {
            return Err(DeskHubError::Config(format!(
                "Unsupported config format: {}",
                path.display()
            )))
        }
    };

    validate(&config)?;
    tracing::info!(path = %path.display(), "Configuration loaded from file");
    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    if config.notion.token.is_empty() {
        return Err(DeskHubError::Config("notion.token must not be empty".into()));
    }
    for (name, value) in [
        ("google.client_id", &config.google.client_id),
        ("google.client_secret", &config.google.client_secret),
        ("google.refresh_token", &config.google.refresh_token),
    ] {
        if value.is_empty() {
            return Err(DeskHubError::Config(format!("{name} must not be empty")));
        }
    }
    Ok(())
}

fn probe_config_paths() -> Option<PathBuf> {
    let candidates = [
        "config.json",
        "config.toml",
        "deskhub.json",
        "deskhub.toml",
        "../config.json",
        "../config.toml",
    ];

    candidates.iter().map(PathBuf::from).find(|candidate| candidate.is_file())
}

fn env_var(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| DeskHubError::Config(format!("Missing environment variable: {name}")))
        .and_then(|value| {
            if value.is_empty() {
                Err(DeskHubError::Config(format!("Environment variable {name} is empty")))
            } else {
                Ok(value)
            }
        })
}
