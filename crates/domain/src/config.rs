//! Application configuration structures
//!
//! Populated by the infrastructure config loader from environment variables
//! or a config file; consumed by the gateway when wiring integrations.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Gateway HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Scheduling service (Google Calendar) credentials.
    #[serde(default)]
    pub google: GoogleConfig,
    /// Document workspace (Notion) credentials.
    #[serde(default)]
    pub notion: NotionConfig,
}

/// Gateway HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_SERVER_HOST.to_string(), port: DEFAULT_SERVER_PORT }
    }
}

/// OAuth client credentials for the scheduling service.
///
/// The gateway is headless: it never runs an interactive consent flow. The
/// refresh token is provisioned out of band and exchanged for short-lived
/// access tokens at runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoogleConfig {
    /// OAuth client id.
    pub client_id: String,
    /// OAuth client secret.
    pub client_secret: String,
    /// Long-lived refresh token granted to this gateway.
    pub refresh_token: String,
}

/// Static integration credentials for the document workspace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotionConfig {
    /// Internal integration token.
    pub token: String,
}
