//! OAuth token refresh for the scheduling service.
//!
//! Caches the current access token and refreshes it ahead of expiry, so
//! concurrent calendar requests share one token rather than each paying a
//! refresh round-trip.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use deskhub_domain::{DeskHubError, GoogleConfig, Result};
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::debug;

use crate::http::HttpClient;

/// Production token endpoint.
pub const GOOGLE_TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";

/// Tokens are refreshed this long before their reported expiry.
const REFRESH_THRESHOLD_SECS: u64 = 300;

/// Provides bearer tokens for scheduling-service API calls.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Retrieve a currently-valid access token.
    async fn access_token(&self) -> Result<String>;
}

/// Refresh-token based [`AccessTokenProvider`].
#[derive(Debug)]
pub struct OAuthTokenManager {
    http_client: HttpClient,
    token_endpoint: String,
    client_id: String,
    client_secret: String,
    refresh_token: String,
    cached: RwLock<Option<CachedToken>>,
}

#[derive(Clone, Debug)]
struct CachedToken {
    access_token: String,
    refresh_after: Instant,
}

impl CachedToken {
    fn is_fresh(&self) -> bool {
        Instant::now() < self.refresh_after
    }
}

impl OAuthTokenManager {
    /// Create a manager against the production token endpoint.
    ///
    /// # Errors
    /// Fails when required credentials are missing from the configuration or
    /// the HTTP client cannot be initialized.
    pub fn new(config: &GoogleConfig) -> Result<Self> {
        Self::with_token_endpoint(GOOGLE_TOKEN_ENDPOINT, config)
    }

    /// Create a manager against an explicit token endpoint (tests).
    ///
    /// # Errors
    /// Fails when required credentials are missing from the configuration or
    /// the HTTP client cannot be initialized.
    pub fn with_token_endpoint(endpoint: impl Into<String>, config: &GoogleConfig) -> Result<Self> {
        for (name, value) in [
            ("client_id", &config.client_id),
            ("client_secret", &config.client_secret),
            ("refresh_token", &config.refresh_token),
        ] {
            if value.is_empty() {
                return Err(DeskHubError::Auth(format!(
                    "scheduling service credential '{name}' is not configured"
                )));
            }
        }

        Ok(Self {
            http_client: HttpClient::builder().max_attempts(3).build()?,
            token_endpoint: endpoint.into(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            refresh_token: config.refresh_token.clone(),
            cached: RwLock::new(None),
        })
    }

    async fn refresh(&self) -> Result<CachedToken> {
        let builder = self.http_client.request(reqwest::Method::POST, &self.token_endpoint).form(&[
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("refresh_token", self.refresh_token.as_str()),
            ("grant_type", "refresh_token"),
        ]);

        let response = self
            .http_client
            .send(builder)
            .await
            .map_err(|err| DeskHubError::Auth(format!("token refresh request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(DeskHubError::Auth(format!("token refresh failed ({status}): {body}")));
        }

        let token: TokenRefreshResponse = response.json().await.map_err(|err| {
            DeskHubError::Auth(format!("failed to parse token response: {err}"))
        })?;

        let lifetime = Duration::from_secs(token.expires_in.max(0) as u64);
        let refresh_after = Instant::now()
            + lifetime.saturating_sub(Duration::from_secs(REFRESH_THRESHOLD_SECS));

        debug!(expires_in = token.expires_in, "refreshed scheduling service access token");
        Ok(CachedToken { access_token: token.access_token, refresh_after })
    }
}

#[async_trait]
impl AccessTokenProvider for OAuthTokenManager {
    async fn access_token(&self) -> Result<String> {
        if let Some(token) = self.cached.read().await.as_ref() {
            if token.is_fresh() {
                return Ok(token.access_token.clone());
            }
        }

        let mut slot = self.cached.write().await;
        // Another request may have refreshed while we waited for the lock.
        if let Some(token) = slot.as_ref() {
            if token.is_fresh() {
                return Ok(token.access_token.clone());
            }
        }

        let token = self.refresh().await?;
        let access_token = token.access_token.clone();
        *slot = Some(token);
        Ok(access_token)
    }
}

#[derive(Debug, Deserialize)]
struct TokenRefreshResponse {
    access_token: String,
    #[serde(default)]
    expires_in: i64,
}
