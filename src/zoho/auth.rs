use crate::cache::TtlCell;
use crate::config::ZohoConfig;
use crate::error::{AppError, Result};
use crate::zoho::types::TokenResponse;
use chrono::Duration;
use tracing::{debug, instrument};

/// Zoho access tokens expire after an hour; cache slightly under that so a
/// token is never used right at its expiry.
const TOKEN_TTL_SECS: i64 = 3500;

/// Exchanges the long-lived refresh token for short-lived access tokens.
///
/// Tokens live only in memory; a process restart always re-derives one.
pub(super) struct ZohoAuth {
    client: reqwest::Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    refresh_token: String,
    cache: TtlCell<String>,
}

impl ZohoAuth {
    pub(super) fn new(config: &ZohoConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            token_url: config.token_endpoint(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            refresh_token: config.refresh_token.clone(),
            cache: TtlCell::new(Duration::seconds(TOKEN_TTL_SECS)),
        }
    }

    pub(super) fn http_client(&self) -> reqwest::Client {
        self.client.clone()
    }

    /// Get a fresh-enough access token, exchanging the refresh token only on
    /// a cache miss. Failure is terminal for the call; there is no retry.
    #[instrument(name = "Fetching Zoho access token", skip_all)]
    pub(super) async fn get_access_token(&self) -> Result<String> {
        if let Some(token) = self.cache.get() {
            debug!("Using cached access token");
            return Ok(token);
        }

        let token = self.refresh_access_token().await?;
        self.cache.put(token.clone());
        Ok(token)
    }

    async fn refresh_access_token(&self) -> Result<String> {
        let params = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("refresh_token", self.refresh_token.as_str()),
            ("grant_type", "refresh_token"),
        ];

        let response = self
            .client
            .post(&self.token_url)
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Auth(format!(
                "Token refresh failed: {} - {}",
                status, body
            )));
        }

        let body: TokenResponse = response.json().await?;
        match body.access_token {
            Some(token) => {
                debug!("Access token refreshed");
                Ok(token)
            }
            None => Err(AppError::Auth(format!(
                "Token response contained no access_token: {}",
                body.error.unwrap_or_else(|| "unknown error".to_string())
            ))),
        }
    }
}
