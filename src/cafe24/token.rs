//! OAuth2 token lifecycle management.
//!
//! The access/refresh pair is process-wide mutable state. It lives behind a
//! single owner with an internal mutex so simultaneous 401s from different
//! in-flight requests trigger only one upstream exchange; late arrivals get
//! the already-refreshed token instead of burning the refresh token twice.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use reqwest::Client;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::db::Repository;
use crate::errors::AppError;
use crate::models::TokenPair;

/// Timeout for the token exchange request.
const EXCHANGE_TIMEOUT: Duration = Duration::from_secs(30);

/// Single owner of the process-wide token pair.
pub struct TokenManager {
    config: Arc<Config>,
    repo: Arc<Repository>,
    http: Client,
    pair: Mutex<TokenPair>,
}

impl TokenManager {
    pub fn new(config: Arc<Config>, repo: Arc<Repository>, initial: TokenPair) -> Self {
        let http = Client::builder()
            .timeout(EXCHANGE_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            config,
            repo,
            http,
            pair: Mutex::new(initial),
        }
    }

    /// Resolve the initial token pair: the persisted record wins, falling
    /// back to the configured seed tokens for a fresh database.
    pub async fn load_initial(config: &Config, repo: &Repository) -> Result<TokenPair, AppError> {
        if let Some(pair) = repo.get_token_pair().await? {
            return Ok(pair);
        }

        match (&config.initial_access_token, &config.initial_refresh_token) {
            (Some(access), Some(refresh)) => {
                let pair = TokenPair {
                    access_token: access.clone(),
                    refresh_token: refresh.clone(),
                    updated_at: Utc::now().to_rfc3339(),
                };
                repo.save_token_pair(&pair).await?;
                tracing::info!("Token store seeded from environment");
                Ok(pair)
            }
            _ => {
                tracing::warn!(
                    "No token pair persisted and none configured; catalog requests will fail until a refresh succeeds"
                );
                Ok(TokenPair {
                    access_token: String::new(),
                    refresh_token: String::new(),
                    updated_at: Utc::now().to_rfc3339(),
                })
            }
        }
    }

    /// Current access token.
    pub async fn access_token(&self) -> String {
        self.pair.lock().await.access_token.clone()
    }

    /// Exchange the refresh token for a new pair.
    ///
    /// `stale_access` is the token the caller just got rejected with. If the
    /// stored token already differs, another caller finished a refresh while
    /// we waited on the lock and the newer token is returned as-is.
    ///
    /// Memory is updated before the store; a store write failure is
    /// downgraded to a warning and the refresh still succeeds, at the cost
    /// of losing the pair on restart.
    pub async fn refresh(&self, stale_access: &str) -> Result<String, AppError> {
        let mut pair = self.pair.lock().await;

        if pair.access_token != stale_access && !pair.access_token.is_empty() {
            return Ok(pair.access_token.clone());
        }

        let url = format!("{}/api/v2/oauth/token", self.config.api_base);
        let response = self
            .http
            .post(&url)
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", pair.refresh_token.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::UpstreamAuth(format!("Token exchange failed: {}", e)))?;

        let status = response.status();
        let body: Value = if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| AppError::UpstreamAuth(format!("Invalid token response: {}", e)))?
        } else {
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamAuth(format!(
                "Token exchange rejected (HTTP {}): {}",
                status.as_u16(),
                text
            )));
        };

        let access_token = body
            .get("access_token")
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::UpstreamAuth("Token response missing access_token".to_string()))?
            .to_string();
        let refresh_token = body
            .get("refresh_token")
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::UpstreamAuth("Token response missing refresh_token".to_string()))?
            .to_string();

        pair.access_token = access_token.clone();
        pair.refresh_token = refresh_token;
        pair.updated_at = Utc::now().to_rfc3339();

        if let Err(e) = self.repo.save_token_pair(&pair).await {
            tracing::warn!(
                "Failed to persist refreshed token pair, keeping in-memory copy: {}",
                e
            );
        }

        tracing::info!("Access token refreshed");
        Ok(access_token)
    }
}
