//! Configuration module for the order bridge backend.
//!
//! All configuration is loaded from environment variables. Required platform
//! credentials abort boot with a fatal error when missing; everything else
//! has sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::errors::AppError;

/// Credentials for the outbound notification profile (external provider).
///
/// The provider itself is an external collaborator and is never called from
/// this process; the credential set is validated as a unit so a partially
/// configured profile is caught at startup instead of at send time.
#[derive(Debug, Clone)]
pub struct NotificationProfile {
    pub user_id: String,
    // Held for the send path, which lives in the external collaborator
    #[allow(dead_code)]
    pub api_key: String,
    pub sender: String,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Cafe24 mall id (shop subdomain)
    pub mall_id: String,
    /// OAuth client id for the Cafe24 app
    pub client_id: String,
    /// OAuth client secret for the Cafe24 app
    pub client_secret: String,
    /// Admin API version sent with every catalog request
    pub api_version: String,
    /// Base URL of the platform API (overridable for tests)
    pub api_base: String,
    /// Initial access token, used to seed an empty token store
    pub initial_access_token: Option<String>,
    /// Initial refresh token, used to seed an empty token store
    pub initial_refresh_token: Option<String>,
    /// Notification profile, if fully configured
    pub notification: Option<NotificationProfile>,
}

fn required(name: &str) -> Result<String, AppError> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::Config(format!("Missing required environment variable {}", name)))
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let db_path = env::var("BRIDGE_DB_PATH")
            .unwrap_or_else(|_| "./data/orders.sqlite".to_string())
            .into();

        let bind_addr = env::var("BRIDGE_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .map_err(|_| AppError::Config("Invalid BRIDGE_BIND_ADDR format".to_string()))?;

        let log_level = env::var("BRIDGE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let mall_id = required("CAFE24_MALL_ID")?;
        let client_id = required("CAFE24_CLIENT_ID")?;
        let client_secret = required("CAFE24_CLIENT_SECRET")?;

        let api_version =
            env::var("CAFE24_API_VERSION").unwrap_or_else(|_| "2025-06-01".to_string());

        let api_base = env::var("CAFE24_API_BASE")
            .unwrap_or_else(|_| format!("https://{}.cafe24api.com", mall_id));

        let initial_access_token = env::var("CAFE24_ACCESS_TOKEN").ok().filter(|v| !v.is_empty());
        let initial_refresh_token =
            env::var("CAFE24_REFRESH_TOKEN").ok().filter(|v| !v.is_empty());

        let notification = Self::notification_from_env();

        Ok(Self {
            db_path,
            bind_addr,
            log_level,
            mall_id,
            client_id,
            client_secret,
            api_version,
            api_base,
            initial_access_token,
            initial_refresh_token,
            notification,
        })
    }

    fn notification_from_env() -> Option<NotificationProfile> {
        let user_id = env::var("ALIGO_USER_ID").ok().filter(|v| !v.is_empty());
        let api_key = env::var("ALIGO_API_KEY").ok().filter(|v| !v.is_empty());
        let sender = env::var("ALIGO_SENDER").ok().filter(|v| !v.is_empty());

        match (user_id, api_key, sender) {
            (Some(user_id), Some(api_key), Some(sender)) => Some(NotificationProfile {
                user_id,
                api_key,
                sender,
            }),
            (None, None, None) => None,
            _ => {
                tracing::warn!(
                    "Notification profile partially configured (ALIGO_USER_ID/ALIGO_API_KEY/ALIGO_SENDER); ignoring"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_platform_vars() {
        env::set_var("CAFE24_MALL_ID", "teststore");
        env::set_var("CAFE24_CLIENT_ID", "client-id");
        env::set_var("CAFE24_CLIENT_SECRET", "client-secret");
    }

    // Single test because the process environment is shared between test
    // threads; splitting these up makes them race on the CAFE24_* variables.
    #[test]
    fn test_config_from_env() {
        set_platform_vars();
        env::remove_var("BRIDGE_DB_PATH");
        env::remove_var("BRIDGE_BIND_ADDR");
        env::remove_var("BRIDGE_LOG_LEVEL");
        env::remove_var("CAFE24_API_VERSION");
        env::remove_var("CAFE24_API_BASE");

        let config = Config::from_env().unwrap();

        assert_eq!(config.db_path, PathBuf::from("./data/orders.sqlite"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.api_base, "https://teststore.cafe24api.com");

        env::remove_var("CAFE24_CLIENT_SECRET");
        let result = Config::from_env();
        assert!(matches!(result, Err(AppError::Config(_))));
        env::set_var("CAFE24_CLIENT_SECRET", "client-secret");
    }
}
