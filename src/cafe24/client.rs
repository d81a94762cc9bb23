//! Authenticated catalog client for the platform admin API.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;

use super::normalize::{normalize_option_list, normalize_product};
use super::token::TokenManager;
use crate::config::Config;
use crate::errors::AppError;
use crate::models::{CatalogItem, OptionList};

/// Default timeout for catalog requests.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Number of retries allowed after an authorization failure. Kept as an
/// explicit constant so the 401-refresh-retry cycle is a bounded loop and a
/// permanently invalid credential pair cannot spin forever.
const MAX_AUTH_RETRIES: usize = 1;

/// Catalog search/detail client.
pub struct CatalogClient {
    config: Arc<Config>,
    token: Arc<TokenManager>,
    http: Client,
}

impl CatalogClient {
    pub fn new(config: Arc<Config>, token: Arc<TokenManager>) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            config,
            token,
            http,
        }
    }

    /// Search products by keyword.
    pub async fn search(&self, keyword: &str) -> Result<Vec<CatalogItem>, AppError> {
        let body = self
            .get_json(
                "/api/v2/admin/products",
                &[
                    ("product_name", keyword),
                    ("limit", "100"),
                    ("embed", "options"),
                ],
            )
            .await?;

        let products = body
            .get("products")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        Ok(products.iter().filter_map(normalize_product).collect())
    }

    /// Fetch the normalized option list for a single product.
    pub async fn options(&self, product_no: i64) -> Result<OptionList, AppError> {
        let path = format!("/api/v2/admin/products/{}", product_no);
        let body = self.get_json(&path, &[("embed", "options")]).await?;

        let product = body.get("product").unwrap_or(&body);
        normalize_option_list(product).ok_or_else(|| AppError::Catalog {
            status: None,
            body: format!("Product {} missing from upstream response", product_no),
        })
    }

    /// Issue an authenticated GET, refreshing the token and retrying exactly
    /// once when the platform answers 401. A second 401 is terminal.
    async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, AppError> {
        let url = format!("{}{}", self.config.api_base, path);
        let mut access_token = self.token.access_token().await;

        for attempt in 0..=MAX_AUTH_RETRIES {
            let response = self
                .http
                .get(&url)
                .query(query)
                .bearer_auth(&access_token)
                .header("X-Cafe24-Api-Version", &self.config.api_version)
                .send()
                .await?;

            let status = response.status();

            if status == StatusCode::UNAUTHORIZED {
                if attempt < MAX_AUTH_RETRIES {
                    tracing::info!("Catalog request rejected with 401, refreshing token");
                    access_token = self.token.refresh(&access_token).await?;
                    continue;
                }
                let body = response.text().await.unwrap_or_default();
                return Err(AppError::Catalog {
                    status: Some(status.as_u16()),
                    body,
                });
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(AppError::Catalog {
                    status: Some(status.as_u16()),
                    body,
                });
            }

            return response.json::<Value>().await.map_err(AppError::from);
        }

        // Every loop arm returns or continues into a returning arm.
        Err(AppError::Internal("Auth retry loop exhausted".to_string()))
    }
}
