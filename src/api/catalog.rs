//! Catalog search/detail endpoints backed by the platform admin API.

use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};

use super::{list, ApiResult, ListResponse};
use crate::models::{CatalogItem, OptionValue};
use crate::AppState;

/// Query parameters for the product search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub keyword: String,
}

/// Response body for the option detail endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOptionsResponse {
    pub success: bool,
    pub product_no: i64,
    pub product_name: String,
    pub options: Vec<OptionValue>,
}

/// GET /api/cafe24/products - Search the catalog by keyword.
pub async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> ApiResult<ListResponse<CatalogItem>> {
    let items = state.catalog.search(&params.keyword).await?;
    list(items)
}

/// GET /api/cafe24/products/:id/options - Normalized option list for a product.
pub async fn get_product_options(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<ProductOptionsResponse> {
    let options = state.catalog.options(id).await?;
    Ok(axum::Json(ProductOptionsResponse {
        success: true,
        product_no: options.product_no,
        product_name: options.product_name,
        options: options.options,
    }))
}
