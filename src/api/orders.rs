//! Offline order endpoints: intake, listing, editing, the soft-delete /
//! restore / hard-delete lifecycle, and the batch sync applier.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use super::{data, list, message, ApiResult, DataResponse, ListResponse, MessageResponse};
use crate::errors::AppError;
use crate::models::{
    CreateOrderRequest, ListOrdersQuery, Order, OrderView, SyncBatchRequest, UpdateOrderRequest,
};
use crate::AppState;

/// Query parameters for the delete endpoint.
#[derive(Debug, Deserialize)]
pub struct DeleteOrderQuery {
    /// "soft" (default) or "hard".
    #[serde(default, rename = "type")]
    pub delete_type: Option<String>,
    /// Administrative override allowing a hard delete from any state.
    #[serde(default)]
    pub force: bool,
}

/// Response body for the batch sync endpoint.
#[derive(Debug, Serialize)]
pub struct SyncBatchResponse {
    pub success: bool,
    pub updated: u64,
}

/// POST /api/ordersOffData - Create an order from the intake form.
pub async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> ApiResult<DataResponse<Order>> {
    if request.customer_name.trim().is_empty() {
        return Err(AppError::Validation("Customer name is required".to_string()));
    }

    let order = state.repo.create_order(&request).await?;
    data(order)
}

/// GET /api/ordersOffData - List orders for a view with optional filters.
pub async fn list_orders(
    State(state): State<AppState>,
    Query(params): Query<ListOrdersQuery>,
) -> ApiResult<ListResponse<Order>> {
    let view = match params.view.as_deref() {
        None | Some("") => OrderView::Active,
        Some(raw) => OrderView::from_str(raw)
            .ok_or_else(|| AppError::Validation(format!("Unknown view: {}", raw)))?,
    };

    let orders = state
        .repo
        .list_orders(
            view,
            params.store_name.as_deref(),
            params.start_date.as_deref(),
            params.end_date.as_deref(),
            params.keyword.as_deref(),
        )
        .await?;

    list(orders)
}

/// PUT /api/ordersOffData/:id - Partial update of an order.
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateOrderRequest>,
) -> ApiResult<DataResponse<Order>> {
    let order = state.repo.update_order(&id, &request).await?;
    data(order)
}

/// DELETE /api/ordersOffData/:id - Soft delete by default, hard delete on
/// request (trash-first policy unless forced).
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<DeleteOrderQuery>,
) -> ApiResult<MessageResponse> {
    match params.delete_type.as_deref() {
        None | Some("") | Some("soft") => {
            state.repo.soft_delete_order(&id).await?;
            message("Order moved to trash")
        }
        Some("hard") => {
            state.repo.hard_delete_order(&id, params.force).await?;
            message("Order permanently deleted")
        }
        Some(other) => Err(AppError::Validation(format!(
            "Unknown delete type: {}",
            other
        ))),
    }
}

/// PUT /api/ordersOffData/restore/:id - Restore a trashed order to Active.
pub async fn restore_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<DataResponse<Order>> {
    let order = state.repo.restore_order(&id).await?;
    data(order)
}

/// POST /api/ordersOffData/sync - Bulk-apply per-order sync outcomes.
pub async fn sync_orders(
    State(state): State<AppState>,
    Json(request): Json<SyncBatchRequest>,
) -> ApiResult<SyncBatchResponse> {
    if request.results.is_empty() {
        return Err(AppError::Validation("No sync results provided".to_string()));
    }

    let updated = state.repo.apply_sync_outcomes(&request.results).await?;
    Ok(Json(SyncBatchResponse {
        success: true,
        updated,
    }))
}
