//! Reference data endpoints: read and whole-collection replace.

use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;

use super::{list, ApiResult, ListResponse};
use crate::errors::AppError;
use crate::models::{ForceQuery, ReferenceEntry, ReferenceKind, ReplaceReferenceRequest};
use crate::AppState;

/// Response body for the replace endpoint.
#[derive(Debug, Serialize)]
pub struct ReplaceResponse {
    pub success: bool,
    pub count: usize,
}

async fn get_reference(
    state: &AppState,
    kind: ReferenceKind,
) -> ApiResult<ListResponse<ReferenceEntry>> {
    let entries = state.repo.get_reference(kind).await?;
    list(entries)
}

/// Replace is destructive (delete-all then insert-all), so an empty payload
/// wipes the collection. That is rejected unless the caller passes
/// `force=true`, making the wipe an explicit decision instead of an accident.
async fn replace_reference(
    state: &AppState,
    kind: ReferenceKind,
    request: ReplaceReferenceRequest,
    force: bool,
) -> ApiResult<ReplaceResponse> {
    if request.entries.is_empty() && !force {
        return Err(AppError::Validation(
            "Refusing to replace with an empty list (use force=true to wipe)".to_string(),
        ));
    }

    let count = state.repo.replace_reference(kind, &request.entries).await?;
    Ok(Json(ReplaceResponse {
        success: true,
        count,
    }))
}

/// GET /api/ecount-stores
pub async fn get_ecount_stores(
    State(state): State<AppState>,
) -> ApiResult<ListResponse<ReferenceEntry>> {
    get_reference(&state, ReferenceKind::EcountStores).await
}

/// PUT /api/ecount-stores
pub async fn replace_ecount_stores(
    State(state): State<AppState>,
    Query(params): Query<ForceQuery>,
    Json(request): Json<ReplaceReferenceRequest>,
) -> ApiResult<ReplaceResponse> {
    replace_reference(&state, ReferenceKind::EcountStores, request, params.force).await
}

/// GET /api/static-managers
pub async fn get_static_managers(
    State(state): State<AppState>,
) -> ApiResult<ListResponse<ReferenceEntry>> {
    get_reference(&state, ReferenceKind::StaticManagers).await
}

/// PUT /api/static-managers
pub async fn replace_static_managers(
    State(state): State<AppState>,
    Query(params): Query<ForceQuery>,
    Json(request): Json<ReplaceReferenceRequest>,
) -> ApiResult<ReplaceResponse> {
    replace_reference(&state, ReferenceKind::StaticManagers, request, params.force).await
}

/// GET /api/ecount-warehouses
pub async fn get_ecount_warehouses(
    State(state): State<AppState>,
) -> ApiResult<ListResponse<ReferenceEntry>> {
    get_reference(&state, ReferenceKind::EcountWarehouses).await
}

/// PUT /api/ecount-warehouses
pub async fn replace_ecount_warehouses(
    State(state): State<AppState>,
    Query(params): Query<ForceQuery>,
    Json(request): Json<ReplaceReferenceRequest>,
) -> ApiResult<ReplaceResponse> {
    replace_reference(&state, ReferenceKind::EcountWarehouses, request, params.force).await
}

/// GET /api/item-codes
pub async fn get_item_codes(
    State(state): State<AppState>,
) -> ApiResult<ListResponse<ReferenceEntry>> {
    get_reference(&state, ReferenceKind::ItemCodes).await
}

/// PUT /api/item-codes
pub async fn replace_item_codes(
    State(state): State<AppState>,
    Query(params): Query<ForceQuery>,
    Json(request): Json<ReplaceReferenceRequest>,
) -> ApiResult<ReplaceResponse> {
    replace_reference(&state, ReferenceKind::ItemCodes, request, params.force).await
}
