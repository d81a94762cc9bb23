//! Manager/store mapping endpoints: per-record CRUD, bulk import, reseed.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use super::{data, list, message, ApiResult, DataResponse, ListResponse, MessageResponse};
use crate::errors::AppError;
use crate::models::{
    CreateMappingRequest, ImportMappingsRequest, ManagerStoreMapping, UpdateMappingRequest,
};
use crate::seed;
use crate::AppState;

/// Response body for bulk operations.
#[derive(Debug, Serialize)]
pub struct BulkResponse {
    pub success: bool,
    pub count: usize,
}

/// GET /api/mappings - List all mappings.
pub async fn list_mappings(
    State(state): State<AppState>,
) -> ApiResult<ListResponse<ManagerStoreMapping>> {
    let mappings = state.repo.list_mappings().await?;
    list(mappings)
}

/// POST /api/mappings - Create a mapping.
pub async fn create_mapping(
    State(state): State<AppState>,
    Json(request): Json<CreateMappingRequest>,
) -> ApiResult<DataResponse<ManagerStoreMapping>> {
    if request.manager_code.trim().is_empty() || request.store_name.trim().is_empty() {
        return Err(AppError::Validation(
            "Manager code and store name are required".to_string(),
        ));
    }

    let mapping = state.repo.create_mapping(&request).await?;
    data(mapping)
}

/// PUT /api/mappings/:id - Update a mapping.
pub async fn update_mapping(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateMappingRequest>,
) -> ApiResult<DataResponse<ManagerStoreMapping>> {
    let mapping = state.repo.update_mapping(&id, &request).await?;
    data(mapping)
}

/// DELETE /api/mappings/:id - Delete a mapping.
pub async fn delete_mapping(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<MessageResponse> {
    state.repo.delete_mapping(&id).await?;
    message("Mapping deleted")
}

/// POST /api/mappings/import - Bulk import mappings.
pub async fn import_mappings(
    State(state): State<AppState>,
    Json(request): Json<ImportMappingsRequest>,
) -> ApiResult<BulkResponse> {
    if request.mappings.is_empty() {
        return Err(AppError::Validation("No mappings provided".to_string()));
    }

    let count = state.repo.import_mappings(&request.mappings).await?;
    Ok(Json(BulkResponse {
        success: true,
        count,
    }))
}

/// POST /api/mappings/reseed - Clear and reload from the bundled snapshot.
pub async fn reseed_mappings(State(state): State<AppState>) -> ApiResult<BulkResponse> {
    let count = seed::reseed_mappings(&state.repo).await?;
    Ok(Json(BulkResponse {
        success: true,
        count,
    }))
}
