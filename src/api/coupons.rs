//! Coupon mapping endpoints.

use axum::extract::{Path, Query, State};
use axum::Json;

use super::{data, list, message, ApiResult, DataResponse, ListResponse, MessageResponse};
use crate::errors::AppError;
use crate::models::{
    CouponMapping, CreateCouponMappingRequest, ListCouponQuery, UpdateCouponMappingRequest,
};
use crate::AppState;

/// GET /api/coupon-mappings - List mappings, filtered to currently valid
/// entries unless `all=true`.
pub async fn list_coupon_mappings(
    State(state): State<AppState>,
    Query(params): Query<ListCouponQuery>,
) -> ApiResult<ListResponse<CouponMapping>> {
    let mappings = state.repo.list_coupon_mappings(params.all).await?;
    list(mappings)
}

/// POST /api/coupon-mappings - Create a coupon mapping.
pub async fn create_coupon_mapping(
    State(state): State<AppState>,
    Json(request): Json<CreateCouponMappingRequest>,
) -> ApiResult<DataResponse<CouponMapping>> {
    if request.coupon_no.trim().is_empty() {
        return Err(AppError::Validation("Coupon number is required".to_string()));
    }

    let mapping = state.repo.create_coupon_mapping(&request).await?;
    data(mapping)
}

/// PUT /api/coupon-mappings/:id - Update a coupon mapping.
pub async fn update_coupon_mapping(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateCouponMappingRequest>,
) -> ApiResult<DataResponse<CouponMapping>> {
    let mapping = state.repo.update_coupon_mapping(&id, &request).await?;
    data(mapping)
}

/// DELETE /api/coupon-mappings/:id - Delete a coupon mapping.
pub async fn delete_coupon_mapping(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<MessageResponse> {
    state.repo.delete_coupon_mapping(&id).await?;
    message("Coupon mapping deleted")
}
