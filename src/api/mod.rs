//! REST API module.
//!
//! Contains all route handlers and the response envelope helpers. Every
//! error is converted at this boundary into the uniform
//! `{success:false, message}` envelope by `AppError`'s `IntoResponse`.

mod catalog;
mod coupons;
mod mappings;
mod orders;
mod reference;

pub use catalog::*;
pub use coupons::*;
pub use mappings::*;
pub use orders::*;
pub use reference::*;

use axum::Json;
use serde::Serialize;

use crate::errors::AppError;

/// Handler result: a JSON body or an enveloped error.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Success envelope carrying a single payload.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

/// Success envelope carrying a counted collection.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub success: bool,
    pub count: usize,
    pub data: Vec<T>,
}

/// Success envelope carrying only a message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Create a single-payload success response.
pub fn data<T: Serialize>(data: T) -> ApiResult<DataResponse<T>> {
    Ok(Json(DataResponse {
        success: true,
        data,
    }))
}

/// Create a counted-collection success response.
pub fn list<T: Serialize>(items: Vec<T>) -> ApiResult<ListResponse<T>> {
    Ok(Json(ListResponse {
        success: true,
        count: items.len(),
        data: items,
    }))
}

/// Create a message-only success response.
pub fn message(msg: impl Into<String>) -> ApiResult<MessageResponse> {
    Ok(Json(MessageResponse {
        success: true,
        message: msg.into(),
    }))
}
