//! Error handling module for the order bridge backend.
//!
//! Provides centralized error types with mapping to HTTP status codes and the
//! uniform `{success:false, message}` response envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Required startup configuration is missing (fatal, aborts boot)
    Config(String),
    /// The OAuth refresh-token exchange was rejected upstream
    UpstreamAuth(String),
    /// Non-auth upstream catalog failure, with status and body attached
    Catalog { status: Option<u16>, body: String },
    /// Identifier is not well-formed
    InvalidId(String),
    /// Resource not found
    NotFound(String),
    /// Validation error
    Validation(String),
    /// Database operation failed
    Database(String),
    /// Internal server error
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UpstreamAuth(_) => StatusCode::BAD_GATEWAY,
            AppError::Catalog { .. } => StatusCode::BAD_GATEWAY,
            AppError::InvalidId(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message surfaced to the caller.
    ///
    /// Upstream and database failures are deliberately reduced to a generic
    /// message; the full detail stays on the variant for logging only.
    pub fn message(&self) -> String {
        match self {
            AppError::Config(msg) => msg.clone(),
            AppError::UpstreamAuth(_) => "Upstream platform request failed".to_string(),
            AppError::Catalog { .. } => "Upstream platform request failed".to_string(),
            AppError::InvalidId(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::Validation(msg) => msg.clone(),
            AppError::Database(_) => "Database operation failed".to_string(),
            AppError::Internal(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "config error: {}", msg),
            AppError::UpstreamAuth(msg) => write!(f, "upstream auth error: {}", msg),
            AppError::Catalog { status, body } => {
                write!(f, "catalog error (status {:?}): {}", status, body)
            }
            AppError::InvalidId(msg) => write!(f, "invalid id: {}", msg),
            AppError::NotFound(msg) => write!(f, "not found: {}", msg),
            AppError::Validation(msg) => write!(f, "validation error: {}", msg),
            AppError::Database(msg) => write!(f, "database error: {}", msg),
            AppError::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {:?}", err);
        AppError::Database(format!("Database error: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("Upstream request error: {:?}", err);
        AppError::Catalog {
            status: err.status().map(|s| s.as_u16()),
            body: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        AppError::Internal(format!("JSON error: {}", err))
    }
}

/// Error response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }
        let body = ErrorResponse {
            success: false,
            message: self.message(),
        };
        (status, Json(body)).into_response()
    }
}
