//! Error types for the content service
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::domain::format_timestamp;
use crate::models::ErrorResponse;

/// Message used for every missing news or comment lookup.
pub const ENTITY_NOT_FOUND: &str = "Entity not found";

// == Service Error Enum ==
/// Unified error type for the content service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Requested identifier does not exist in the store
    #[error("{0}")]
    EntityNotFound(String),

    /// Malformed or missing request fields
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Persistence layer failure
    #[error("Store error: {0}")]
    Store(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Shorthand for the not-found error raised by every lookup by id.
    pub fn not_found() -> Self {
        ServiceError::EntityNotFound(ENTITY_NOT_FOUND.to_string())
    }

    fn kind(&self) -> &'static str {
        match self {
            ServiceError::EntityNotFound(_) => "EntityNotFound",
            ServiceError::Validation(_) => "ValidationFailed",
            ServiceError::Store(_) => "StoreError",
            ServiceError::Internal(_) => "InternalError",
        }
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::Internal(err.to_string())
    }
}

// == Extractor Rejections ==
// Bodies, query strings and path ids that fail to parse are client input errors.
impl From<JsonRejection> for ServiceError {
    fn from(rejection: JsonRejection) -> Self {
        ServiceError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ServiceError {
    fn from(rejection: QueryRejection) -> Self {
        ServiceError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ServiceError {
    fn from(rejection: PathRejection) -> Self {
        ServiceError::Validation(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        // Missing entities are a client mistake here, same as bad input.
        let status = match &self {
            ServiceError::EntityNotFound(_) => StatusCode::BAD_REQUEST,
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(
            format_timestamp(chrono::Local::now()),
            self.to_string(),
            self.kind(),
        ));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the content service.
pub type Result<T> = std::result::Result<T, ServiceError>;
