use axum::{
    extract::rejection::JsonRejection,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use shared::ErrorResponse;
use thiserror::Error;
use tracing::error;

use crate::domain::models::expense::ExpenseValidationError;
use crate::domain::ExpenseError;

/// Methods served on the expense resource, as sent in the `Allow` header
pub const ALLOWED_METHODS: &str = "GET, POST";

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ExpenseValidationError),
    #[error("{0}")]
    BadRequest(String),
    #[error("Method {0} Not Allowed")]
    MethodNotAllowed(Method),
    // Detail is logged, never sent
    #[error("Internal Server Error")]
    Internal(#[source] anyhow::Error),
}

impl From<ExpenseError> for ApiError {
    fn from(err: ExpenseError) -> Self {
        match err {
            ExpenseError::Validation(e) => ApiError::Validation(e),
            ExpenseError::Storage(e) => ApiError::Internal(e),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(e) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(e.to_string()))).into_response()
            }
            ApiError::BadRequest(reason) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(reason))).into_response()
            }
            ApiError::MethodNotAllowed(method) => (
                StatusCode::METHOD_NOT_ALLOWED,
                [(header::ALLOW, ALLOWED_METHODS)],
                Json(ErrorResponse::new(format!("Method {} Not Allowed", method))),
            )
                .into_response(),
            ApiError::Internal(e) => {
                error!("Unhandled error while processing request: {:?}", e);
                internal_error_response()
            }
        }
    }
}

/// The fixed 500 response shared by handler errors and caught panics
pub fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(INTERNAL_ERROR_MESSAGE)),
    )
        .into_response()
}
