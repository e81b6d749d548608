//! Error responses for the API layer.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::task_list::services::TaskListServiceError;

/// JSON error body.
///
/// ```json
/// { "code": "FORBIDDEN", "message": "You are not authorized to view this task list." }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

impl ApiError {
    /// Creates a new error body.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Status code paired with an [`ApiError`] body.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a new error response.
    #[must_use]
    pub const fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl ApiErrorResponse {
    fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            ApiError::new("INVALID_REQUEST", message),
        )
    }
}

impl From<JsonRejection> for ApiErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        Self::invalid_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiErrorResponse {
    fn from(rejection: QueryRejection) -> Self {
        Self::invalid_request(rejection.body_text())
    }
}

impl From<TaskListServiceError> for ApiErrorResponse {
    fn from(err: TaskListServiceError) -> Self {
        let message = err.to_string();
        let (status, code) = match &err {
            TaskListServiceError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
            TaskListServiceError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            TaskListServiceError::Forbidden(_) => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            TaskListServiceError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            TaskListServiceError::Repository(source) => {
                tracing::error!(error = %source, "task list storage failure");
                return Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("INTERNAL_ERROR", "An unexpected error occurred."),
                );
            }
        };
        Self::new(status, ApiError::new(code, message))
    }
}
