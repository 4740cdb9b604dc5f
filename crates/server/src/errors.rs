use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use tracing::error;

use service::ServiceError;

/// Error body shared by both services: `{"error": <title>, "detail": <string | field list>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Value,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: impl Into<Value>) -> Self {
        Self { status, title, detail: detail.into() }
    }

    pub fn unprocessable(detail: impl Into<Value>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation Error", detail)
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.title, "detail": self.detail });
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(errs) => Self::unprocessable(serde_json::to_value(errs).unwrap_or_default()),
            ServiceError::Conflict(msg) => Self::new(StatusCode::CONFLICT, "Conflict", msg),
            ServiceError::Storage(msg) => {
                error!(detail = %msg, "request failed on storage");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", msg)
            }
        }
    }
}

// Malformed bodies and query strings are validation failures, not client syntax errors.
impl From<JsonRejection> for JsonApiError {
    fn from(r: JsonRejection) -> Self { Self::unprocessable(r.body_text()) }
}

impl From<QueryRejection> for JsonApiError {
    fn from(r: QueryRejection) -> Self { Self::unprocessable(r.body_text()) }
}
