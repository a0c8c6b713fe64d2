//! The uniform response envelope every Singleton endpoint returns.
//!
//! ```json
//! { "data": { ... }, "error": null }
//! { "data": null, "error": { "code": 404, "kind": "BUNDLE_NOT_FOUND", "message": "bundle not found" } }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// Structured application-level error carried inside the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessError {
    /// HTTP-style status code mirrored from the response status line.
    pub code: u16,
    /// Machine-readable error kind, e.g. `BUNDLE_NOT_FOUND`.
    pub kind: String,
    pub message: String,
}

impl BusinessError {
    pub fn new(status: StatusCode, kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            kind: kind.into(),
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// Wire shape `{ data, error }`. Both fields are decoded independently; the
/// service sets at most one of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T = serde_json::Value> {
    pub data: Option<T>,
    pub error: Option<BusinessError>,
}

impl<T> ResponseEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: BusinessError) -> Self {
        Self {
            data: None,
            error: Some(error),
        }
    }

    /// Split into `(error, data)`.
    pub fn into_parts(self) -> (Option<BusinessError>, Option<T>) {
        (self.error, self.data)
    }
}

impl<T: Serialize> IntoResponse for ResponseEnvelope<T> {
    fn into_response(self) -> Response {
        let status = self
            .error
            .as_ref()
            .map(BusinessError::status)
            .unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}

/// Wrap a successful payload in the envelope.
pub fn ok<T: Serialize>(data: T) -> ResponseEnvelope<T> {
    ResponseEnvelope::ok(data)
}

/// Build an error response with the envelope body.
pub fn error_response(status: StatusCode, kind: &str, message: String) -> Response {
    ResponseEnvelope::<()>::err(BusinessError::new(status, kind, message)).into_response()
}
