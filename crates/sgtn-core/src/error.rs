use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::response::error_response;

/// Errors every service can raise regardless of its domain.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("not found")]
    NotFound,
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // 4xx are recorded by the TraceLayer; only internal failures carry a cause worth logging.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        error_response(self.status(), self.kind(), self.to_string())
    }
}

/// Fallback handler for unmatched routes, rendered as an envelope error.
pub async fn not_found() -> AppError {
    AppError::NotFound
}

/// Fallback for a matched path without a handler for the request method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
