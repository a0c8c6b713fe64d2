use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use sgtn_core::response::error_response;
use sgtn_domain::locale::InvalidLocale;

/// Translation service business errors.
#[derive(Debug, thiserror::Error)]
pub enum TranslationServiceError {
    #[error("product not found")]
    ProductNotFound,
    #[error("bundle not found")]
    BundleNotFound,
    #[error("key not found")]
    KeyNotFound,
    #[error("region not found")]
    RegionNotFound,
    #[error(transparent)]
    InvalidLocale(#[from] InvalidLocale),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl TranslationServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ProductNotFound => "PRODUCT_NOT_FOUND",
            Self::BundleNotFound => "BUNDLE_NOT_FOUND",
            Self::KeyNotFound => "KEY_NOT_FOUND",
            Self::RegionNotFound => "REGION_NOT_FOUND",
            Self::InvalidLocale(_) => "INVALID_LOCALE",
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::ProductNotFound
            | Self::BundleNotFound
            | Self::KeyNotFound
            | Self::RegionNotFound => StatusCode::NOT_FOUND,
            Self::InvalidLocale(_) | Self::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for TranslationServiceError {
    fn into_response(self) -> Response {
        // Internal errors need the anyhow chain logged so the root cause is traceable.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        error_response(self.status(), self.kind(), self.to_string())
    }
}
