use axum::extract::State;
use axum::http::StatusCode;

use crate::state::AppState;

/// Liveness probe.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Ready once the data directory is reachable.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    match tokio::fs::try_exists(&state.data_dir).await {
        Ok(true) => StatusCode::OK,
        _ => StatusCode::SERVICE_UNAVAILABLE,
    }
}
