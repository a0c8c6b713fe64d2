use axum::{
    Router,
    routing::get,
};
use tower_http::trace::TraceLayer;

use sgtn_core::error::{method_not_allowed, not_found};
use sgtn_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::domain::types::API_ROOT;
use crate::handlers::{
    health::{healthz, readyz},
    locale::get_region_list,
    translation::{get_bundle, get_bundles, get_components, get_key, get_locales, put_bundles},
};
use crate::state::AppState;

/// Routes mounted under [`API_ROOT`].
fn api_routes() -> Router<AppState> {
    const VERSION: &str = "/translation/products/{productName}/versions/{version}";

    Router::new()
        // Bundles
        .route(VERSION, get(get_bundles).put(put_bundles))
        .route(
            &format!("{VERSION}/locales/{{locale}}/components/{{component}}"),
            get(get_bundle),
        )
        .route(
            &format!("{VERSION}/locales/{{locale}}/components/{{component}}/keys/{{key}}"),
            get(get_key),
        )
        // Lists
        .route(&format!("{VERSION}/componentlist"), get(get_components))
        .route(&format!("{VERSION}/localelist"), get(get_locales))
        // Locale
        .route("/locale/regionList", get(get_region_list))
        .method_not_allowed_fallback(method_not_allowed)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .nest(API_ROOT, api_routes())
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
}
