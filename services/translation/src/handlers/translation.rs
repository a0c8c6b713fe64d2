use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use sgtn_core::response::{ResponseEnvelope, ok};

use crate::domain::types::{Bundle, BundleUpdate, Locale, Messages, ProductVersion};
use crate::error::TranslationServiceError;
use crate::state::AppState;
use crate::usecase::bundle::{
    GetBundleUseCase, GetBundlesInput, GetBundlesUseCase, GetComponentsUseCase, GetKeyUseCase,
    GetLocalesUseCase, PutBundlesUseCase,
};

// ── Path params ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPath {
    pub product_name: String,
    pub version: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlePath {
    pub product_name: String,
    pub version: String,
    pub locale: String,
    pub component: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPath {
    pub product_name: String,
    pub version: String,
    pub locale: String,
    pub component: String,
    pub key: String,
}

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleResponse {
    pub product_name: String,
    pub version: String,
    pub locale: Locale,
    pub component: String,
    pub messages: Messages,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlesResponse {
    pub product_name: String,
    pub version: String,
    pub bundles: Vec<Bundle>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentsResponse {
    pub product_name: String,
    pub version: String,
    pub components: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalesResponse {
    pub product_name: String,
    pub version: String,
    pub locales: Vec<Locale>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyResponse {
    pub product_name: String,
    pub version: String,
    pub locale: Locale,
    pub component: String,
    pub key: String,
    pub message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PutBundlesResponse {
    pub product_name: String,
    pub version: String,
    pub updated: usize,
}

// ── Query / body ─────────────────────────────────────────────────────────────

/// Comma-separated filters, e.g. `?locales=en,fr&components=sunglow`.
#[derive(Deserialize, Default)]
pub struct BundlesQuery {
    pub locales: Option<String>,
    pub components: Option<String>,
}

#[derive(Deserialize)]
pub struct PutBundlesRequest {
    pub bundles: Vec<BundleUpdate>,
}

/// Split a comma-separated query value, dropping blanks.
pub(crate) fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

// ── GET .../locales/{locale}/components/{component} ──────────────────────────

pub async fn get_bundle(
    State(state): State<AppState>,
    Path(path): Path<BundlePath>,
) -> Result<ResponseEnvelope<BundleResponse>, TranslationServiceError> {
    let locale: Locale = path.locale.parse()?;
    let pv = ProductVersion::new(path.product_name, path.version);

    let bundle = GetBundleUseCase {
        repo: state.bundle_repo(),
    }
    .execute(&pv, &path.component, &locale)
    .await?;

    Ok(ok(BundleResponse {
        product_name: pv.product_name,
        version: pv.version,
        locale,
        component: bundle.component,
        messages: bundle.messages,
    }))
}

// ── GET /translation/products/{productName}/versions/{version} ──────────────

pub async fn get_bundles(
    State(state): State<AppState>,
    Path(path): Path<ProductPath>,
    Query(query): Query<BundlesQuery>,
) -> Result<ResponseEnvelope<BundlesResponse>, TranslationServiceError> {
    let locales = split_list(query.locales.as_deref())
        .iter()
        .map(|l| l.parse())
        .collect::<Result<Vec<Locale>, _>>()?;
    let components = split_list(query.components.as_deref());
    let pv = ProductVersion::new(path.product_name, path.version);

    let bundles = GetBundlesUseCase {
        repo: state.bundle_repo(),
    }
    .execute(&pv, GetBundlesInput { locales, components })
    .await?;

    Ok(ok(BundlesResponse {
        product_name: pv.product_name,
        version: pv.version,
        bundles,
    }))
}

// ── PUT /translation/products/{productName}/versions/{version} ──────────────

pub async fn put_bundles(
    State(state): State<AppState>,
    Path(path): Path<ProductPath>,
    Json(body): Json<PutBundlesRequest>,
) -> Result<ResponseEnvelope<PutBundlesResponse>, TranslationServiceError> {
    let pv = ProductVersion::new(path.product_name, path.version);

    let updated = PutBundlesUseCase {
        repo: state.bundle_repo(),
    }
    .execute(&pv, body.bundles)
    .await?;

    Ok(ok(PutBundlesResponse {
        product_name: pv.product_name,
        version: pv.version,
        updated,
    }))
}

// ── GET .../componentlist ────────────────────────────────────────────────────

pub async fn get_components(
    State(state): State<AppState>,
    Path(path): Path<ProductPath>,
) -> Result<ResponseEnvelope<ComponentsResponse>, TranslationServiceError> {
    let pv = ProductVersion::new(path.product_name, path.version);
    let components = GetComponentsUseCase {
        repo: state.bundle_repo(),
    }
    .execute(&pv)
    .await?;

    Ok(ok(ComponentsResponse {
        product_name: pv.product_name,
        version: pv.version,
        components,
    }))
}

// ── GET .../localelist ───────────────────────────────────────────────────────

pub async fn get_locales(
    State(state): State<AppState>,
    Path(path): Path<ProductPath>,
) -> Result<ResponseEnvelope<LocalesResponse>, TranslationServiceError> {
    let pv = ProductVersion::new(path.product_name, path.version);
    let locales = GetLocalesUseCase {
        repo: state.bundle_repo(),
    }
    .execute(&pv)
    .await?;

    Ok(ok(LocalesResponse {
        product_name: pv.product_name,
        version: pv.version,
        locales,
    }))
}

// ── GET .../keys/{key} ───────────────────────────────────────────────────────

pub async fn get_key(
    State(state): State<AppState>,
    Path(path): Path<KeyPath>,
) -> Result<ResponseEnvelope<KeyResponse>, TranslationServiceError> {
    let locale: Locale = path.locale.parse()?;
    let pv = ProductVersion::new(path.product_name, path.version);

    let message = GetKeyUseCase {
        repo: state.bundle_repo(),
    }
    .execute(&pv, &path.component, &locale, &path.key)
    .await?;

    Ok(ok(KeyResponse {
        product_name: pv.product_name,
        version: pv.version,
        locale,
        component: path.component,
        key: path.key,
        message,
    }))
}
