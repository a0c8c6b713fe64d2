use axum::extract::{Query, State};
use serde::Deserialize;

use sgtn_core::response::{ResponseEnvelope, ok};

use crate::domain::types::RegionList;
use crate::error::TranslationServiceError;
use crate::handlers::translation::split_list;
use crate::state::AppState;
use crate::usecase::locale::GetRegionsUseCase;

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegionListQuery {
    /// Comma-separated display languages, e.g. `en,fr`.
    pub supported_language_list: Option<String>,
}

// ── GET /locale/regionList ───────────────────────────────────────────────────

pub async fn get_region_list(
    State(state): State<AppState>,
    Query(query): Query<RegionListQuery>,
) -> Result<ResponseEnvelope<Vec<RegionList>>, TranslationServiceError> {
    let languages = split_list(query.supported_language_list.as_deref());
    let lists = GetRegionsUseCase {
        repo: state.region_repo(),
    }
    .execute(&languages)
    .await?;
    Ok(ok(lists))
}
