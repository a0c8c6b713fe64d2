use crate::domain::repository::RegionRepository;
use crate::domain::types::RegionList;
use crate::error::TranslationServiceError;

// ── GetRegions ───────────────────────────────────────────────────────────────

pub struct GetRegionsUseCase<R: RegionRepository> {
    pub repo: R,
}

impl<R: RegionRepository> GetRegionsUseCase<R> {
    /// Territory names for each requested display language, in request order.
    /// Unknown languages are skipped; if none is known the call fails.
    pub async fn execute(
        &self,
        languages: &[String],
    ) -> Result<Vec<RegionList>, TranslationServiceError> {
        if languages.is_empty() {
            return Err(TranslationServiceError::InvalidArgument(
                "supportedLanguageList must not be empty".to_owned(),
            ));
        }

        let mut lists = Vec::with_capacity(languages.len());
        for language in languages {
            match self.repo.find(language).await? {
                Some(list) => lists.push(list),
                None => tracing::debug!(%language, "no region table for language"),
            }
        }

        if lists.is_empty() {
            return Err(TranslationServiceError::RegionNotFound);
        }
        Ok(lists)
    }
}
