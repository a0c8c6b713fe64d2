#![allow(async_fn_in_trait)]

use crate::domain::types::{Bundle, Locale, ProductVersion, RegionList};
use crate::error::TranslationServiceError;

/// Storage for translation bundles.
pub trait BundleRepository: Send + Sync {
    /// Whether any bundle exists for the product version.
    async fn product_exists(&self, pv: &ProductVersion) -> Result<bool, TranslationServiceError>;

    /// Component names, sorted.
    async fn components(&self, pv: &ProductVersion)
    -> Result<Vec<String>, TranslationServiceError>;

    /// Locales with at least one bundle, sorted.
    async fn locales(&self, pv: &ProductVersion) -> Result<Vec<Locale>, TranslationServiceError>;

    /// Look up one bundle. Locale matching is case-insensitive.
    async fn find(
        &self,
        pv: &ProductVersion,
        component: &str,
        locale: &Locale,
    ) -> Result<Option<Bundle>, TranslationServiceError>;

    /// Merge `bundle.messages` into the stored bundle, creating it if needed.
    async fn save(&self, pv: &ProductVersion, bundle: Bundle)
    -> Result<(), TranslationServiceError>;
}

/// Lets use cases borrow a repository instead of owning it.
impl<R: BundleRepository> BundleRepository for &R {
    async fn product_exists(&self, pv: &ProductVersion) -> Result<bool, TranslationServiceError> {
        (**self).product_exists(pv).await
    }

    async fn components(
        &self,
        pv: &ProductVersion,
    ) -> Result<Vec<String>, TranslationServiceError> {
        (**self).components(pv).await
    }

    async fn locales(&self, pv: &ProductVersion) -> Result<Vec<Locale>, TranslationServiceError> {
        (**self).locales(pv).await
    }

    async fn find(
        &self,
        pv: &ProductVersion,
        component: &str,
        locale: &Locale,
    ) -> Result<Option<Bundle>, TranslationServiceError> {
        (**self).find(pv, component, locale).await
    }

    async fn save(
        &self,
        pv: &ProductVersion,
        bundle: Bundle,
    ) -> Result<(), TranslationServiceError> {
        (**self).save(pv, bundle).await
    }
}

/// Read-only source of localized territory names.
pub trait RegionRepository: Send + Sync {
    /// Territory names displayed in `language`, or `None` if unknown.
    async fn find(&self, language: &str) -> Result<Option<RegionList>, TranslationServiceError>;
}
