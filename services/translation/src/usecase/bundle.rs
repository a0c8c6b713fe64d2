use crate::domain::repository::BundleRepository;
use crate::domain::types::{Bundle, BundleUpdate, Locale, ProductVersion};
use crate::error::TranslationServiceError;

async fn ensure_product<R: BundleRepository>(
    repo: &R,
    pv: &ProductVersion,
) -> Result<(), TranslationServiceError> {
    if repo.product_exists(pv).await? {
        Ok(())
    } else {
        Err(TranslationServiceError::ProductNotFound)
    }
}

// ── GetBundle ────────────────────────────────────────────────────────────────

pub struct GetBundleUseCase<R: BundleRepository> {
    pub repo: R,
}

impl<R: BundleRepository> GetBundleUseCase<R> {
    pub async fn execute(
        &self,
        pv: &ProductVersion,
        component: &str,
        locale: &Locale,
    ) -> Result<Bundle, TranslationServiceError> {
        ensure_product(&self.repo, pv).await?;
        self.repo
            .find(pv, component, locale)
            .await?
            .ok_or(TranslationServiceError::BundleNotFound)
    }
}

// ── GetBundles ───────────────────────────────────────────────────────────────

pub struct GetBundlesInput {
    /// Empty means every locale of the product.
    pub locales: Vec<Locale>,
    /// Empty means every component of the product.
    pub components: Vec<String>,
}

pub struct GetBundlesUseCase<R: BundleRepository> {
    pub repo: R,
}

impl<R: BundleRepository> GetBundlesUseCase<R> {
    pub async fn execute(
        &self,
        pv: &ProductVersion,
        input: GetBundlesInput,
    ) -> Result<Vec<Bundle>, TranslationServiceError> {
        ensure_product(&self.repo, pv).await?;

        let locales = if input.locales.is_empty() {
            self.repo.locales(pv).await?
        } else {
            input.locales
        };
        let components = if input.components.is_empty() {
            self.repo.components(pv).await?
        } else {
            input.components
        };

        let mut bundles = Vec::new();
        for component in &components {
            for locale in &locales {
                if let Some(bundle) = self.repo.find(pv, component, locale).await? {
                    bundles.push(bundle);
                }
            }
        }

        if bundles.is_empty() {
            return Err(TranslationServiceError::BundleNotFound);
        }
        Ok(bundles)
    }
}

// ── PutBundles ───────────────────────────────────────────────────────────────

pub struct PutBundlesUseCase<R: BundleRepository> {
    pub repo: R,
}

impl<R: BundleRepository> PutBundlesUseCase<R> {
    /// Returns the number of bundles written.
    pub async fn execute(
        &self,
        pv: &ProductVersion,
        updates: Vec<BundleUpdate>,
    ) -> Result<usize, TranslationServiceError> {
        if updates.is_empty() {
            return Err(TranslationServiceError::InvalidArgument(
                "bundles must not be empty".to_owned(),
            ));
        }
        if let Some(bad) = updates.iter().find(|u| u.component.trim().is_empty()) {
            return Err(TranslationServiceError::InvalidArgument(format!(
                "component is required (locale {})",
                bad.locale
            )));
        }

        let count = updates.len();
        for update in updates {
            self.repo
                .save(
                    pv,
                    Bundle {
                        component: update.component,
                        locale: update.locale,
                        messages: update.messages,
                    },
                )
                .await?;
        }
        tracing::info!(product = %pv.product_name, version = %pv.version, count, "bundles updated");
        Ok(count)
    }
}

// ── GetKey ───────────────────────────────────────────────────────────────────

pub struct GetKeyUseCase<R: BundleRepository> {
    pub repo: R,
}

impl<R: BundleRepository> GetKeyUseCase<R> {
    pub async fn execute(
        &self,
        pv: &ProductVersion,
        component: &str,
        locale: &Locale,
        key: &str,
    ) -> Result<String, TranslationServiceError> {
        let bundle = GetBundleUseCase { repo: &self.repo }
            .execute(pv, component, locale)
            .await?;
        bundle
            .message(key)
            .map(str::to_owned)
            .ok_or(TranslationServiceError::KeyNotFound)
    }
}

// ── Component / locale lists ─────────────────────────────────────────────────

pub struct GetComponentsUseCase<R: BundleRepository> {
    pub repo: R,
}

impl<R: BundleRepository> GetComponentsUseCase<R> {
    pub async fn execute(&self, pv: &ProductVersion) -> Result<Vec<String>, TranslationServiceError> {
        ensure_product(&self.repo, pv).await?;
        self.repo.components(pv).await
    }
}

pub struct GetLocalesUseCase<R: BundleRepository> {
    pub repo: R,
}

impl<R: BundleRepository> GetLocalesUseCase<R> {
    pub async fn execute(&self, pv: &ProductVersion) -> Result<Vec<Locale>, TranslationServiceError> {
        ensure_product(&self.repo, pv).await?;
        self.repo.locales(pv).await
    }
}
