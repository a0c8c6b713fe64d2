use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use anyhow::{Context as _, anyhow};

use crate::domain::repository::{BundleRepository, RegionRepository};
use crate::domain::types::{
    BUNDLES_DIR, Bundle, Locale, ProductVersion, REGIONS_FILE, RegionList,
};
use crate::error::TranslationServiceError;

// ── Overlay ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct OverlayKey {
    pv: ProductVersion,
    component: String,
    locale: String,
}

impl OverlayKey {
    fn new(pv: &ProductVersion, component: &str, locale: &Locale) -> Self {
        Self {
            pv: pv.clone(),
            component: component.to_owned(),
            locale: locale.as_str().to_ascii_lowercase(),
        }
    }
}

/// In-memory bundles written through `PUT`. The on-disk fixture tree is never modified.
#[derive(Clone, Default)]
pub struct BundleOverlay(Arc<RwLock<HashMap<OverlayKey, Bundle>>>);

impl BundleOverlay {
    fn get(&self, key: &OverlayKey) -> anyhow::Result<Option<Bundle>> {
        let map = self.0.read().map_err(|_| anyhow!("bundle overlay lock poisoned"))?;
        Ok(map.get(key).cloned())
    }

    fn for_product(&self, pv: &ProductVersion) -> anyhow::Result<Vec<Bundle>> {
        let map = self.0.read().map_err(|_| anyhow!("bundle overlay lock poisoned"))?;
        Ok(map
            .iter()
            .filter(|(k, _)| &k.pv == pv)
            .map(|(_, b)| b.clone())
            .collect())
    }

    fn upsert(&self, pv: &ProductVersion, bundle: Bundle) -> anyhow::Result<()> {
        let key = OverlayKey::new(pv, &bundle.component, &bundle.locale);
        let mut map = self.0.write().map_err(|_| anyhow!("bundle overlay lock poisoned"))?;
        match map.get_mut(&key) {
            Some(existing) => existing.merge(bundle.messages),
            None => {
                map.insert(key, bundle);
            }
        }
        Ok(())
    }
}

// ── Bundle repository ────────────────────────────────────────────────────────

/// Reads `{data_dir}/bundles/{product}/{version}/{component}/messages_{locale}.json`.
#[derive(Clone)]
pub struct FsBundleRepository {
    pub data_dir: PathBuf,
    pub overlay: BundleOverlay,
}

impl FsBundleRepository {
    fn version_dir(&self, pv: &ProductVersion) -> Option<PathBuf> {
        if !is_plain_segment(&pv.product_name) || !is_plain_segment(&pv.version) {
            return None;
        }
        Some(
            self.data_dir
                .join(BUNDLES_DIR)
                .join(&pv.product_name)
                .join(&pv.version),
        )
    }

    async fn disk_bundle(
        &self,
        pv: &ProductVersion,
        component: &str,
        locale: &Locale,
    ) -> anyhow::Result<Option<Bundle>> {
        let Some(dir) = self.version_dir(pv) else {
            return Ok(None);
        };
        if !is_plain_segment(component) {
            return Ok(None);
        }
        let dir = dir.join(component);
        let file = list_dir(&dir)
            .await?
            .into_iter()
            .filter(|(_, is_dir)| !is_dir)
            .map(|(name, _)| name)
            .find(|name| locale_of(name).is_some_and(|l| locale.matches(l)));

        match file {
            Some(name) => read_bundle(&dir.join(name)).await.map(Some),
            None => Ok(None),
        }
    }
}

impl BundleRepository for FsBundleRepository {
    async fn product_exists(&self, pv: &ProductVersion) -> Result<bool, TranslationServiceError> {
        if let Some(dir) = self.version_dir(pv) {
            let on_disk = tokio::fs::try_exists(&dir)
                .await
                .with_context(|| format!("stat {}", dir.display()))?;
            if on_disk {
                return Ok(true);
            }
        }
        Ok(!self.overlay.for_product(pv)?.is_empty())
    }

    async fn components(
        &self,
        pv: &ProductVersion,
    ) -> Result<Vec<String>, TranslationServiceError> {
        let mut components = BTreeSet::new();
        if let Some(dir) = self.version_dir(pv) {
            components.extend(
                list_dir(&dir)
                    .await?
                    .into_iter()
                    .filter(|(_, is_dir)| *is_dir)
                    .map(|(name, _)| name),
            );
        }
        components.extend(
            self.overlay
                .for_product(pv)?
                .into_iter()
                .map(|b| b.component),
        );
        Ok(components.into_iter().collect())
    }

    async fn locales(&self, pv: &ProductVersion) -> Result<Vec<Locale>, TranslationServiceError> {
        let mut locales = BTreeSet::new();
        if let Some(dir) = self.version_dir(pv) {
            for (component, is_dir) in list_dir(&dir).await? {
                if !is_dir {
                    continue;
                }
                for (name, _) in list_dir(&dir.join(&component)).await? {
                    let Some(raw) = locale_of(&name) else {
                        continue;
                    };
                    match raw.parse::<Locale>() {
                        Ok(locale) => insert_locale(&mut locales, locale),
                        Err(e) => tracing::warn!(%component, file = %name, error = %e, "skipping bundle"),
                    }
                }
            }
        }
        // On-disk casing wins over the casing a PUT used.
        for bundle in self.overlay.for_product(pv)? {
            insert_locale(&mut locales, bundle.locale);
        }
        Ok(locales.into_iter().collect())
    }

    async fn find(
        &self,
        pv: &ProductVersion,
        component: &str,
        locale: &Locale,
    ) -> Result<Option<Bundle>, TranslationServiceError> {
        let disk = self.disk_bundle(pv, component, locale).await?;
        let overlay = self.overlay.get(&OverlayKey::new(pv, component, locale))?;
        Ok(match (disk, overlay) {
            (Some(mut bundle), Some(extra)) => {
                bundle.merge(extra.messages);
                Some(bundle)
            }
            (disk, overlay) => disk.or(overlay),
        })
    }

    async fn save(
        &self,
        pv: &ProductVersion,
        bundle: Bundle,
    ) -> Result<(), TranslationServiceError> {
        self.overlay.upsert(pv, bundle)?;
        Ok(())
    }
}

// ── Region repository ────────────────────────────────────────────────────────

/// Reads `{data_dir}/locale/regions.json`: `{ "<language>": { "<region>": "<name>" } }`.
#[derive(Clone)]
pub struct FsRegionRepository {
    pub data_dir: PathBuf,
}

impl RegionRepository for FsRegionRepository {
    async fn find(&self, language: &str) -> Result<Option<RegionList>, TranslationServiceError> {
        let path = self.data_dir.join(REGIONS_FILE);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(anyhow::Error::from(e)
                    .context(format!("read {}", path.display()))
                    .into());
            }
        };
        let table: BTreeMap<String, BTreeMap<String, String>> = serde_json::from_slice(&bytes)
            .with_context(|| format!("invalid region table {}", path.display()))?;

        Ok(table
            .into_iter()
            .find(|(lang, _)| lang.eq_ignore_ascii_case(language))
            .map(|(language, territories)| RegionList {
                language,
                territories,
            }))
    }
}

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Add `locale` unless a case-insensitive equal is already present.
fn insert_locale(locales: &mut BTreeSet<Locale>, locale: Locale) {
    if !locales.iter().any(|known| known.matches(locale.as_str())) {
        locales.insert(locale);
    }
}

/// Entries of `path` as `(name, is_dir)`. A missing directory is empty.
async fn list_dir(path: &Path) -> anyhow::Result<Vec<(String, bool)>> {
    let mut entries = match tokio::fs::read_dir(path).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e).with_context(|| format!("read dir {}", path.display())),
    };

    let mut out = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("read dir {}", path.display()))?
    {
        let is_dir = entry
            .file_type()
            .await
            .with_context(|| format!("stat {}", entry.path().display()))?
            .is_dir();
        if let Some(name) = entry.file_name().to_str() {
            out.push((name.to_owned(), is_dir));
        }
    }
    Ok(out)
}

async fn read_bundle(path: &Path) -> anyhow::Result<Bundle> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("read {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("invalid bundle {}", path.display()))
}

/// `messages_en-US.json` → `en-US`.
fn locale_of(file_name: &str) -> Option<&str> {
    file_name
        .strip_prefix("messages_")?
        .strip_suffix(".json")
        .filter(|l| !l.is_empty())
}

/// Rejects names that would escape the data directory.
fn is_plain_segment(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}
