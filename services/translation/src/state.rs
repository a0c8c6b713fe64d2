use std::path::PathBuf;

use crate::infra::fs::{BundleOverlay, FsBundleRepository, FsRegionRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    /// Root of the data tree (`bundles/`, `locale/`).
    pub data_dir: PathBuf,
    pub overlay: BundleOverlay,
}

impl AppState {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            overlay: BundleOverlay::default(),
        }
    }

    pub fn bundle_repo(&self) -> FsBundleRepository {
        FsBundleRepository {
            data_dir: self.data_dir.clone(),
            overlay: self.overlay.clone(),
        }
    }

    pub fn region_repo(&self) -> FsRegionRepository {
        FsRegionRepository {
            data_dir: self.data_dir.clone(),
        }
    }
}
