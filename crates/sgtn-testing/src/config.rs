//! Harness configuration loaded from environment variables.

use std::path::PathBuf;

use crate::root::DEFAULT_MARKER;

/// Process-level settings read once before the harness boots.
///
/// Loaded from env vars only: the test binary's own arguments belong to
/// libtest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Project root override (`WD`). Empty counts as unset.
    pub wd: Option<PathBuf>,

    /// Marker subtree that identifies the project root (`SGTN_MARKER`).
    /// default: `"testdata"`
    pub marker: PathBuf,

    /// Base seed for fixture generators (`SGTN_TEST_SEED`).
    /// default: derived from the clock and logged at startup
    pub seed: Option<u64>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            wd: None,
            marker: PathBuf::from(DEFAULT_MARKER),
            seed: None,
        }
    }
}

impl HarnessConfig {
    pub fn from_env() -> Self {
        Self {
            wd: std::env::var_os("WD")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            marker: std::env::var_os("SGTN_MARKER")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MARKER)),
            seed: std::env::var("SGTN_TEST_SEED")
                .ok()
                .and_then(|v| v.trim().parse().ok()),
        }
    }
}
