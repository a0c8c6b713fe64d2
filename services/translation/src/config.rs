use std::path::PathBuf;

/// Translation service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct TranslationConfig {
    /// TCP port to listen on (default 8091). Env var: `SGTN_PORT`.
    pub port: u16,
    /// Root of the data tree holding `bundles/` and `locale/` (default `testdata`).
    /// Env var: `SGTN_DATA_DIR`.
    pub data_dir: PathBuf,
}

impl TranslationConfig {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("SGTN_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8091),
            data_dir: std::env::var_os("SGTN_DATA_DIR")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("testdata")),
        }
    }
}
