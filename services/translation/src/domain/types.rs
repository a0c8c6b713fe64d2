use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use sgtn_domain::bundle::{Bundle, Messages, ProductVersion};
pub use sgtn_domain::locale::Locale;

/// REST API root shared by every translation endpoint.
pub const API_ROOT: &str = "/i18n/api/v2";

/// Bundles directory under the data root.
pub const BUNDLES_DIR: &str = "bundles";

/// Region-name table under the data root.
pub const REGIONS_FILE: &str = "locale/regions.json";

/// Territory names for one display language, keyed by region code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionList {
    pub language: String,
    pub territories: BTreeMap<String, String>,
}

/// One entry of a bulk bundle upload.
#[derive(Debug, Clone, Deserialize)]
pub struct BundleUpdate {
    pub component: String,
    pub locale: Locale,
    pub messages: Messages,
}
