//! Fixture constants and loaders for the bundles under `testdata/`.

use serde_json::Value;

use crate::root::ProjectRoot;

pub const NAME: &str = "VPE";
pub const VERSION: &str = "1.0.0";
pub const LOCALE: &str = "en";
pub const COMPONENT: &str = "sunglow";
pub const LANGUAGE: &str = "en";
pub const REGION: &str = "US";
pub const KEY: &str = "message";
pub const MSG: &str = "Message-en";

/// Placeholder values addressing the default fixture bundle.
pub const BUNDLE_PARAMS: [(&str, &str); 4] = [
    ("productName", NAME),
    ("version", VERSION),
    ("locale", LOCALE),
    ("component", COMPONENT),
];

/// Load and parse a JSON fixture at `root/relative_path`.
///
/// # Panics
///
/// Panics if the file is missing or is not valid JSON.
pub fn load_json(root: &ProjectRoot, relative_path: &str) -> Value {
    let full_path = root.join(relative_path);
    let contents = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|e| panic!("fixture not found at {}: {}", full_path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("invalid JSON in fixture {}: {}", relative_path, e))
}
