//! Translation bundle types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Translated key/message pairs, ordered by key.
pub type Messages = BTreeMap<String, String>;

/// Product name and version pair that owns a set of bundles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVersion {
    pub product_name: String,
    pub version: String,
}

impl ProductVersion {
    pub fn new(product_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            version: version.into(),
        }
    }
}

/// The set of translated messages for one product/version/locale/component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    pub component: String,
    pub locale: Locale,
    pub messages: Messages,
}

impl Bundle {
    pub fn message(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Overlay `other` on top of `self`; keys in `other` win.
    pub fn merge(&mut self, other: Messages) {
        self.messages.extend(other);
    }
}
