//! URL templates for the translation API, with `{name}` placeholders.

use sgtn_translation::domain::types::API_ROOT;

pub const BASE_URL: &str = API_ROOT;

pub const GET_BUNDLE_URL: &str = "/i18n/api/v2/translation/products/{productName}/versions/{version}/locales/{locale}/components/{component}";
pub const GET_BUNDLES_URL: &str = "/i18n/api/v2/translation/products/{productName}/versions/{version}";
pub const PUT_BUNDLES_URL: &str = GET_BUNDLES_URL;
pub const GET_SUPPORTED_COMPONENTS_URL: &str =
    "/i18n/api/v2/translation/products/{productName}/versions/{version}/componentlist";
pub const GET_SUPPORTED_LOCALES_URL: &str =
    "/i18n/api/v2/translation/products/{productName}/versions/{version}/localelist";
pub const GET_KEY_URL: &str = "/i18n/api/v2/translation/products/{productName}/versions/{version}/locales/{locale}/components/{component}/keys/{key}";
pub const GET_REGIONS_OF_LANGUAGES_URL: &str = "/i18n/api/v2/locale/regionList";

pub const GET_COMBINED_URL: &str = "/i18n/api/v2/combination/translationsAndPattern";
pub const GET_COMBINED_BY_POST_URL: &str = GET_COMBINED_URL;
pub const GET_SUPPORTED_LANGUAGE_LIST_URL: &str = "/i18n/api/v2/locale/supportedLanguageList";

pub const GET_PATTERN_BY_LANG_REG_URL: &str = "/i18n/api/v2/formatting/patterns";
pub const GET_PATTERN_BY_LOCALE_URL: &str = "/i18n/api/v2/formatting/patterns/locales/{locale}";

/// Substitute `{name}` placeholders in `template` in a single pass. Values
/// are inserted verbatim and never rescanned.
///
/// # Panics
///
/// Panics if a placeholder in `template` has no value in `params`.
pub fn fill(template: &str, params: &[(&str, &str)]) -> String {
    let mut url = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let Some(len) = rest[open..].find('}') else {
            break;
        };
        let name = &rest[open + 1..open + len];
        let value = params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .unwrap_or_else(|| panic!("unfilled placeholder {{{name}}} in {template}"));
        url.push_str(&rest[..open]);
        url.push_str(value);
        rest = &rest[open + len + 1..];
    }
    url.push_str(rest);
    url
}
