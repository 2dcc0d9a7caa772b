use i18nrs::yew::I18nProviderConfig;
use std::collections::HashMap;

/// Language used when the browser has no stored preference.
pub const DEFAULT_LANGUAGE: &str = "es";

/// Information about a supported language
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub flag: &'static str,
    pub translation: &'static str,
    pub native_name: &'static str,
}

/// Get information about a supported language
pub fn get_language_info(code: &str) -> Option<LanguageInfo> {
    supported_languages().get(code).cloned()
}

/// Get a map of supported languages
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([
        (
            "es",
            LanguageInfo {
                code: "es",
                flag: "🇪🇨",
                translation: include_str!("../translations/es.json"),
                native_name: "Español",
            },
        ),
        (
            "en",
            LanguageInfo {
                code: "en",
                flag: "🇬🇧",
                translation: include_str!("../translations/en.json"),
                native_name: "English",
            },
        ),
    ])
}

/// Supported languages sorted by their native name, for menus.
pub fn languages_by_name() -> Vec<LanguageInfo> {
    let mut languages: Vec<_> = supported_languages().into_values().collect();
    languages.sort_by(|a, b| a.native_name.cmp(b.native_name));
    languages
}

/// Provider configuration loading every translation bundle.
pub fn provider_config() -> I18nProviderConfig {
    let translations: HashMap<&str, &str> = supported_languages()
        .iter()
        .map(|(&key, value)| (key, value.translation))
        .collect();

    I18nProviderConfig {
        translations,
        default_language: DEFAULT_LANGUAGE.to_string(),
        ..Default::default()
    }
}
