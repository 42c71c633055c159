//! Translation Catalog
//!
//! The locale table: language code → nested object of translation keys →
//! display strings. Built once at startup, read-only afterwards.

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

/// Default and fallback language
pub const DEFAULT_LANGUAGE: &str = "en";

/// Locale resources compiled into the bundle
const BUILTIN_RESOURCES: &[(&str, &str)] = &[
    ("en", include_str!("../../locales/en.json")),
    ("de", include_str!("../../locales/de.json")),
];

/// Errors raised while loading locale resources
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("locale '{language}' is not valid JSON: {source}")]
    Parse {
        language: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("locale '{language}' must be a JSON object at the top level")]
    NotAnObject { language: String },
}

/// Immutable table of translations with a fallback language
#[derive(Clone, Debug)]
pub struct Catalog {
    resources: BTreeMap<String, Value>,
    fallback: String,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Create an empty catalog
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            resources: BTreeMap::new(),
            fallback: fallback.into(),
        }
    }

    /// Catalog holding the locales shipped with the front end.
    ///
    /// A resource that fails to parse is logged and left out; lookups for
    /// that language then go through the fallback chain.
    pub fn builtin() -> Self {
        let mut catalog = Self::new(DEFAULT_LANGUAGE);
        for (language, json) in BUILTIN_RESOURCES {
            if let Err(e) = catalog.add_json(language, json) {
                tracing::error!("Skipping locale: {}", e);
            }
        }
        catalog
    }

    /// Replace the fallback language
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    /// Add (or replace) a language from its JSON source
    pub fn add_json(&mut self, language: &str, json: &str) -> Result<(), CatalogError> {
        let value: Value = serde_json::from_str(json).map_err(|source| CatalogError::Parse {
            language: language.to_string(),
            source,
        })?;
        self.add_resource(language, value)
    }

    /// Add (or replace) a language from an already parsed object
    pub fn add_resource(&mut self, language: &str, value: Value) -> Result<(), CatalogError> {
        if !value.is_object() {
            return Err(CatalogError::NotAnObject {
                language: language.to_string(),
            });
        }
        self.resources.insert(language.to_string(), value);
        Ok(())
    }

    /// The fallback language code
    pub fn fallback_language(&self) -> &str {
        &self.fallback
    }

    /// Language codes present in the table
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    /// Whether the table holds a resource for exactly this code
    pub fn has_language(&self, code: &str) -> bool {
        self.resources.contains_key(code)
    }

    /// Reduce a candidate code to a language of the table.
    ///
    /// Matches the exact code first, then the primary subtag
    /// (`"de-DE"` → `"de"`), case-insensitively.
    pub fn supported(&self, candidate: &str) -> Option<&str> {
        let candidate = candidate.trim();
        if candidate.is_empty() {
            return None;
        }

        if self.has_language(candidate) {
            return self.languages().find(|code| *code == candidate);
        }

        let exact = self
            .languages()
            .find(|code| code.eq_ignore_ascii_case(candidate));
        if exact.is_some() {
            return exact;
        }

        let primary = primary_subtag(candidate);
        self.languages()
            .find(|code| code.eq_ignore_ascii_case(primary))
    }

    /// Languages a lookup for `code` tries, in order, without duplicates
    pub fn language_chain(&self, code: &str) -> Vec<String> {
        let mut chain: Vec<String> = Vec::with_capacity(3);
        let mut push = |language: &str| {
            if !language.is_empty() && !chain.iter().any(|c| c == language) {
                chain.push(language.to_string());
            }
        };

        push(code);
        push(primary_subtag(code));
        push(&self.fallback);
        chain
    }

    /// Raw lookup of a dot-addressed key in one language
    pub fn lookup(&self, language: &str, key: &str) -> Option<&str> {
        let mut node = self.resources.get(language)?;
        for segment in key.split('.') {
            node = node.as_object()?.get(segment)?;
        }
        node.as_str()
    }

    /// Translate `key` for `language`, falling back along the language chain
    /// and finally to the key itself
    pub fn translate(&self, language: &str, key: &str) -> String {
        self.language_chain(language)
            .iter()
            .find_map(|candidate| self.lookup(candidate, key))
            .map(str::to_string)
            .unwrap_or_else(|| {
                tracing::debug!("Missing translation for '{}' in '{}'", key, language);
                key.to_string()
            })
    }

}

/// Primary language subtag of a code (`"de-DE"` → `"de"`)
pub fn primary_subtag(code: &str) -> &str {
    code.split(['-', '_']).next().unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_both_languages() {
        let catalog = Catalog::builtin();
        assert!(catalog.has_language("en"));
        assert!(catalog.has_language("de"));
        assert_eq!(catalog.fallback_language(), "en");
    }

    #[test]
    fn test_translate_nested_key() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.translate("en", "dashboard.welcome"), "Welcome");
        assert_eq!(catalog.translate("de", "dashboard.welcome"), "Willkommen");
        assert_eq!(catalog.translate("de", "yes"), "Ja");
        assert_eq!(catalog.translate("en", "no"), "No");
    }

    #[test]
    fn test_unknown_language_uses_fallback() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.translate("fr", "dashboard.welcome"), "Welcome");
        assert_eq!(catalog.translate("", "yes"), "Yes");
    }

    #[test]
    fn test_region_code_uses_primary_subtag() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.translate("de-DE", "dashboard.welcome"), "Willkommen");
        assert_eq!(catalog.translate("de-AT", "no"), "Nein");
    }

    #[test]
    fn test_missing_key_returns_key() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.translate("de", "dashboard.missing"), "dashboard.missing");
        // A key that addresses an object is not a translation
        assert_eq!(catalog.translate("en", "dashboard"), "dashboard");
    }

    #[test]
    fn test_key_missing_in_active_language_falls_back() {
        let mut catalog = Catalog::builtin();
        catalog
            .add_json("de", r#"{"dashboard": {"welcome": "Willkommen"}}"#)
            .unwrap();
        assert_eq!(catalog.translate("de", "yes"), "Yes");
    }

    #[test]
    fn test_language_chain() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.language_chain("de-DE"), vec!["de-DE", "de", "en"]);
        assert_eq!(catalog.language_chain("fr"), vec!["fr", "en"]);
        assert_eq!(catalog.language_chain("en"), vec!["en"]);
    }

    #[test]
    fn test_supported() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.supported("de"), Some("de"));
        assert_eq!(catalog.supported("de-DE"), Some("de"));
        assert_eq!(catalog.supported("EN_us"), Some("en"));
        assert_eq!(catalog.supported("fr-FR"), None);
        assert_eq!(catalog.supported("  "), None);
    }

    #[test]
    fn test_supported_prefers_exact_region_code() {
        let mut catalog = Catalog::builtin();
        catalog
            .add_json("de-AT", r#"{"dashboard": {"welcome": "Servus"}}"#)
            .unwrap();
        assert!(catalog.has_language("de-AT"));
        assert_eq!(catalog.supported("de-AT"), Some("de-AT"));
        assert_eq!(catalog.supported("de-CH"), Some("de"));
    }

    #[test]
    fn test_add_json_rejects_bad_input() {
        let mut catalog = Catalog::new("en");
        assert!(matches!(
            catalog.add_json("xx", "{not json"),
            Err(CatalogError::Parse { .. })
        ));
        assert!(matches!(
            catalog.add_json("xx", r#"["a"]"#),
            Err(CatalogError::NotAnObject { .. })
        ));
        assert!(!catalog.has_language("xx"));
    }

    #[test]
    fn test_empty_catalog_returns_key() {
        let catalog = Catalog::new("en");
        assert_eq!(catalog.translate("en", "dashboard.welcome"), "dashboard.welcome");
    }
}
