//! Language Detection
//!
//! Picks the initial language once at startup from the browser's hints
//! (query string, cookie, storage, navigator, `<html lang>`) and caches the
//! result so the next visit starts in the same language.

use wasm_bindgen::JsCast;

use super::catalog::Catalog;

/// Where a language hint comes from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    QueryString,
    Cookie,
    LocalStorage,
    SessionStorage,
    Navigator,
    HtmlTag,
}

/// Detector configuration
#[derive(Clone, Debug)]
pub struct DetectorOptions {
    /// Sources to consult, highest priority first
    pub order: Vec<Source>,
    /// Query-string parameter name (`?lng=de`)
    pub lookup_query_string: &'static str,
    /// Cookie name
    pub lookup_cookie: &'static str,
    /// Local storage key
    pub lookup_local_storage: &'static str,
    /// Session storage key
    pub lookup_session_storage: &'static str,
    /// Sources the chosen language is written back to
    pub caches: Vec<Source>,
}

impl Default for DetectorOptions {
    fn default() -> Self {
        Self {
            order: vec![
                Source::QueryString,
                Source::Cookie,
                Source::LocalStorage,
                Source::SessionStorage,
                Source::Navigator,
                Source::HtmlTag,
            ],
            lookup_query_string: "lng",
            lookup_cookie: "i18next",
            lookup_local_storage: "i18nextLng",
            lookup_session_storage: "i18nextLng",
            caches: vec![Source::LocalStorage],
        }
    }
}

/// Snapshot of the browser's language hints
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetectionSignals {
    pub query_string: Option<String>,
    pub cookie: Option<String>,
    pub local_storage: Option<String>,
    pub session_storage: Option<String>,
    /// `navigator.languages`, most preferred first
    pub navigator: Vec<String>,
    pub html_tag: Option<String>,
}

impl DetectionSignals {
    /// Candidate codes in the order given by `order`
    pub fn candidates(&self, order: &[Source]) -> Vec<&str> {
        let mut found = Vec::new();
        for source in order {
            match source {
                Source::QueryString => found.extend(self.query_string.as_deref()),
                Source::Cookie => found.extend(self.cookie.as_deref()),
                Source::LocalStorage => found.extend(self.local_storage.as_deref()),
                Source::SessionStorage => found.extend(self.session_storage.as_deref()),
                Source::Navigator => found.extend(self.navigator.iter().map(String::as_str)),
                Source::HtmlTag => found.extend(self.html_tag.as_deref()),
            }
        }
        found.retain(|code| !code.trim().is_empty());
        found
    }

    /// Read the hints from the current page
    pub fn from_browser(options: &DetectorOptions) -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let document = window.document();

        let query_string = window
            .location()
            .search()
            .ok()
            .and_then(|search| query_param(&search, options.lookup_query_string));

        let cookie = document
            .as_ref()
            .and_then(|doc| doc.clone().dyn_into::<web_sys::HtmlDocument>().ok())
            .and_then(|doc| doc.cookie().ok())
            .and_then(|cookies| cookie_value(&cookies, options.lookup_cookie));

        let local_storage = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(options.lookup_local_storage).ok().flatten());

        let session_storage = window
            .session_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(options.lookup_session_storage).ok().flatten());

        let navigator = window.navigator();
        let mut languages: Vec<String> = navigator
            .languages()
            .iter()
            .filter_map(|value| value.as_string())
            .collect();
        if let Some(language) = navigator.language() {
            if !languages.contains(&language) {
                languages.push(language);
            }
        }

        let html_tag = document
            .and_then(|doc| doc.document_element())
            .and_then(|root| root.get_attribute("lang"));

        Self {
            query_string,
            cookie,
            local_storage,
            session_storage,
            navigator: languages,
            html_tag,
        }
    }
}

/// Choose the initial language.
///
/// The first candidate the catalog supports (exactly or by primary subtag)
/// wins, reduced to the catalog's code. Unsupported candidates are skipped.
/// Without a match the catalog's fallback language is used.
pub fn detect(signals: &DetectionSignals, options: &DetectorOptions, catalog: &Catalog) -> String {
    // Hints the catalog cannot serve are passed over in favour of later
    // ones, so `["fr-FR", "de"]` starts in German rather than fallback text.
    for candidate in signals.candidates(&options.order) {
        if let Some(code) = catalog.supported(candidate) {
            tracing::debug!("Detected language '{}' from '{}'", code, candidate);
            return code.to_string();
        }
    }

    tracing::debug!(
        "No supported language hint, using fallback '{}'",
        catalog.fallback_language()
    );
    catalog.fallback_language().to_string()
}

/// Value of `name` in a `?a=1&b=2` query string
pub fn query_param(search: &str, name: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

/// Value of cookie `name` in a `document.cookie` string
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

/// Persists the user's language choice
pub trait LanguageCache {
    fn store(&self, code: &str);
}

/// Writes the language to the browser sources listed in
/// [`DetectorOptions::caches`]
#[derive(Clone, Debug)]
pub struct BrowserLanguageCache {
    options: DetectorOptions,
}

impl BrowserLanguageCache {
    pub fn new(options: DetectorOptions) -> Self {
        Self { options }
    }
}

impl LanguageCache for BrowserLanguageCache {
    fn store(&self, code: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };

        for source in &self.options.caches {
            let result = match source {
                Source::LocalStorage => window
                    .local_storage()
                    .ok()
                    .flatten()
                    .map(|s| s.set_item(self.options.lookup_local_storage, code)),
                Source::SessionStorage => window
                    .session_storage()
                    .ok()
                    .flatten()
                    .map(|s| s.set_item(self.options.lookup_session_storage, code)),
                Source::Cookie => window
                    .document()
                    .and_then(|doc| doc.dyn_into::<web_sys::HtmlDocument>().ok())
                    .map(|doc| {
                        doc.set_cookie(&format!(
                            "{}={}; path=/; max-age=31536000",
                            self.options.lookup_cookie, code
                        ))
                    }),
                Source::QueryString | Source::Navigator | Source::HtmlTag => None,
            };

            if let Some(Err(e)) = result {
                tracing::warn!("Could not cache language in {:?}: {:?}", source, e);
            }
        }
    }
}
