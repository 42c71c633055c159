//! Localization Context
//!
//! Reactive handle over the catalog and the active language, provided to the
//! component tree through Leptos context.

use leptos::*;
use std::rc::Rc;

use super::catalog::Catalog;
use super::detect::LanguageCache;
use super::state::LanguageState;

/// Localization handle shared by all views of one tree
#[derive(Clone)]
pub struct I18n {
    catalog: Rc<Catalog>,
    state: RwSignal<LanguageState>,
    cache: Option<Rc<dyn LanguageCache>>,
}

impl I18n {
    /// Create a handle starting in `language`
    pub fn new(catalog: Catalog, language: impl Into<String>) -> Self {
        Self {
            catalog: Rc::new(catalog),
            state: create_rw_signal(LanguageState::new(language)),
            cache: None,
        }
    }

    /// Persist every language change through `cache`
    pub fn with_cache(mut self, cache: impl LanguageCache + 'static) -> Self {
        self.cache = Some(Rc::new(cache));
        self
    }

    /// Active language code (tracked)
    pub fn language(&self) -> String {
        self.state.with(|state| state.active().to_string())
    }

    /// Translate `key` in the active language (tracked)
    pub fn t(&self, key: &str) -> String {
        self.state
            .with(|state| self.catalog.translate(state.active(), key))
    }

    /// Switch the active language. Unknown codes are accepted as-is.
    pub fn change_language(&self, code: &str) {
        let next = self.state.with_untracked(|state| state.set_language(code));
        if self.state.with_untracked(|state| *state == next) {
            return;
        }

        tracing::info!("Changing language to '{}'", next.active());
        if let Some(cache) = &self.cache {
            cache.store(next.active());
        }
        self.state.set(next);
    }
}

/// Provide the localization handle to the component tree
pub fn provide_i18n(i18n: I18n) {
    provide_context(i18n);
}

/// Localization handle of the enclosing tree
pub fn use_i18n() -> I18n {
    use_context::<I18n>().expect("I18n not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Clone, Default)]
    struct RecordingCache(Rc<RefCell<Vec<String>>>);

    impl LanguageCache for RecordingCache {
        fn store(&self, code: &str) {
            self.0.borrow_mut().push(code.to_string());
        }
    }

    #[test]
    fn test_change_language_switches_greeting() {
        let runtime = create_runtime();

        let i18n = I18n::new(Catalog::builtin(), "en");
        assert_eq!(i18n.t("dashboard.welcome"), "Welcome");

        i18n.change_language("de");
        assert_eq!(i18n.language(), "de");
        assert_eq!(i18n.t("dashboard.welcome"), "Willkommen");

        i18n.change_language("en");
        assert_eq!(i18n.t("dashboard.welcome"), "Welcome");

        runtime.dispose();
    }

    #[test]
    fn test_unknown_language_renders_fallback() {
        let runtime = create_runtime();

        let i18n = I18n::new(Catalog::builtin(), "de");
        i18n.change_language("fr");
        assert_eq!(i18n.language(), "fr");
        assert_eq!(i18n.t("dashboard.welcome"), "Welcome");

        runtime.dispose();
    }

    #[test]
    fn test_instances_are_independent() {
        let runtime = create_runtime();

        let first = I18n::new(Catalog::builtin(), "en");
        let second = I18n::new(Catalog::builtin(), "en");
        first.change_language("de");
        assert_eq!(first.language(), "de");
        assert_eq!(second.language(), "en");

        runtime.dispose();
    }

    #[test]
    fn test_changes_are_cached() {
        let runtime = create_runtime();

        let cache = RecordingCache::default();
        let i18n = I18n::new(Catalog::builtin(), "en").with_cache(cache.clone());
        i18n.change_language("de");
        i18n.change_language("de");
        i18n.change_language("");
        i18n.change_language("en");
        assert_eq!(*cache.0.borrow(), vec!["de".to_string(), "en".to_string()]);

        runtime.dispose();
    }
}
