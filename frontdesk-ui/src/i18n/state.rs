//! Active Language State
//!
//! The currently selected language as a plain value with a pure transition.

use super::catalog::DEFAULT_LANGUAGE;

/// The active display language
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageState {
    active: String,
}

impl Default for LanguageState {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

impl LanguageState {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            active: code.into(),
        }
    }

    /// The active language code, exactly as it was set
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Switch to `code` unconditionally, whether or not the catalog knows it.
    ///
    /// No validation and no error: unknown codes render fallback text until
    /// changed again. The one exception is a blank code, which leaves the
    /// state as it was.
    pub fn set_language(&self, code: &str) -> Self {
        let code = code.trim();
        if code.is_empty() {
            return self.clone();
        }
        Self::new(code)
    }
}
