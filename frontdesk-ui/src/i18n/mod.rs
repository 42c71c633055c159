//! Localization
//!
//! Translation catalog, active-language state, startup language detection
//! and the reactive context views read from.

pub mod catalog;
pub mod context;
pub mod detect;
pub mod state;

pub use catalog::{Catalog, DEFAULT_LANGUAGE};
pub use context::{provide_i18n, use_i18n, I18n};
pub use detect::{detect, BrowserLanguageCache, DetectionSignals, DetectorOptions, LanguageCache};
