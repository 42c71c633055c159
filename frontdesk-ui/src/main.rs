//! Frontdesk
//!
//! Single-page front end built with Leptos (WASM).
//!
//! # Features
//!
//! - Application shell with client-side routing under `/frontend`
//! - Dashboard with runtime language switching (English, German)
//! - Standalone counter widget in its own mount point
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The hosting page provides two elements, `#root` and
//! `#counter`; each one that exists gets an independent component tree.

mod app;
mod components;
mod config;
mod i18n;
mod mount;
mod pages;
mod routes;
mod vitals;

use config::AppConfig;
use i18n::{BrowserLanguageCache, Catalog, DetectionSignals, I18n, LanguageCache};
use mount::{mount_all, mount_points, BrowserHost};

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!("Starting Frontdesk v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::default();

    // Detect the initial language once and remember it
    let catalog = Catalog::builtin().with_fallback(config.fallback_language);
    let signals = DetectionSignals::from_browser(&config.detection);
    let language = i18n::detect(&signals, &config.detection, &catalog);
    let cache = BrowserLanguageCache::new(config.detection.clone());
    cache.store(&language);

    let i18n = I18n::new(catalog, language).with_cache(cache);

    let host = BrowserHost::new(&config, i18n);
    let attached = mount_all(&host, &mount_points(&config));
    tracing::info!("Mounted {} component tree(s)", attached.len());

    if config.report_vitals {
        vitals::report_web_vitals(Some(&vitals::log_metric));
    }
}
