//! App Root Component
//!
//! Application shell: localization context and the navigation context
//! scoped under the base path, around the route table.

use leptos::*;
use leptos_router::*;

use crate::i18n::{provide_i18n, I18n};
use crate::routes::{AppRoutes, RouteTable, ROUTES};

/// Root application component
#[component]
pub fn App(
    /// Localization handle for this tree
    i18n: I18n,
    /// Path prefix of every client-side route
    base: &'static str,
) -> impl IntoView {
    provide_i18n(i18n);

    view! {
        <Router base=base>
            <AppRoutes table=RouteTable::new(base, ROUTES) />
        </Router>
    }
}
