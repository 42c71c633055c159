//! Route Table
//!
//! Static list of (path pattern, page) pairs and the pure function that
//! resolves a browser path against it.

use leptos::*;
use leptos_router::use_location;

use crate::pages::Dashboard;

/// Pages reachable through the route table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Dashboard,
}

impl Page {
    pub fn render(self) -> View {
        match self {
            Page::Dashboard => view! { <Dashboard /> }.into_view(),
        }
    }
}

/// One row of the route table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: &'static str,
    pub page: Page,
}

/// Routes of the application, relative to the base path
pub const ROUTES: &[RouteEntry] = &[RouteEntry {
    pattern: "/",
    page: Page::Dashboard,
}];

/// Route entries scoped under a base path
#[derive(Clone, Copy, Debug)]
pub struct RouteTable {
    base: &'static str,
    entries: &'static [RouteEntry],
}

impl RouteTable {
    pub const fn new(base: &'static str, entries: &'static [RouteEntry]) -> Self {
        Self { base, entries }
    }

    /// Page for a full browser path, or `None` when nothing matches.
    /// Matching ignores ASCII case.
    pub fn resolve(&self, path: &str) -> Option<Page> {
        let relative = normalize(self.strip_base(path)?);
        self.entries
            .iter()
            .find(|entry| normalize(entry.pattern).eq_ignore_ascii_case(relative))
            .map(|entry| entry.page)
    }

    /// Part of `path` below the base, or `None` when `path` lies outside it.
    /// The base matches regardless of ASCII case.
    pub fn strip_base<'a>(&self, path: &'a str) -> Option<&'a str> {
        let base = self.base.trim_end_matches('/');
        if base.is_empty() {
            return Some(path);
        }

        let head = path.get(..base.len())?;
        if !head.eq_ignore_ascii_case(base) {
            return None;
        }

        let rest = &path[base.len()..];
        if rest.is_empty() || rest.starts_with('/') {
            Some(rest)
        } else {
            None
        }
    }
}

/// Empty → `/`, trailing slashes dropped
fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Renders the page the route table resolves for the current location.
/// Paths without a route render nothing.
#[component]
pub fn AppRoutes(table: RouteTable) -> impl IntoView {
    let location = use_location();
    let page = create_memo(move |_| location.pathname.with(|path| table.resolve(path)));

    move || page.get().map(Page::render)
}
