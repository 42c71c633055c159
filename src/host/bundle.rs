//! Bundle Alias
//!
//! The compiled script carries a content hash in its file name. This route
//! serves it under a stable URL so pages outside the front end can include
//! it without knowing the hash.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use regex::Regex;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use super::error::{HostError, HostResult};
use super::state::HostState;

/// Stable path of the script bundle, relative to the base path
pub const BUNDLE_ALIAS: &str = "/static/js/main.js";

/// First bundle file name referenced by `index_html`
pub fn find_bundle<'a>(index_html: &'a str, pattern: &Regex) -> Option<&'a str> {
    pattern.find(index_html).map(|m| m.as_str())
}

/// Path of `name` inside `dir`, refusing anything but plain relative segments
pub fn bundle_path(dir: &Path, name: &str) -> Option<PathBuf> {
    let relative = Path::new(name.trim_start_matches('/'));
    let plain = relative.components().next().is_some()
        && relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
    plain.then(|| dir.join(relative))
}

/// `GET {base}/static/js/main.js`
pub async fn bundle_alias(State(state): State<Arc<HostState>>) -> HostResult<Response> {
    let index_path = state.assets.index_path();
    let index = String::from_utf8_lossy(&read_asset(&index_path).await?).into_owned();

    let name = find_bundle(&index, &state.bundle_pattern).ok_or_else(|| {
        HostError::NotFound("index.html references no script bundle".to_string())
    })?;
    let path = bundle_path(&state.assets.dir, name)
        .ok_or_else(|| HostError::NotFound(format!("invalid bundle name {:?}", name)))?;

    tracing::debug!("Serving {:?} as bundle alias", path);
    let content = read_asset(&path).await?;

    Ok(([(header::CONTENT_TYPE, "text/javascript")], content).into_response())
}

async fn read_asset(path: &Path) -> HostResult<Vec<u8>> {
    match tokio::fs::read(path).await {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(HostError::NotFound(path.display().to_string()))
        }
        Err(e) => Err(e.into()),
    }
}
