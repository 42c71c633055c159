//! Host State
//!
//! Shared state for all handlers, built once from the configuration.

use axum::http::HeaderValue;
use regex::Regex;

use super::error::{HostError, HostResult};
use crate::config::AssetsConfig;

/// Read-only state shared by the asset handlers
#[derive(Debug, Clone)]
pub struct HostState {
    /// Asset configuration
    pub assets: AssetsConfig,
    /// Normalized base path (`/frontend`)
    pub base_path: String,
    /// Compiled bundle pattern
    pub bundle_pattern: Regex,
    /// `Cache-Control` value for asset responses
    pub cache_control: HeaderValue,
}

impl HostState {
    /// Validate the asset configuration and build the state
    pub fn new(assets: AssetsConfig) -> HostResult<Self> {
        let base_path = assets.normalized_base_path();
        if base_path == "/" {
            return Err(HostError::InvalidConfig(
                "base_path must not be the site root".to_string(),
            ));
        }

        let bundle_pattern = Regex::new(&assets.bundle_pattern)?;

        let cache_control =
            HeaderValue::from_str(&format!("max-age={}", assets.cache_max_age_secs))
                .map_err(|e| HostError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            assets,
            base_path,
            bundle_pattern,
            cache_control,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = HostState::new(AssetsConfig::default()).unwrap();
        assert_eq!(state.base_path, "/frontend");
        assert_eq!(state.cache_control, "max-age=7200");
    }

    #[test]
    fn test_root_base_path_rejected() {
        let assets = AssetsConfig {
            base_path: "/".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            HostState::new(assets),
            Err(HostError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_bad_pattern_rejected() {
        let assets = AssetsConfig {
            bundle_pattern: "main-[".to_string(),
            ..Default::default()
        };
        assert!(matches!(HostState::new(assets), Err(HostError::Pattern(_))));
    }
}
