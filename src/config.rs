//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub assets: AssetsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Listener configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Socket address string to bind
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Front-end bundle configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    /// Directory holding `index.html` and the compiled bundle
    #[serde(default = "default_assets_dir")]
    pub dir: PathBuf,

    /// URL prefix the front end is served under
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// `Cache-Control: max-age` for asset responses
    #[serde(default = "default_cache_max_age")]
    pub cache_max_age_secs: u64,

    /// Regex matching the hashed script file name inside `index.html`
    #[serde(default = "default_bundle_pattern")]
    pub bundle_pattern: String,
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("./frontdesk-ui/dist")
}

fn default_base_path() -> String {
    "/frontend".to_string()
}

fn default_cache_max_age() -> u64 {
    2 * 60 * 60 // 2 hours
}

fn default_bundle_pattern() -> String {
    r"frontdesk-ui-[0-9a-f]+\.js".to_string()
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: default_assets_dir(),
            base_path: default_base_path(),
            cache_max_age_secs: default_cache_max_age(),
            bundle_pattern: default_bundle_pattern(),
        }
    }
}

impl AssetsConfig {
    /// Base path with a leading slash and no trailing slash
    pub fn normalized_base_path(&self) -> String {
        let trimmed = self.base_path.trim_matches('/');
        format!("/{}", trimmed)
    }

    /// Path of the entry document
    pub fn index_path(&self) -> PathBuf {
        self.dir.join("index.html")
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::from_toml(&content, path)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Config file locations, in lookup order
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("frontdesk").join("config.toml")),
            Some(PathBuf::from("/etc/frontdesk/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// First existing file among [`Config::default_paths`]
    pub fn locate_default() -> Option<PathBuf> {
        Self::default_paths().into_iter().find(|path| path.exists())
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from a `FRONTDESK_*` lookup
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Server overrides
        if let Some(host) = lookup("FRONTDESK_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("FRONTDESK_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!("Ignoring invalid FRONTDESK_PORT {:?}", port),
            }
        }

        // Asset overrides
        if let Some(dir) = lookup("FRONTDESK_ASSETS_DIR") {
            self.assets.dir = PathBuf::from(dir);
        }

        // Logging overrides
        if let Some(level) = lookup("FRONTDESK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("FRONTDESK_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Frontdesk Configuration
#
# Environment variables override these settings:
# - FRONTDESK_HOST
# - FRONTDESK_PORT
# - FRONTDESK_ASSETS_DIR
# - FRONTDESK_LOG_LEVEL
# - FRONTDESK_LOG_FORMAT

[server]
# Host to bind to
host = "0.0.0.0"

# Port to listen on
port = 8080

[assets]
# Directory with index.html and the compiled bundle (trunk's dist/)
dir = "./frontdesk-ui/dist"

# URL prefix the front end is served under
base_path = "/frontend"

# Cache-Control max-age for assets (seconds)
cache_max_age_secs = 7200

# Regex for the hashed script name referenced by index.html
bundle_pattern = 'frontdesk-ui-[0-9a-f]+\.js'

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.addr(), "0.0.0.0:8080");
        assert_eq!(config.assets.base_path, "/frontend");
        assert_eq!(config.assets.cache_max_age_secs, 7200);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = Config::from_toml(&generate_default_config(), Path::new("config.toml")).unwrap();
        let defaults = Config::default();
        assert_eq!(config.server.port, defaults.server.port);
        assert_eq!(config.assets.dir, defaults.assets.dir);
        assert_eq!(config.assets.bundle_pattern, defaults.assets.bundle_pattern);
        assert_eq!(config.logging.level, defaults.logging.level);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml("[server]\nport = 9000\n", Path::new("x.toml")).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.assets.base_path, "/frontend");
    }

    #[test]
    fn test_parse_error() {
        let result = Config::from_toml("[server\nport = 1", Path::new("bad.toml"));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[assets]\ndir = \"/srv/www\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.assets.dir, PathBuf::from("/srv/www"));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("FRONTDESK_HOST", "127.0.0.1"),
            ("FRONTDESK_PORT", "3000"),
            ("FRONTDESK_ASSETS_DIR", "/tmp/dist"),
            ("FRONTDESK_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.addr(), "127.0.0.1:3000");
        assert_eq!(config.assets.dir, PathBuf::from("/tmp/dist"));
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_port_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "FRONTDESK_PORT").then(|| "http".to_string()));
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_default_paths_end_with_working_dir() {
        let paths = Config::default_paths();
        assert_eq!(paths.last(), Some(&PathBuf::from("./config.toml")));
        assert!(paths.contains(&PathBuf::from("/etc/frontdesk/config.toml")));
    }

    #[test]
    fn test_load_with_env_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[assets]\ncache_max_age_secs = 60\n").unwrap();

        let config = Config::load_with_env(&path).unwrap();
        assert_eq!(config.assets.cache_max_age_secs, 60);
    }

    #[test]
    fn test_normalized_base_path() {
        let mut assets = AssetsConfig::default();
        assert_eq!(assets.normalized_base_path(), "/frontend");
        assets.base_path = "frontend/".to_string();
        assert_eq!(assets.normalized_base_path(), "/frontend");
    }
}
