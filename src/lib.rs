//! # Frontdesk
//!
//! Asset host for the Frontdesk single-page front end. The front end itself
//! lives in the `frontdesk-ui` crate and compiles to WebAssembly; this crate
//! serves the compiled bundle under a fixed base path.
//!
//! ## Modules
//!
//! - [`config`]: TOML configuration with environment overrides
//! - [`host`]: Axum router serving the bundle
//! - [`logging`]: Tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use frontdesk::{config::Config, host};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env();
//!     let state = host::HostState::new(config.assets.clone())?;
//!     host::serve(state, &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod host;
pub mod logging;

pub use config::{AssetsConfig, Config, ConfigError, LoggingConfig, ServerConfig};
pub use host::{build_router, serve, HostError, HostResult, HostState};
