//! Frontdesk Host
//!
//! Serves the compiled front end under `/frontend`.
//!
//! # Configuration
//!
//! Settings come from a TOML file (`--config`, or the first of
//! `~/.config/frontdesk/config.toml`, `/etc/frontdesk/config.toml`,
//! `./config.toml`), then environment variables, then command-line flags.
//!
//! Environment variables:
//! - `FRONTDESK_HOST`: Host to bind to (default: 0.0.0.0)
//! - `FRONTDESK_PORT`: Port to listen on (default: 8080)
//! - `FRONTDESK_ASSETS_DIR`: Compiled front end (default: ./frontdesk-ui/dist)
//! - `FRONTDESK_LOG_LEVEL`: Log level (default: info)
//! - `FRONTDESK_LOG_FORMAT`: pretty or json (default: pretty)
//! - `RUST_LOG`: Full filter directives, replaces `FRONTDESK_LOG_LEVEL`

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use frontdesk::config::{generate_default_config, Config};
use frontdesk::host::{self, HostState};
use frontdesk::logging;

#[derive(Parser)]
#[command(name = "frontdesk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Asset host for the Frontdesk front end")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the front end (default)
    Serve(ServeArgs),

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Default)]
pub struct ServeArgs {
    /// Config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory with the compiled front end
    #[arg(short, long)]
    pub assets: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or_else(|| Commands::Serve(ServeArgs::default())) {
        Commands::Serve(args) => serve(args).await,
        Commands::Config { output } => {
            let content = generate_default_config();
            if let Some(path) = output {
                std::fs::write(&path, content)
                    .with_context(|| format!("Failed to write {:?}", path))?;
                println!("Config written to {:?}", path);
            } else {
                print!("{}", content);
            }
            Ok(())
        }
    }
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let source = args.config.clone().or_else(Config::locate_default);
    let mut config = match &source {
        Some(path) => Config::load_with_env(path)?,
        None => Config::from_env(),
    };

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(dir) = args.assets {
        config.assets.dir = dir;
    }

    logging::init(&config.logging).context("Failed to initialize logging")?;

    tracing::info!("Starting Frontdesk host v{}", env!("CARGO_PKG_VERSION"));
    match &source {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("Using default config with environment overrides"),
    }
    tracing::info!("Assets directory: {:?}", config.assets.dir);

    if !config.assets.index_path().exists() {
        tracing::warn!(
            "No index.html in {:?}; build the front end with `trunk build` first",
            config.assets.dir
        );
    }

    let state = HostState::new(config.assets)?;
    host::serve(state, &config.server).await?;

    Ok(())
}
