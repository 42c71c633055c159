//! Frontdesk Asset Host
//!
//! Serves the compiled front end, built with Axum.
//!
//! # Endpoints
//!
//! - `GET /` - Redirect to the front end
//! - `GET /frontend` and `GET /frontend/` - `index.html`
//! - `GET /frontend/static/js/main.js` - Stable alias of the hashed script bundle
//! - `GET /frontend/<file>` - Static asset
//! - `GET /frontend/<anything else>` - `index.html`, for client-side routes
//!
//! Asset responses carry `Cache-Control: max-age=<cache_max_age_secs>`.
//!
//! # Example
//!
//! ```rust,ignore
//! use frontdesk::config::Config;
//! use frontdesk::host::{serve, HostState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let state = HostState::new(config.assets.clone())?;
//!     serve(state, &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod bundle;
pub mod error;
pub mod state;

pub use error::{HostError, HostResult};
pub use state::HostState;

use axum::{
    extract::State,
    http::header,
    response::Redirect,
    routing::{get, get_service},
    Router,
};
use std::sync::Arc;
use tower_http::{
    services::{ServeDir, ServeFile},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use bundle::{bundle_alias, BUNDLE_ALIAS};

/// Build the host router with all routes and middleware
pub fn build_router(state: HostState) -> Router {
    let base = state.base_path.clone();
    let index = state.assets.index_path();
    let cache_control =
        SetResponseHeaderLayer::if_not_present(header::CACHE_CONTROL, state.cache_control.clone());

    // Unknown paths below the base are client-side routes: answer with the index
    let files = ServeDir::new(&state.assets.dir).fallback(ServeFile::new(&index));

    let frontend_routes = Router::new()
        .route(BUNDLE_ALIAS, get(bundle_alias))
        .fallback_service(files)
        .layer(cache_control.clone());

    let index_routes = Router::new()
        .route(&base, get_service(ServeFile::new(&index)))
        .route(&format!("{}/", base), get_service(ServeFile::new(&index)))
        .layer(cache_control);

    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(redirect_to_frontend))
        .merge(index_routes)
        .nest(&base, frontend_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

/// `GET /`
async fn redirect_to_frontend(State(state): State<Arc<HostState>>) -> Redirect {
    Redirect::permanent(&format!("{}/", state.base_path))
}

/// Start the host
pub async fn serve(state: HostState, config: &ServerConfig) -> Result<(), HostError> {
    let base = state.base_path.clone();
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Frontdesk listening on http://{}{}/", addr, base);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| HostError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Frontdesk shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
