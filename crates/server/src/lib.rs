//! Server crate for the recipe service.
//!
//! This crate is the HTTP adapter in front of `recipe-store`: it turns
//! requests into store calls and store results into responses.
//!
//! ## Routes
//!
//! | Method | Path | Success | Failure |
//! |---|---|---|---|
//! | POST | `{prefix}/recipes` | 201 + record | 400 |
//! | GET | `{prefix}/recipes?page&limit` | 200 + list | 400 |
//! | GET | `{prefix}/recipes/search?ingredient=` | 200 + list | 400 |
//! | GET | `{prefix}/recipes/:id` | 200 + record | 404 |
//! | PUT | `{prefix}/recipes/:id` | 200 + record | 400, 404 |
//! | DELETE | `{prefix}/recipes/:id` | 204 | 404 |
//! | GET | `/health` | 200 | |

use std::future::Future;

use anyhow::{Context, Result};
use axum::Router;
use recipe_store::RecipeStore;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

pub mod config;
pub mod correlation;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::Config;
pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;

/// Build the store described by `config`, empty unless a seed file is set
pub fn load_store(config: &Config) -> Result<RecipeStore> {
    match &config.seed_file {
        Some(path) => {
            info!("Seeding store from {}", path.display());
            RecipeStore::from_seed_file(path)
                .with_context(|| format!("Failed to load seed file {}", path.display()))
        }
        None => Ok(RecipeStore::new()),
    }
}

/// Run the server until Ctrl+C or SIGTERM
pub async fn serve(config: Config) -> Result<()> {
    let store = load_store(&config)?;
    info!("Store ready with {} recipes", store.len());

    let app = build_router(AppState::new(store), &config.api_prefix);

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    info!(
        "Server running on {} (recipes under {}/recipes)",
        config.bind, config.api_prefix
    );

    serve_until(listener, app, shutdown_signal()).await
}

/// Serve `app` on an already bound listener until `shutdown` resolves
pub async fn serve_until(
    listener: TcpListener,
    app: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}");
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
}
