//! Standalone recipe server.
//!
//! Reads its configuration from `RECIPES_*` environment variables; see
//! `server::config`. The `recipes serve` CLI command does the same with flags.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use server::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,server=debug,recipe_store=debug")),
        )
        .init();

    info!("Starting recipe server");
    let config = Config::from_env()?;

    server::serve(config).await
}
