use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use recipe_store::{seed, NewRecipe, StoreError};
use server::Config;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Recipes - in-memory recipe collection service
#[derive(Parser)]
#[command(name = "recipes")]
#[command(about = "CRUD web service for recipe records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP service
    ///
    /// Flags override the RECIPES_BIND, RECIPES_API_PREFIX and
    /// RECIPES_SEED_FILE environment variables.
    Serve {
        /// Address to listen on
        #[arg(long)]
        bind: Option<SocketAddr>,

        /// Path prefix for the recipe routes ("/" for the root)
        #[arg(long)]
        prefix: Option<String>,

        /// JSON array of recipes to load at startup
        #[arg(long)]
        seed: Option<PathBuf>,
    },

    /// Validate a seed file without starting the service
    Check {
        /// Seed file to validate
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Serve { bind, prefix, seed } => handle_serve(bind, prefix, seed).await?,
        Commands::Check { file } => handle_check(&file)?,
    }

    Ok(())
}

/// Handle the 'serve' command
async fn handle_serve(
    bind: Option<SocketAddr>,
    prefix: Option<String>,
    seed: Option<PathBuf>,
) -> Result<()> {
    let mut config = Config::from_env().context("Invalid environment configuration")?;
    if let Some(bind) = bind {
        config = config.with_bind(bind);
    }
    if let Some(prefix) = prefix {
        config = config.with_api_prefix(&prefix);
    }
    if let Some(seed) = seed {
        config = config.with_seed_file(seed);
    }

    println!(
        "{} Serving recipes on {}{}/recipes",
        "•".green(),
        config.bind,
        config.api_prefix
    );
    server::serve(config).await
}

/// Handle the 'check' command
fn handle_check(file: &Path) -> Result<()> {
    let start = Instant::now();

    match seed::load_seed_file(file) {
        Ok(recipes) => {
            println!(
                "{} {} is valid: {} recipes ({:?})",
                "✓".green(),
                file.display(),
                recipes.len(),
                start.elapsed()
            );
            print_recipes(&recipes);
            Ok(())
        }
        Err(StoreError::InvalidEntry { index, source }) => {
            println!(
                "{} {} entry {} is invalid:",
                "✗".red(),
                file.display(),
                index
            );
            for violation in &source.violations {
                println!("  - {} {}", violation.field.bold(), violation.reason);
            }
            Err(anyhow!("Seed file {} failed validation", file.display()))
        }
        Err(e) => Err(e).with_context(|| format!("Failed to read seed file {}", file.display())),
    }
}

/// Helper function to print a short summary of each recipe
fn print_recipes(recipes: &[NewRecipe]) {
    for (i, recipe) in recipes.iter().enumerate() {
        println!(
            "{}. {} [{} ingredients, {} steps]",
            (i + 1).to_string().green(),
            recipe.title.bold(),
            recipe.ingredients.len(),
            recipe.instructions.len()
        );
        if let Some(description) = &recipe.description {
            println!("   {}", description);
        }
    }
}
