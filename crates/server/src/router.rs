//! Axum router configuration for the recipe server

use std::time::Duration;

use axum::{
    Router,
    middleware,
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};

use crate::config::normalize_prefix;
use crate::correlation::correlation_middleware;
use crate::handlers;
use crate::state::AppState;

/// Build the application router.
///
/// Recipe routes are mounted under `api_prefix` (empty or `/` for the root);
/// the health probe always sits at `/health`.
pub fn build_router(state: AppState, api_prefix: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(60 * 60));

    let recipes = Router::new()
        .route(
            "/recipes",
            get(handlers::list_recipes).post(handlers::create_recipe),
        )
        .route("/recipes/search", get(handlers::search_recipes))
        .route(
            "/recipes/:id",
            get(handlers::get_recipe)
                .put(handlers::update_recipe)
                .delete(handlers::delete_recipe),
        );

    let api_prefix = normalize_prefix(api_prefix);
    let api = if api_prefix.is_empty() {
        recipes
    } else {
        Router::new().nest(&api_prefix, recipes)
    };

    Router::new()
        .route("/health", get(handlers::health))
        .merge(api)
        .layer(cors)
        // Outermost, so CORS preflight answers get an id too
        .layer(middleware::from_fn(correlation_middleware))
        .with_state(state)
}
