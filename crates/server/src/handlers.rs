//! HTTP handlers for the recipe API.
//!
//! Each handler shapes its input, makes exactly one store call while holding
//! the store lock, and maps the result (or its absence) onto a response.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use recipe_store::{Recipe, ValidationError, Violation, validate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::AppState;

/// Raw paging parameters; validated by `validate::pagination`
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub ingredient: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub recipes: usize,
}

/// Create a recipe
///
/// POST /recipes
pub async fn create_recipe(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Recipe>), ApiError> {
    let Json(body) = body?;
    let input = validate::new_recipe(&body)?;

    let recipe = state.store.write().await.create(input);
    info!(id = %recipe.id, "Created recipe \"{}\"", recipe.title);

    Ok((StatusCode::CREATED, Json(recipe)))
}

/// List one page of recipes
///
/// GET /recipes?page=&limit=
pub async fn list_recipes(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    let Query(query) = query?;
    let page = validate::pagination(query.page.as_deref(), query.limit.as_deref())?;

    let recipes = state.store.read().await.find_all(page.page, page.limit);
    debug!(
        "Listed page {} (limit {}): {} recipes",
        page.page,
        page.limit,
        recipes.len()
    );

    Ok(Json(recipes))
}

/// Search recipes by ingredient
///
/// GET /recipes/search?ingredient=
pub async fn search_recipes(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    let Query(query) = query?;
    let term = query.ingredient.ok_or_else(|| {
        ValidationError::new(vec![Violation::new("ingredient", "is required")])
    })?;

    let recipes = state.store.read().await.search_by_ingredient(&term);
    debug!("Search for ingredient {:?} matched {} recipes", term, recipes.len());

    Ok(Json(recipes))
}

/// Fetch a recipe by id
///
/// GET /recipes/:id
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, ApiError> {
    let recipe = state.store.read().await.find_one(&id).cloned();
    recipe.map(Json).ok_or_else(|| ApiError::not_found(id))
}

/// Update a recipe with a partial payload
///
/// PUT /recipes/:id
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Recipe>, ApiError> {
    let Json(body) = body?;
    let patch = validate::recipe_patch(&body)?;
    if patch.is_empty() {
        debug!(id = %id, "Update carries no fields, record stays as is");
    }

    let updated = state.store.write().await.update(&id, patch);
    match updated {
        Some(recipe) => {
            info!(id = %recipe.id, "Updated recipe");
            Ok(Json(recipe))
        }
        None => Err(ApiError::not_found(id)),
    }
}

/// Delete a recipe
///
/// DELETE /recipes/:id
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let removed = state.store.write().await.remove(&id);
    if !removed {
        return Err(ApiError::not_found(id));
    }

    info!(id = %id, "Deleted recipe");
    Ok(StatusCode::NO_CONTENT)
}

/// Liveness/readiness probe
///
/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let recipes = state.store.read().await.len();
    Json(HealthResponse {
        status: "ok",
        recipes,
    })
}
