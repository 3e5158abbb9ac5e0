//! Request-level failures and how they map onto HTTP responses.
//!
//! Every 4xx body has the same shape:
//!
//! ```json
//! { "error": "not_found", "message": "Recipe with ID \"7\" not found" }
//! ```
//!
//! Validation failures add a `violations` array.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use recipe_store::{RecipeId, ValidationError};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The payload or query broke one or more recipe rules
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request could not be parsed at all (bad JSON, wrong content type)
    #[error("Malformed request: {0}")]
    BadRequest(String),

    #[error("Recipe with ID \"{id}\" not found")]
    NotFound { id: RecipeId },
}

impl ApiError {
    pub fn not_found(id: impl Into<RecipeId>) -> Self {
        ApiError::NotFound { id: id.into() }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => "validation_failed",
            ApiError::NotFound { .. } => "not_found",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut body = json!({
            "error": self.code(),
            "message": self.to_string(),
        });

        match &self {
            ApiError::Validation(err) => {
                warn!("Rejected request: {err}");
                body["violations"] = json!(err.violations);
            }
            ApiError::BadRequest(reason) => warn!("Rejected request: {reason}"),
            ApiError::NotFound { .. } => {}
        }

        (status, Json(body)).into_response()
    }
}
