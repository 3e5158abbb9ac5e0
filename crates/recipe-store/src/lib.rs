//! # Recipe Store Crate
//!
//! This crate owns the recipe records and every query and mutation on them.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Recipe, NewRecipe, RecipePatch, Pagination)
//! - **store**: The in-memory `RecipeStore`
//! - **validate**: Turn untrusted JSON into `NewRecipe`/`RecipePatch`
//! - **seed**: Load a JSON array of recipes into a fresh store
//! - **error**: Error types
//!
//! ## Example Usage
//!
//! ```
//! use recipe_store::{RecipeStore, validate};
//! use serde_json::json;
//!
//! let mut store = RecipeStore::new();
//! let input = validate::new_recipe(&json!({
//!     "title": "Soup",
//!     "ingredients": ["salt", "water"],
//!     "instructions": ["boil"],
//! }))?;
//!
//! let soup = store.create(input);
//! assert_eq!(store.search_by_ingredient("SALT"), vec![soup]);
//! # Ok::<(), recipe_store::ValidationError>(())
//! ```

// Public modules
pub mod error;
pub mod seed;
pub mod store;
pub mod types;
pub mod validate;

// Re-export commonly used types for convenience
pub use error::{Result, StoreError, ValidationError, Violation};
pub use store::RecipeStore;
pub use types::{NewRecipe, Pagination, Recipe, RecipeId, RecipePatch};
