//! Seed documents: a JSON array of creation payloads.
//!
//! ```json
//! [
//!   { "title": "Soup", "ingredients": ["salt", "water"], "instructions": ["boil"] }
//! ]
//! ```
//!
//! Every entry goes through `validate::new_recipe`. The first invalid entry
//! aborts the whole load so a half-seeded store never starts serving.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::error::{Result, StoreError};
use crate::store::RecipeStore;
use crate::types::NewRecipe;
use crate::validate;

/// Parse and validate a seed document held in memory
pub fn parse_seed(content: &str) -> Result<Vec<NewRecipe>> {
    let document: Value = serde_json::from_str(content)?;

    let entries = match document {
        Value::Array(entries) => entries,
        other => {
            return Err(StoreError::NotAnArray {
                found: validate::kind(&other).to_string(),
            });
        }
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            validate::new_recipe(entry).map_err(|source| StoreError::InvalidEntry { index, source })
        })
        .collect()
}

/// Read, parse and validate a seed file
pub fn load_seed_file(path: &Path) -> Result<Vec<NewRecipe>> {
    let content = fs::read_to_string(path)?;
    let recipes = parse_seed(&content)?;
    info!("Parsed {} seed recipes from {}", recipes.len(), path.display());
    Ok(recipes)
}

impl RecipeStore {
    /// Build a store pre-populated from a seed file
    pub fn from_seed_file(path: &Path) -> Result<Self> {
        let mut store = RecipeStore::new();
        for recipe in load_seed_file(path)? {
            store.create(recipe);
        }
        Ok(store)
    }
}
