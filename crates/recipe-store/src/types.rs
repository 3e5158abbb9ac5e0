//! Core domain types for recipe records.
//!
//! This module defines the record itself plus the two shapes callers use to
//! produce or change one:
//! - `NewRecipe`: a validated creation payload (no id yet)
//! - `RecipePatch`: a partial update where every field is optional
//!
//! The store owns every `Recipe`. Callers get clones or shared references.

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Opaque identifier assigned by the store at creation time
pub type RecipeId = String;

// =============================================================================
// Records
// =============================================================================

/// A stored recipe.
///
/// `ingredients` and `instructions` are never empty for a record that came out
/// of a `RecipeStore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl Recipe {
    /// True if any ingredient contains `needle`.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn has_ingredient_matching(&self, needle: &str) -> bool {
        self.ingredients
            .iter()
            .any(|ingredient| ingredient.to_lowercase().contains(needle))
    }
}

/// Everything needed to create a recipe except its id.
///
/// Build one through `validate::new_recipe` when the input comes from outside
/// the process. The store trusts it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecipe {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl NewRecipe {
    pub(crate) fn into_recipe(self, id: RecipeId) -> Recipe {
        Recipe {
            id,
            title: self.title,
            description: self.description,
            ingredients: self.ingredients,
            instructions: self.instructions,
        }
    }
}

/// Partial update for an existing recipe.
///
/// `None` means "leave the field alone". `description` has one more state:
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipePatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<Vec<String>>,
}

impl RecipePatch {
    /// True if applying this patch would change nothing
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.ingredients.is_none()
            && self.instructions.is_none()
    }

    /// Overwrite each present field on `recipe`. The id is never touched.
    pub(crate) fn apply_to(self, recipe: &mut Recipe) {
        if let Some(title) = self.title {
            recipe.title = title;
        }
        if let Some(description) = self.description {
            recipe.description = description;
        }
        if let Some(ingredients) = self.ingredients {
            recipe.ingredients = ingredients;
        }
        if let Some(instructions) = self.instructions {
            recipe.instructions = instructions;
        }
    }
}

// =============================================================================
// Paging
// =============================================================================

/// Page request for `RecipeStore::find_all`.
///
/// Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
}

impl Pagination {
    pub const DEFAULT_PAGE: usize = 1;
    pub const DEFAULT_LIMIT: usize = 10;

    pub fn new(page: usize, limit: usize) -> Self {
        Self { page, limit }
    }

    /// Index of the first record on this page
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE, Self::DEFAULT_LIMIT)
    }
}
