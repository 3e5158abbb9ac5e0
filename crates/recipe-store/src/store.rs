//! The in-memory recipe collection.
//!
//! `RecipeStore` is a flat `Vec` in insertion order plus an id counter.
//! Every operation is a linear scan; the collection is expected to stay small.
//!
//! The store does no locking of its own. Whoever shares it between tasks wraps
//! it (the server uses `Arc<RwLock<RecipeStore>>`), and each method is a single
//! step relative to that lock.

use tracing::debug;

use crate::types::{NewRecipe, Pagination, Recipe, RecipeId, RecipePatch};

/// Authoritative collection of recipes for one process.
#[derive(Debug)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
    /// Last id handed out. Never rewinds, so removed ids are not re-issued.
    last_id: u64,
}

impl RecipeStore {
    /// Creates a new, empty store
    pub fn new() -> Self {
        Self {
            recipes: Vec::new(),
            last_id: 0,
        }
    }

    /// Store a new recipe under a fresh id and return the stored record
    pub fn create(&mut self, input: NewRecipe) -> Recipe {
        let id = self.next_id();
        let recipe = input.into_recipe(id);
        debug!(id = %recipe.id, title = %recipe.title, "created recipe");

        self.recipes.push(recipe.clone());
        recipe
    }

    /// One page of recipes in insertion order.
    ///
    /// Pages past the end come back empty.
    pub fn find_all(&self, page: usize, limit: usize) -> Vec<Recipe> {
        let offset = Pagination::new(page, limit).offset();
        self.recipes
            .iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Look up a recipe by id
    pub fn find_one(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    /// Apply `patch` to the recipe with `id`.
    ///
    /// Returns the updated record, or `None` if there is no such recipe (in
    /// which case nothing changed).
    pub fn update(&mut self, id: &str, patch: RecipePatch) -> Option<Recipe> {
        let recipe = self.recipes.iter_mut().find(|recipe| recipe.id == id)?;
        patch.apply_to(recipe);
        debug!(id = %recipe.id, "updated recipe");
        Some(recipe.clone())
    }

    /// Delete the recipe with `id`. Returns false if it did not exist.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.recipes.iter().position(|recipe| recipe.id == id) {
            Some(index) => {
                // `remove` rather than `swap_remove`: listing order is insertion order
                self.recipes.remove(index);
                debug!(id, "removed recipe");
                true
            }
            None => false,
        }
    }

    /// All recipes with at least one ingredient containing `term`,
    /// ignoring case, in store order. An empty term matches every recipe.
    pub fn search_by_ingredient(&self, term: &str) -> Vec<Recipe> {
        let needle = term.to_lowercase();
        self.recipes
            .iter()
            .filter(|recipe| recipe.has_ingredient_matching(&needle))
            .cloned()
            .collect()
    }

    /// Number of live recipes
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    fn next_id(&mut self) -> RecipeId {
        self.last_id += 1;
        self.last_id.to_string()
    }
}

impl Default for RecipeStore {
    fn default() -> Self {
        Self::new()
    }
}
