use std::sync::Arc;

use recipe_store::RecipeStore;
use tokio::sync::RwLock;

/// Shared handler state.
///
/// The store lives behind one lock; each handler holds it around exactly one
/// store call, so no two mutations interleave.
#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<RwLock<RecipeStore>>,
}

impl AppState {
    pub fn new(store: RecipeStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}
