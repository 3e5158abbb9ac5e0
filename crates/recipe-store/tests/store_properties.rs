//! Integration tests for the recipe store.
//!
//! These walk the store through realistic sequences of operations and check
//! the properties every caller relies on: stable ids, exact patching, paging
//! that covers every record once, and case-insensitive search.

use std::collections::HashSet;
use std::io::Write;

use recipe_store::{NewRecipe, RecipePatch, RecipeStore, validate};
use serde_json::json;

fn recipe(title: &str, ingredients: &[&str], instructions: &[&str]) -> NewRecipe {
    NewRecipe {
        title: title.to_string(),
        description: None,
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        instructions: instructions.iter().map(|s| s.to_string()).collect(),
    }
}

fn populated(count: usize) -> RecipeStore {
    let mut store = RecipeStore::new();
    for i in 0..count {
        store.create(recipe(
            &format!("Test Recipe {i}"),
            &["ingredient1", "ingredient2"],
            &["step 1"],
        ));
    }
    store
}

#[test]
fn test_create_returns_input_fields_and_unique_ids() {
    let mut store = RecipeStore::new();
    let mut seen = HashSet::new();

    for i in 0..50 {
        let input = NewRecipe {
            description: Some(format!("description {i}")),
            ..recipe(&format!("Recipe {i}"), &["flour", "eggs"], &["whisk", "bake"])
        };
        let created = store.create(input.clone());

        assert!(!created.id.is_empty());
        assert!(seen.insert(created.id.clone()), "duplicate id {}", created.id);
        assert_eq!(created.title, input.title);
        assert_eq!(created.description, input.description);
        assert_eq!(created.ingredients, input.ingredients);
        assert_eq!(created.instructions, input.instructions);
    }
}

#[test]
fn test_find_one_matches_created_record() {
    let mut store = populated(3);
    let created = store.create(recipe("Soup", &["salt", "water"], &["boil"]));

    assert_eq!(store.find_one(&created.id), Some(&created));
}

#[test]
fn test_update_changes_exactly_patched_fields() {
    let mut store = RecipeStore::new();
    let created = store.create(NewRecipe {
        description: Some("Original".to_string()),
        ..recipe("Test Recipe", &["ingredient1", "ingredient2"], &["step 1"])
    });

    let patch = RecipePatch {
        title: Some("Updated Test Recipe".to_string()),
        ingredients: Some(vec![
            "ingredient1".to_string(),
            "ingredient2".to_string(),
            "ingredient3".to_string(),
        ]),
        ..Default::default()
    };

    let updated = store.update(&created.id, patch).expect("recipe exists");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Updated Test Recipe");
    assert_eq!(updated.ingredients.len(), 3);
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.instructions, created.instructions);
    assert_eq!(store.find_one(&created.id), Some(&updated));
}

#[test]
fn test_unknown_or_removed_ids_report_absence() {
    let mut store = RecipeStore::new();
    let created = store.create(recipe("Soup", &["salt"], &["boil"]));

    for id in ["non-existent-id", ""] {
        assert!(store.find_one(id).is_none());
        assert!(store.update(id, RecipePatch::default()).is_none());
        assert!(!store.remove(id));
    }

    assert!(store.remove(&created.id));
    assert!(store.find_one(&created.id).is_none());
    assert!(!store.remove(&created.id));
    assert!(
        store
            .update(
                &created.id,
                RecipePatch {
                    title: Some("Ghost".to_string()),
                    ..Default::default()
                }
            )
            .is_none()
    );
    assert!(store.is_empty());
}

#[test]
fn test_pages_cover_every_record_once_in_order() {
    let store = populated(25);

    let mut collected = Vec::new();
    let mut page = 1;
    loop {
        let chunk = store.find_all(page, 10);
        if chunk.is_empty() {
            break;
        }
        assert!(chunk.len() <= 10);
        collected.extend(chunk);
        page += 1;
    }

    assert_eq!(page, 4, "three non-empty pages then an empty one");
    let titles: Vec<_> = collected.iter().map(|r| r.title.clone()).collect();
    let expected: Vec<_> = (0..25).map(|i| format!("Test Recipe {i}")).collect();
    assert_eq!(titles, expected);
}

#[test]
fn test_paginated_lengths() {
    let store = populated(15);

    assert_eq!(store.find_all(1, 10).len(), 10);
    assert_eq!(store.find_all(2, 10).len(), 5);
    assert!(store.find_all(3, 10).is_empty());
    assert!(store.find_all(usize::MAX, usize::MAX).is_empty());
}

#[test]
fn test_search_returns_matching_subset_in_order() {
    let mut store = RecipeStore::new();
    let recipe1 = store.create(recipe("Recipe 1", &["ingredient1", "ingredient2"], &["a"]));
    let recipe2 = store.create(recipe("Recipe 2", &["ingredient2", "ingredient3"], &["b"]));
    let recipe3 = store.create(recipe("Recipe 3", &["ingredient3", "ingredient4"], &["c"]));

    let results = store.search_by_ingredient("ingredient2");
    assert_eq!(results, vec![recipe1.clone(), recipe2.clone()]);
    assert!(!results.contains(&recipe3));

    // Substring, case-insensitive
    let results = store.search_by_ingredient("INGREDIENT");
    assert_eq!(results, vec![recipe1, recipe2, recipe3]);
}

#[test]
fn test_search_without_matches_is_empty() {
    let mut store = RecipeStore::new();
    store.create(recipe("Seasoning", &["salt", "pepper"], &["mix"]));

    assert!(store.search_by_ingredient("xyz").is_empty());
}

#[test]
fn test_soup_example() {
    let mut store = RecipeStore::new();
    let input = validate::new_recipe(&json!({
        "title": "Soup",
        "ingredients": ["salt", "water"],
        "instructions": ["boil"],
    }))
    .expect("valid payload");

    let soup = store.create(input);
    assert!(!soup.id.is_empty());
    assert_eq!(soup.title, "Soup");
    assert_eq!(store.search_by_ingredient("SALT"), vec![soup]);
}

#[test]
fn test_independent_stores_do_not_share_state() {
    let mut a = RecipeStore::new();
    let b = RecipeStore::new();

    let created = a.create(recipe("Soup", &["salt"], &["boil"]));

    assert_eq!(a.len(), 1);
    assert!(b.is_empty());
    assert!(b.find_one(&created.id).is_none());
}

#[test]
fn test_seed_file_populates_store() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"[
            {{"title": "Soup", "ingredients": ["salt", "water"], "instructions": ["boil"]}},
            {{"title": "Salad", "ingredients": ["lettuce"], "instructions": ["toss"]}}
        ]"#
    )
    .expect("write seed");

    let store = RecipeStore::from_seed_file(file.path()).expect("seed loads");

    assert_eq!(store.len(), 2);
    let titles: Vec<_> = store.find_all(1, 10).into_iter().map(|r| r.title).collect();
    assert_eq!(titles, vec!["Soup", "Salad"]);
}

#[test]
fn test_bundled_seed_file_is_valid() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../seed/recipes.json");

    let store = RecipeStore::from_seed_file(&path).expect("bundled seed loads");

    assert_eq!(store.len(), 2);
    assert_eq!(store.search_by_ingredient("SALT").len(), 2);
    assert_eq!(store.search_by_ingredient("garlic").len(), 1);
}
