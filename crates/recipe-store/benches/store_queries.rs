//! Benchmarks for store queries
//!
//! Run with: cargo bench --package recipe-store
//!
//! Both listing and searching are linear scans, so these track how they scale
//! with a few thousand records.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use recipe_store::{NewRecipe, RecipeStore};

fn populated_store(count: usize) -> RecipeStore {
    let mut store = RecipeStore::new();
    for i in 0..count {
        store.create(NewRecipe {
            title: format!("Recipe {i}"),
            description: None,
            ingredients: vec![
                format!("Ingredient {}", i % 97),
                "Salt".to_string(),
                "Olive Oil".to_string(),
            ],
            instructions: vec!["Mix".to_string(), "Bake".to_string()],
        });
    }
    store
}

fn bench_find_all(c: &mut Criterion) {
    let store = populated_store(5_000);

    c.bench_function("find_all_last_page", |b| {
        b.iter(|| {
            let page = store.find_all(black_box(500), black_box(10));
            black_box(page)
        })
    });
}

fn bench_search_by_ingredient(c: &mut Criterion) {
    let store = populated_store(5_000);

    c.bench_function("search_by_ingredient", |b| {
        b.iter(|| {
            let results = store.search_by_ingredient(black_box("ingredient 42"));
            black_box(results)
        })
    });
}

fn bench_find_one(c: &mut Criterion) {
    let store = populated_store(5_000);

    c.bench_function("find_one_last", |b| {
        b.iter(|| {
            let recipe = store.find_one(black_box("5000"));
            black_box(recipe.is_some())
        })
    });
}

criterion_group!(
    benches,
    bench_find_all,
    bench_search_by_ingredient,
    bench_find_one
);
criterion_main!(benches);
