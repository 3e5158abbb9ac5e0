//! Error types for the recipe-store crate.
//!
//! Two families live here:
//! - `ValidationError`: a payload broke one or more data-model rules. It keeps
//!   every violation so callers can report them all at once.
//! - `StoreError`: anything that can go wrong while loading recipes from
//!   outside the process (seed files).
//!
//! Absence of a record is not an error. Store lookups return `Option`/`bool`.

use serde::Serialize;
use thiserror::Error;

/// A single violated constraint on a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Field path, e.g. `title` or `ingredients[2]`
    pub field: String,
    pub reason: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// A payload failed validation.
///
/// Always carries at least one violation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Validation failed: {}", summarize(.violations))]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Names of the offending fields, in the order they were found
    pub fn fields(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.field.as_str()).collect()
    }
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("{} {}", v.field, v.reason))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors that can occur while loading recipes from a seed document
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error occurred while reading the seed file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The document is not valid JSON
    #[error("Malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// The document parsed, but is not an array of recipes
    #[error("Seed document must be a JSON array, found {found}")]
    NotAnArray { found: String },

    /// One entry of the seed document is not a valid recipe
    #[error("Seed entry {index} is invalid: {source}")]
    InvalidEntry {
        index: usize,
        #[source]
        source: ValidationError,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, StoreError>;
