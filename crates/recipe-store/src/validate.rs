//! Validation of untrusted recipe payloads.
//!
//! Inputs arrive as `serde_json::Value` so that a wrongly-typed field is
//! reported as a violation next to every other problem, instead of aborting
//! deserialization at the first one.
//!
//! Rules:
//! - the body must be a JSON object
//! - `title`: non-blank string
//! - `description`: string or `null`
//! - `ingredients`, `instructions`: arrays with at least one item, every item a
//!   non-blank string
//!
//! On create, `title`, `ingredients` and `instructions` are required. On
//! update every field is optional. Unknown fields, `id` included, are ignored.

use serde_json::{Map, Value};

use crate::error::{ValidationError, Violation};
use crate::types::{NewRecipe, Pagination, RecipePatch};

/// Validate a creation payload
pub fn new_recipe(body: &Value) -> Result<NewRecipe, ValidationError> {
    let object = as_object(body)?;
    let mut violations = Vec::new();

    let title = required(object, "title", &mut violations, |field, value, violations| {
        text_field(field, value, violations, true)
    });
    let description = match object.get("description") {
        None | Some(Value::Null) => None,
        Some(value) => text_field("description", value, &mut violations, false),
    };
    let ingredients = required(object, "ingredients", &mut violations, list_field);
    let instructions = required(object, "instructions", &mut violations, list_field);

    match (title, ingredients, instructions) {
        (Some(title), Some(ingredients), Some(instructions)) if violations.is_empty() => {
            Ok(NewRecipe {
                title,
                description,
                ingredients,
                instructions,
            })
        }
        _ => Err(ValidationError::new(violations)),
    }
}

/// Validate an update payload
pub fn recipe_patch(body: &Value) -> Result<RecipePatch, ValidationError> {
    let object = as_object(body)?;
    let mut violations = Vec::new();

    let title = object
        .get("title")
        .and_then(|value| text_field("title", value, &mut violations, true));
    let description = match object.get("description") {
        None => None,
        Some(Value::Null) => Some(None),
        Some(value) => text_field("description", value, &mut violations, false).map(Some),
    };
    let ingredients = object
        .get("ingredients")
        .and_then(|value| list_field("ingredients", value, &mut violations));
    let instructions = object
        .get("instructions")
        .and_then(|value| list_field("instructions", value, &mut violations));

    if !violations.is_empty() {
        return Err(ValidationError::new(violations));
    }

    Ok(RecipePatch {
        title,
        description,
        ingredients,
        instructions,
    })
}

/// Validate raw `page`/`limit` query values, applying defaults for absent ones
pub fn pagination(page: Option<&str>, limit: Option<&str>) -> Result<Pagination, ValidationError> {
    let mut violations = Vec::new();

    let page = positive("page", page, Pagination::DEFAULT_PAGE, &mut violations);
    let limit = positive("limit", limit, Pagination::DEFAULT_LIMIT, &mut violations);

    if !violations.is_empty() {
        return Err(ValidationError::new(violations));
    }
    Ok(Pagination::new(page, limit))
}

fn as_object(body: &Value) -> Result<&Map<String, Value>, ValidationError> {
    body.as_object().ok_or_else(|| {
        ValidationError::new(vec![Violation::new(
            "body",
            format!("must be a JSON object, found {}", kind(body)),
        )])
    })
}

fn required<T>(
    object: &Map<String, Value>,
    field: &str,
    violations: &mut Vec<Violation>,
    check: impl Fn(&str, &Value, &mut Vec<Violation>) -> Option<T>,
) -> Option<T> {
    match object.get(field) {
        None | Some(Value::Null) => {
            violations.push(Violation::new(field, "is required"));
            None
        }
        Some(value) => check(field, value, violations),
    }
}

fn text_field(
    field: &str,
    value: &Value,
    violations: &mut Vec<Violation>,
    non_blank: bool,
) -> Option<String> {
    match value {
        Value::String(s) if non_blank && s.trim().is_empty() => {
            violations.push(Violation::new(field, "must not be blank"));
            None
        }
        Value::String(s) => Some(s.clone()),
        other => {
            violations.push(Violation::new(
                field,
                format!("must be a string, found {}", kind(other)),
            ));
            None
        }
    }
}

fn list_field(field: &str, value: &Value, violations: &mut Vec<Violation>) -> Option<Vec<String>> {
    let Value::Array(items) = value else {
        violations.push(Violation::new(
            field,
            format!("must be an array of strings, found {}", kind(value)),
        ));
        return None;
    };

    if items.is_empty() {
        violations.push(Violation::new(field, "must contain at least one item"));
        return None;
    }

    let before = violations.len();
    let list: Vec<String> = items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| text_field(&format!("{field}[{i}]"), item, violations, true))
        .collect();

    (violations.len() == before).then_some(list)
}

fn positive(
    field: &str,
    raw: Option<&str>,
    default: usize,
    violations: &mut Vec<Violation>,
) -> usize {
    let Some(raw) = raw else {
        return default;
    };

    match raw.trim().parse::<usize>() {
        Ok(n) if n >= 1 => n,
        Ok(_) => {
            violations.push(Violation::new(field, "must be at least 1"));
            default
        }
        Err(_) => {
            violations.push(Violation::new(
                field,
                format!("must be a positive integer, found {raw:?}"),
            ));
            default
        }
    }
}

/// JSON type name of `value`, for error messages
pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
