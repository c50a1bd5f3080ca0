use std::fs;
use std::path::Path;

use log::{info, warn};
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::model::Recipe;

/// Load the static recipe list from a data file
pub fn load_recipes(path: &Path) -> Result<Vec<Recipe>> {
    let text = fs::read_to_string(path)?;
    let recipes = parse_recipes(&text)?;
    info!("Loaded {} recipes from {}", recipes.len(), path.display());
    Ok(recipes)
}

/// Parse recipe data.
///
/// Accepted shapes:
/// - a JSON array of recipes
/// - a JSON object with a `recipes` array
/// - a script assigning the array, e.g. `const recipes = [ ... ];`
pub fn parse_recipes(text: &str) -> Result<Vec<Recipe>> {
    let body = strip_assignment(text);
    let value: Value = serde_json::from_str(body)?;

    match value {
        Value::Array(_) => Ok(serde_json::from_value(value)?),
        Value::Object(mut map) => {
            let recipes = map.remove("recipes").ok_or_else(|| {
                AppError::InvalidData("object has no \"recipes\" field".to_string())
            })?;
            if !map.is_empty() {
                warn!("Ignoring {} extra top-level field(s) in recipe data", map.len());
            }
            Ok(serde_json::from_value(recipes)?)
        }
        other => Err(AppError::InvalidData(format!(
            "expected an array of recipes, found {}",
            json_kind(&other)
        ))),
    }
}

fn strip_assignment(text: &str) -> &str {
    let trimmed = text.trim();
    if trimmed.starts_with('[') || trimmed.starts_with('{') {
        return trimmed;
    }

    // `const recipes = [...];` or `export const recipes = [...]`
    match (trimmed.find('='), trimmed.rfind(']')) {
        (Some(eq), Some(end)) if eq < end => trimmed[eq + 1..=end].trim(),
        _ => trimmed,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
