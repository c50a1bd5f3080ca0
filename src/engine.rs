//! Predicate engine: maps the recipe list and a filter state to the visible subset.

use log::debug;

use crate::filter::FilterState;
use crate::model::Recipe;

/// Recipes matching both the search term and every selected filter value,
/// in their original order.
pub fn compute_visible<'a>(
    recipes: &'a [Recipe],
    state: &FilterState,
    min_search_len: usize,
) -> Vec<&'a Recipe> {
    let needle = effective_search_term(&state.search_term, min_search_len);

    let visible: Vec<&Recipe> = recipes
        .iter()
        .filter(|recipe| matches_with(recipe, state, needle.as_deref()))
        .collect();

    debug!(
        "{} of {} recipes visible (search: {:?})",
        visible.len(),
        recipes.len(),
        needle
    );
    visible
}

/// Whether a single recipe belongs to the visible subset
pub fn matches(recipe: &Recipe, state: &FilterState, min_search_len: usize) -> bool {
    let needle = effective_search_term(&state.search_term, min_search_len);
    matches_with(recipe, state, needle.as_deref())
}

/// Lowercased, trimmed search term, or `None` when it is too short to filter
pub fn effective_search_term(term: &str, min_search_len: usize) -> Option<String> {
    let term = term.trim();
    if term.is_empty() || term.chars().count() < min_search_len {
        return None;
    }
    Some(term.to_lowercase())
}

fn matches_with(recipe: &Recipe, state: &FilterState, needle: Option<&str>) -> bool {
    matches_search(recipe, needle)
        && matches_ingredients(recipe, &state.ingredients)
        && matches_appliances(recipe, &state.appliances)
        && matches_utensils(recipe, &state.utensils)
}

fn matches_search(recipe: &Recipe, needle: Option<&str>) -> bool {
    let Some(needle) = needle else {
        return true;
    };

    recipe.name.to_lowercase().contains(needle)
        || recipe.description.to_lowercase().contains(needle)
        || recipe
            .ingredient_names()
            .any(|name| name.to_lowercase().contains(needle))
}

fn matches_ingredients(recipe: &Recipe, selected: &[String]) -> bool {
    selected.iter().all(|name| recipe.has_ingredient(name))
}

// A recipe has one appliance, so two distinct selections can never match.
fn matches_appliances(recipe: &Recipe, selected: &[String]) -> bool {
    selected.iter().all(|name| recipe.appliance == *name)
}

fn matches_utensils(recipe: &Recipe, selected: &[String]) -> bool {
    selected.iter().all(|name| recipe.has_utensil(name))
}
