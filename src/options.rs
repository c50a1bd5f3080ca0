use std::collections::BTreeSet;

use crate::filter::{FilterCategory, FilterState};
use crate::model::Recipe;

/// Distinct values of `category` across the subset, sorted, without the
/// values already selected in that category.
pub fn unique_values(
    subset: &[&Recipe],
    category: FilterCategory,
    state: &FilterState,
) -> BTreeSet<String> {
    subset
        .iter()
        .flat_map(|recipe| category.values_of(*recipe))
        .filter(|value| !state.is_selected(category, value))
        .map(str::to_string)
        .collect()
}

/// Narrow a dropdown's options by its local text query (case-insensitive substring)
pub fn filter_by_query<'a, I>(values: I, query: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let query = query.trim().to_lowercase();
    values
        .into_iter()
        .filter(|value| query.is_empty() || value.to_lowercase().contains(&query))
        .cloned()
        .collect()
}
