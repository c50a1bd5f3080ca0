use std::fmt;
use std::str::FromStr;

use crate::error::AppError;
use crate::model::Recipe;

/// The three multi-select filter categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterCategory {
    Ingredients,
    Appliances,
    Utensils,
}

impl FilterCategory {
    pub const ALL: [FilterCategory; 3] = [
        FilterCategory::Ingredients,
        FilterCategory::Appliances,
        FilterCategory::Utensils,
    ];

    /// Identifier used in markup and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterCategory::Ingredients => "ingredients",
            FilterCategory::Appliances => "appliances",
            FilterCategory::Utensils => "ustensils",
        }
    }

    /// Human-facing dropdown label
    pub fn label(&self) -> &'static str {
        match self {
            FilterCategory::Ingredients => "Ingrédients",
            FilterCategory::Appliances => "Appareils",
            FilterCategory::Utensils => "Ustensiles",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            FilterCategory::Ingredients => 0,
            FilterCategory::Appliances => 1,
            FilterCategory::Utensils => 2,
        }
    }

    /// Values this recipe carries for the category
    pub fn values_of<'a>(&self, recipe: &'a Recipe) -> Vec<&'a str> {
        match self {
            FilterCategory::Ingredients => recipe.ingredient_names().collect(),
            FilterCategory::Appliances if recipe.appliance.is_empty() => Vec::new(),
            FilterCategory::Appliances => vec![recipe.appliance.as_str()],
            FilterCategory::Utensils => recipe.utensils.iter().map(String::as_str).collect(),
        }
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ingredients" | "ingredient" => Ok(FilterCategory::Ingredients),
            "appliances" | "appliance" => Ok(FilterCategory::Appliances),
            "ustensils" | "ustensil" | "utensils" | "utensil" => Ok(FilterCategory::Utensils),
            _ => Err(AppError::UnknownCategory(s.to_string())),
        }
    }
}

/// A removable tag for one selected filter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub category: FilterCategory,
    pub value: String,
}

/// User selections plus the current search string.
///
/// Selected values keep their selection order and never repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub ingredients: Vec<String>,
    pub appliances: Vec<String>,
    pub utensils: Vec<String>,
    pub search_term: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self, category: FilterCategory) -> &[String] {
        match category {
            FilterCategory::Ingredients => &self.ingredients,
            FilterCategory::Appliances => &self.appliances,
            FilterCategory::Utensils => &self.utensils,
        }
    }

    fn selected_mut(&mut self, category: FilterCategory) -> &mut Vec<String> {
        match category {
            FilterCategory::Ingredients => &mut self.ingredients,
            FilterCategory::Appliances => &mut self.appliances,
            FilterCategory::Utensils => &mut self.utensils,
        }
    }

    pub fn is_selected(&self, category: FilterCategory, value: &str) -> bool {
        self.selected(category).iter().any(|v| v == value)
    }

    /// Returns false if the value was already selected
    pub fn select(&mut self, category: FilterCategory, value: &str) -> bool {
        if self.is_selected(category, value) {
            return false;
        }
        self.selected_mut(category).push(value.to_string());
        true
    }

    /// Returns false if the value was not selected
    pub fn deselect(&mut self, category: FilterCategory, value: &str) -> bool {
        let values = self.selected_mut(category);
        let before = values.len();
        values.retain(|v| v != value);
        values.len() != before
    }

    /// Drops every selected value, keeping the search term
    pub fn clear_filters(&mut self) {
        for category in FilterCategory::ALL {
            self.selected_mut(category).clear();
        }
    }

    pub fn has_filters(&self) -> bool {
        FilterCategory::ALL
            .iter()
            .any(|c| !self.selected(*c).is_empty())
    }

    pub fn tags(&self) -> Vec<Tag> {
        FilterCategory::ALL
            .iter()
            .flat_map(|category| {
                self.selected(*category).iter().map(|value| Tag {
                    category: *category,
                    value: value.clone(),
                })
            })
            .collect()
    }
}
