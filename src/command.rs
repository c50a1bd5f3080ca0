use log::debug;

use crate::dropdown::Dropdowns;
use crate::filter::{FilterCategory, FilterState};

/// User actions that change what is displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a value to a filter category
    SelectFilter {
        category: FilterCategory,
        value: String,
    },
    /// Remove a value from a filter category (tag close or dropdown removal)
    DeselectFilter {
        category: FilterCategory,
        value: String,
    },
    /// Replace the main search box contents
    SetSearchTerm(String),
    /// Drop every selected value in every category
    ClearFilters,
    /// Open a dropdown (closing the others) or close it if already open
    ToggleDropdown(FilterCategory),
    /// Click outside any dropdown
    CloseDropdowns,
    /// Replace a dropdown's local text query
    SetDropdownQuery {
        category: FilterCategory,
        query: String,
    },
}

impl Command {
    pub fn select(category: FilterCategory, value: impl Into<String>) -> Self {
        Command::SelectFilter {
            category,
            value: value.into(),
        }
    }

    pub fn deselect(category: FilterCategory, value: impl Into<String>) -> Self {
        Command::DeselectFilter {
            category,
            value: value.into(),
        }
    }

    pub fn search(term: impl Into<String>) -> Self {
        Command::SetSearchTerm(term.into())
    }

    /// Whether the command can change the visible recipe subset
    pub fn affects_results(&self) -> bool {
        matches!(
            self,
            Command::SelectFilter { .. }
                | Command::DeselectFilter { .. }
                | Command::SetSearchTerm(_)
                | Command::ClearFilters
        )
    }
}

/// Apply one command to the filter and dropdown state.
///
/// Returns true if anything changed.
pub fn apply(state: &mut FilterState, dropdowns: &mut Dropdowns, command: Command) -> bool {
    debug!("Applying {:?}", command);

    match command {
        Command::SelectFilter { category, value } => {
            // Picking an option resets that dropdown's local query
            dropdowns.clear_query(category);
            state.select(category, &value)
        }
        Command::DeselectFilter { category, value } => state.deselect(category, &value),
        Command::SetSearchTerm(term) => {
            if state.search_term == term {
                return false;
            }
            state.search_term = term;
            true
        }
        Command::ClearFilters => {
            let had_filters = state.has_filters();
            state.clear_filters();
            had_filters
        }
        Command::ToggleDropdown(category) => {
            dropdowns.toggle(category);
            true
        }
        Command::CloseDropdowns => {
            let was_open = dropdowns.open_category().is_some();
            dropdowns.close_all();
            was_open
        }
        Command::SetDropdownQuery { category, query } => {
            if dropdowns.query(category) == query {
                return false;
            }
            dropdowns.set_query(category, &query);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_then_deselect_restores_state() {
        let mut state = FilterState::new();
        let mut dropdowns = Dropdowns::new();
        let before = state.clone();

        assert!(apply(&mut state, &mut dropdowns, Command::select(FilterCategory::Ingredients, "Sucre")));
        assert!(apply(&mut state, &mut dropdowns, Command::deselect(FilterCategory::Ingredients, "Sucre")));

        assert_eq!(state, before);
    }

    #[test]
    fn test_duplicate_select_is_noop() {
        let mut state = FilterState::new();
        let mut dropdowns = Dropdowns::new();

        apply(&mut state, &mut dropdowns, Command::select(FilterCategory::Utensils, "fouet"));
        let changed = apply(&mut state, &mut dropdowns, Command::select(FilterCategory::Utensils, "fouet"));

        assert!(!changed);
        assert_eq!(state.utensils, vec!["fouet"]);
    }

    #[test]
    fn test_select_clears_dropdown_query() {
        let mut state = FilterState::new();
        let mut dropdowns = Dropdowns::new();

        apply(
            &mut state,
            &mut dropdowns,
            Command::SetDropdownQuery {
                category: FilterCategory::Ingredients,
                query: "suc".to_string(),
            },
        );
        apply(&mut state, &mut dropdowns, Command::select(FilterCategory::Ingredients, "Sucre"));

        assert_eq!(dropdowns.query(FilterCategory::Ingredients), "");
    }

    #[test]
    fn test_same_search_term_reports_no_change() {
        let mut state = FilterState::new();
        let mut dropdowns = Dropdowns::new();

        assert!(apply(&mut state, &mut dropdowns, Command::search("tarte")));
        assert!(!apply(&mut state, &mut dropdowns, Command::search("tarte")));
    }

    #[test]
    fn test_dropdown_commands() {
        let mut state = FilterState::new();
        let mut dropdowns = Dropdowns::new();

        assert!(!apply(&mut state, &mut dropdowns, Command::CloseDropdowns));

        apply(&mut state, &mut dropdowns, Command::ToggleDropdown(FilterCategory::Appliances));
        apply(&mut state, &mut dropdowns, Command::ToggleDropdown(FilterCategory::Utensils));
        assert_eq!(dropdowns.open_category(), Some(FilterCategory::Utensils));

        assert!(apply(&mut state, &mut dropdowns, Command::CloseDropdowns));
        assert_eq!(dropdowns.open_category(), None);
        assert_eq!(state, FilterState::new());
    }

    #[test]
    fn test_affects_results() {
        assert!(Command::search("x").affects_results());
        assert!(Command::ClearFilters.affects_results());
        assert!(!Command::CloseDropdowns.affects_results());
        assert!(!Command::ToggleDropdown(FilterCategory::Ingredients).affects_results());
    }
}
