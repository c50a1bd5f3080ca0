//! One browsing session: the recipe list, the user's state, and the
//! re-evaluation pass that derives every view from them.

use log::{debug, warn};

use crate::command::{self, Command};
use crate::config::Settings;
use crate::dropdown::Dropdowns;
use crate::engine::compute_visible;
use crate::filter::{FilterCategory, FilterState, Tag};
use crate::model::Recipe;
use crate::options::{filter_by_query, unique_values};

/// Everything a dropdown needs to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownView {
    pub category: FilterCategory,
    pub open: bool,
    pub query: String,
    /// Already selected values, shown first
    pub selected: Vec<String>,
    /// Remaining values for the visible subset, narrowed by `query`
    pub available: Vec<String>,
}

/// Derived state after a re-evaluation pass
#[derive(Debug, Clone)]
pub struct View<'a> {
    pub search_term: String,
    pub visible: Vec<&'a Recipe>,
    pub dropdowns: Vec<DropdownView>,
    pub tags: Vec<Tag>,
}

impl View<'_> {
    pub fn count(&self) -> usize {
        self.visible.len()
    }

    pub fn dropdown(&self, category: FilterCategory) -> Option<&DropdownView> {
        self.dropdowns.iter().find(|d| d.category == category)
    }
}

pub struct Session {
    recipes: Vec<Recipe>,
    state: FilterState,
    dropdowns: Dropdowns,
    settings: Settings,
}

impl Session {
    pub fn new(recipes: Vec<Recipe>, settings: Settings) -> Self {
        Self {
            recipes,
            state: FilterState::new(),
            dropdowns: Dropdowns::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Apply a command, then recompute every view from scratch
    pub fn dispatch(&mut self, command: Command) -> View<'_> {
        let affects_results = command.affects_results();
        let appliances_before = self.state.appliances.len();

        let changed = command::apply(&mut self.state, &mut self.dropdowns, command);
        if !changed {
            debug!("Command left state unchanged");
        }
        if affects_results {
            self.report_conflicts(appliances_before);
        }
        self.view()
    }

    /// Apply several commands, re-evaluating once at the end
    pub fn dispatch_all<I>(&mut self, commands: I) -> View<'_>
    where
        I: IntoIterator<Item = Command>,
    {
        let appliances_before = self.state.appliances.len();
        for command in commands {
            command::apply(&mut self.state, &mut self.dropdowns, command);
        }
        self.report_conflicts(appliances_before);
        self.view()
    }

    // Warns once per change of a conflicting appliance selection.
    fn report_conflicts(&self, appliances_before: usize) -> bool {
        let appliances = &self.state.appliances;
        if appliances.len() < 2 || appliances.len() == appliances_before {
            return false;
        }
        warn!(
            "{} appliances selected ({}); no recipe can match",
            appliances.len(),
            appliances.join(", ")
        );
        true
    }

    pub fn view(&self) -> View<'_> {
        let visible = compute_visible(&self.recipes, &self.state, self.settings.min_search_len);

        let dropdowns = FilterCategory::ALL
            .iter()
            .map(|category| {
                let remaining = unique_values(&visible, *category, &self.state);
                let query = self.dropdowns.query(*category);
                DropdownView {
                    category: *category,
                    open: self.dropdowns.is_open(*category),
                    query: query.to_string(),
                    selected: self.state.selected(*category).to_vec(),
                    available: filter_by_query(&remaining, query),
                }
            })
            .collect();

        View {
            search_term: self.state.search_term.clone(),
            visible,
            dropdowns,
            tags: self.state.tags(),
        }
    }
}
