use crate::filter::FilterCategory;

/// Open/closed state of the three filter dropdowns plus their local queries.
///
/// At most one dropdown is open at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dropdowns {
    open: Option<FilterCategory>,
    queries: [String; 3],
}

impl Dropdowns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_category(&self) -> Option<FilterCategory> {
        self.open
    }

    pub fn is_open(&self, category: FilterCategory) -> bool {
        self.open == Some(category)
    }

    /// Open the dropdown, closing any other one
    pub fn open(&mut self, category: FilterCategory) {
        self.open = Some(category);
    }

    /// Closed opens (closing the others), open closes
    pub fn toggle(&mut self, category: FilterCategory) {
        if self.is_open(category) {
            self.open = None;
        } else {
            self.open(category);
        }
    }

    pub fn close_all(&mut self) {
        self.open = None;
    }

    pub fn query(&self, category: FilterCategory) -> &str {
        &self.queries[category.index()]
    }

    pub fn set_query(&mut self, category: FilterCategory, query: &str) {
        self.queries[category.index()] = query.to_string();
    }

    pub fn clear_query(&mut self, category: FilterCategory) {
        self.queries[category.index()].clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_cycle() {
        let mut dropdowns = Dropdowns::new();
        assert_eq!(dropdowns.open_category(), None);

        dropdowns.toggle(FilterCategory::Ingredients);
        assert!(dropdowns.is_open(FilterCategory::Ingredients));

        dropdowns.toggle(FilterCategory::Ingredients);
        assert_eq!(dropdowns.open_category(), None);
    }

    #[test]
    fn test_only_one_open() {
        let mut dropdowns = Dropdowns::new();
        dropdowns.toggle(FilterCategory::Ingredients);
        dropdowns.toggle(FilterCategory::Utensils);

        assert!(!dropdowns.is_open(FilterCategory::Ingredients));
        assert!(dropdowns.is_open(FilterCategory::Utensils));

        dropdowns.close_all();
        assert_eq!(dropdowns.open_category(), None);
    }

    #[test]
    fn test_queries_are_per_category() {
        let mut dropdowns = Dropdowns::new();
        dropdowns.set_query(FilterCategory::Appliances, "fou");

        assert_eq!(dropdowns.query(FilterCategory::Appliances), "fou");
        assert_eq!(dropdowns.query(FilterCategory::Ingredients), "");

        dropdowns.close_all();
        assert_eq!(dropdowns.query(FilterCategory::Appliances), "fou");

        dropdowns.clear_query(FilterCategory::Appliances);
        assert_eq!(dropdowns.query(FilterCategory::Appliances), "");
    }
}
