//! Query state owned by the pipeline's caller.
//!
//! [`QueryState`] holds the four user-controlled parameters. Setters for the
//! search term, category filter and sort key reset the page to 1 when the
//! value actually changes; the page setter touches nothing else.

use crate::domain::{CategoryFilter, SortKey};

/// User-controlled parameters driving which slice of the catalog is shown.
///
/// Created with defaults (`"", All, All, 1`) and mutated in place. Never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    search_term: String,
    category_filter: CategoryFilter,
    sort_key: SortKey,
    page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category_filter: CategoryFilter::All,
            sort_key: SortKey::All,
            page: 1,
        }
    }
}

impl QueryState {
    /// The effective (debounced) search term, as entered.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub const fn category_filter(&self) -> CategoryFilter {
        self.category_filter
    }

    #[must_use]
    pub const fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// Current 1-based page.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Replaces the search term. Returns `true` and resets the page if it changed.
    pub fn set_search_term(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if term == self.search_term {
            return false;
        }
        self.search_term = term;
        self.page = 1;
        true
    }

    /// Replaces the category filter. Returns `true` and resets the page if it changed.
    pub fn set_category_filter(&mut self, filter: CategoryFilter) -> bool {
        if filter == self.category_filter {
            return false;
        }
        self.category_filter = filter;
        self.page = 1;
        true
    }

    /// Replaces the sort key. Returns `true` and resets the page if it changed.
    pub fn set_sort_key(&mut self, key: SortKey) -> bool {
        if key == self.sort_key {
            return false;
        }
        self.sort_key = key;
        self.page = 1;
        true
    }

    /// Moves to `page`. Values below 1 are raised to 1; the upper bound is the
    /// caller's to enforce since it depends on the filtered result.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    fn on_page_three() -> QueryState {
        let mut query = QueryState::default();
        query.set_page(3);
        query
    }

    #[test]
    fn defaults() {
        let query = QueryState::default();
        assert_eq!(query.search_term(), "");
        assert_eq!(query.category_filter(), CategoryFilter::All);
        assert_eq!(query.sort_key(), SortKey::All);
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn changing_any_query_parameter_resets_page() {
        let mut query = on_page_three();
        assert!(query.set_search_term("doge"));
        assert_eq!(query.page(), 1);

        let mut query = on_page_three();
        assert!(query.set_category_filter(CategoryFilter::Only(Category::New)));
        assert_eq!(query.page(), 1);

        let mut query = on_page_three();
        assert!(query.set_sort_key(SortKey::Comments));
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn unchanged_values_keep_the_page() {
        let mut query = on_page_three();
        assert!(!query.set_search_term(""));
        assert!(!query.set_category_filter(CategoryFilter::All));
        assert!(!query.set_sort_key(SortKey::All));
        assert_eq!(query.page(), 3);
    }

    #[test]
    fn page_is_at_least_one() {
        let mut query = QueryState::default();
        query.set_page(0);
        assert_eq!(query.page(), 1);
    }
}
