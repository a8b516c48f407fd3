//! List pages: filtering, pagination, dialogs and client-side joins

pub mod controller;
pub mod dialog;
pub mod filter;
pub mod form;
pub mod lookup;
pub mod pagination;
pub mod query;
pub mod resource;

use filter::FilterState;
use pagination::Pagination;

/// View state of one list page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListState {
    pub filters: FilterState,
    pub pagination: Pagination,
    pub filters_expanded: bool,
}

impl ListState {
    pub fn new(rows_per_page: usize) -> Self {
        Self {
            pagination: Pagination::new(rows_per_page),
            ..Self::default()
        }
    }

    /// Every filter change goes back to the first page
    pub fn update_filters(&mut self, change: impl FnOnce(&mut FilterState)) {
        change(&mut self.filters);
        self.pagination.reset();
    }

    pub fn set_sort(&mut self, key: &str) {
        let key = key.to_string();
        self.update_filters(|f| f.sort_by = if key.is_empty() { None } else { Some(key) });
    }

    pub fn clear_filters(&mut self) {
        self.update_filters(FilterState::clear);
    }

    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.pagination.set_rows_per_page(rows_per_page);
    }

    /// Seeds one categorical filter from the URL and opens the panel
    pub fn seed_filter(&mut self, key: &str, value: &str) {
        if value.is_empty() {
            return;
        }
        let value = value.to_string();
        self.update_filters(|f| f.set_selected(key, value));
        self.filters_expanded = true;
    }
}

#[cfg(test)]
mod tests {
    use super::filter::StatusFilter;
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Change {
        Search(String),
        Status(StatusFilter),
        Select(String),
        Sort(String),
        Clear,
        Rows(usize),
    }

    fn arb_change() -> impl Strategy<Value = Change> {
        prop_oneof![
            "[a-z]{0,3}".prop_map(Change::Search),
            prop_oneof![Just(StatusFilter::Todos), Just(StatusFilter::Ativos), Just(StatusFilter::Inativos)]
                .prop_map(Change::Status),
            "[A-C]{0,1}".prop_map(Change::Select),
            prop_oneof![Just("nome".to_string()), Just(String::new())].prop_map(Change::Sort),
            Just(Change::Clear),
            prop_oneof![Just(5usize), Just(10), Just(25), Just(50)].prop_map(Change::Rows),
        ]
    }

    #[test]
    fn test_seed_filter_expands_panel() {
        let mut state = ListState::new(10);
        state.pagination.page = 3;
        state.seed_filter("fornecedor_id", "7");
        assert!(state.filters_expanded);
        assert_eq!(state.filters.selected_value("fornecedor_id"), "7");
        assert_eq!(state.pagination.page, 0);

        let mut untouched = ListState::new(10);
        untouched.seed_filter("fornecedor_id", "");
        assert!(!untouched.filters_expanded);
    }

    proptest! {
        #[test]
        fn prop_any_change_resets_page(start_page in 1usize..20, change in arb_change()) {
            let mut state = ListState::new(10);
            state.pagination.page = start_page;
            match change {
                Change::Search(s) => state.update_filters(|f| f.search = s),
                Change::Status(s) => state.update_filters(|f| f.status = s),
                Change::Select(v) => state.update_filters(|f| f.set_selected("categoria", v)),
                Change::Sort(k) => state.set_sort(&k),
                Change::Clear => state.clear_filters(),
                Change::Rows(n) => state.set_rows_per_page(n),
            }
            prop_assert_eq!(state.pagination.page, 0);
        }
    }
}
