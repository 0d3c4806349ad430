//! Catalog browsing state.

use super::View;
use crate::catalog::{InventoryFilter, Item, filter_by_name};
use chrono::{DateTime, Utc};

/// State for the item catalog and the lists that show it.
#[derive(Debug, Default)]
pub struct CatalogState {
    /// All loaded items, in catalog order.
    pub items: Vec<Item>,
    /// Inventory search query.
    pub search_query: String,
    /// Inventory category tab.
    pub filter: InventoryFilter,
    /// Highlighted row in the home list.
    pub home_index: Option<usize>,
    /// Highlighted row in the inventory list.
    pub inventory_index: Option<usize>,
    /// Whether the catalog is loading.
    pub loading: bool,
    /// Last load timestamp.
    pub last_updated: Option<DateTime<Utc>>,
}

impl CatalogState {
    /// Items matching the search query, ignoring the category tab.
    pub fn search_results(&self) -> Vec<&Item> {
        filter_by_name(&self.items, &self.search_query)
    }

    /// Items shown in the inventory: search query, then category tab.
    pub fn inventory_items(&self) -> Vec<&Item> {
        self.search_results()
            .into_iter()
            .filter(|i| self.filter.matches(i))
            .collect()
    }

    /// Items listed in a view.
    pub fn items_for(&self, view: View) -> Vec<&Item> {
        match view {
            View::Home => self.items.iter().collect(),
            View::Inventory => self.inventory_items(),
            View::Trades | View::Profile => Vec::new(),
        }
    }

    /// Highlighted row of a view.
    pub fn selected_index(&self, view: View) -> Option<usize> {
        match view {
            View::Home => self.home_index,
            View::Inventory => self.inventory_index,
            View::Trades | View::Profile => None,
        }
    }

    /// Set the highlighted row of a view, clamped to the list length.
    pub fn select(&mut self, view: View, index: usize) {
        let len = self.items_for(view).len();
        let selected = if len == 0 {
            None
        } else {
            Some(index.min(len - 1))
        };
        match view {
            View::Home => self.home_index = selected,
            View::Inventory => self.inventory_index = selected,
            View::Trades | View::Profile => {}
        }
    }

    /// Highlighted item of a view.
    pub fn selected_item(&self, view: View) -> Option<&Item> {
        let index = self.selected_index(view)?;
        self.items_for(view).get(index).copied()
    }

    /// Re-clamp both list selections after the lists changed.
    pub fn clamp_selection(&mut self) {
        for view in [View::Home, View::Inventory] {
            let index = self.selected_index(view).unwrap_or(0);
            self.select(view, index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_items;

    fn loaded() -> CatalogState {
        let mut state = CatalogState {
            items: builtin_items(),
            ..Default::default()
        };
        state.clamp_selection();
        state
    }

    #[test]
    fn test_clamp_selects_first_row() {
        let state = loaded();
        assert_eq!(state.home_index, Some(0));
        assert_eq!(state.inventory_index, Some(0));
        assert_eq!(state.selected_item(View::Home).unwrap().id, 1);
    }

    #[test]
    fn test_search_and_filter_compose() {
        let mut state = loaded();
        state.search_query = "fade".to_string();
        assert_eq!(state.inventory_items().len(), 2);

        state.filter = InventoryFilter::Knives;
        let items = state.inventory_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Karambit | Fade");
        // The "all" count ignores the tab.
        assert_eq!(state.search_results().len(), 2);
    }

    #[test]
    fn test_selection_clamped_when_list_shrinks() {
        let mut state = loaded();
        state.select(View::Inventory, 5);
        assert_eq!(state.inventory_index, Some(5));

        state.search_query = "redline".to_string();
        state.clamp_selection();
        assert_eq!(state.inventory_index, Some(0));
        assert_eq!(state.selected_item(View::Inventory).unwrap().name, "AK-47 | Redline");

        state.search_query = "nothing matches".to_string();
        state.clamp_selection();
        assert_eq!(state.inventory_index, None);
        assert!(state.selected_item(View::Inventory).is_none());
        // Home is unaffected by the search.
        assert_eq!(state.home_index, Some(0));
    }

    #[test]
    fn test_non_list_views_have_no_items() {
        let state = loaded();
        assert!(state.items_for(View::Trades).is_empty());
        assert_eq!(state.selected_index(View::Profile), None);
    }
}
