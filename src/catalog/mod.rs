//! Item catalog: data model, providers and filtering.

mod builtin;
mod item;
mod provider;

pub use builtin::builtin_items;
pub use item::{Item, Rarity};
pub use provider::{
    CatalogProvider, JsonCatalog, StaticCatalog, load_validated, provider_for, validate_items,
};

/// Filter items by a case-insensitive substring of their name.
///
/// An empty query matches every item. Catalog order is preserved.
pub fn filter_by_name<'a>(items: &'a [Item], query: &str) -> Vec<&'a Item> {
    items.iter().filter(|i| i.matches_query(query)).collect()
}

/// Category tab of the inventory view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InventoryFilter {
    #[default]
    All,
    Weapons,
    Knives,
    Rare,
}

impl InventoryFilter {
    /// Tabs in display order.
    pub const ALL: [InventoryFilter; 4] = [
        InventoryFilter::All,
        InventoryFilter::Weapons,
        InventoryFilter::Knives,
        InventoryFilter::Rare,
    ];

    /// Tab label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "Все",
            Self::Weapons => "Оружие",
            Self::Knives => "Ножи",
            Self::Rare => "Редкие",
        }
    }

    /// Check whether an item belongs to this tab.
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::Weapons => item.is_category("Weapon"),
            Self::Knives => item.is_category("Knife"),
            Self::Rare => item.rarity >= Rarity::Rare,
        }
    }

    /// The tab after this one, wrapping around.
    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::Weapons,
            Self::Weapons => Self::Knives,
            Self::Knives => Self::Rare,
            Self::Rare => Self::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(items: &[&Item]) -> Vec<String> {
        items.iter().map(|i| i.name.clone()).collect()
    }

    #[test]
    fn test_filter_by_name_dragon() {
        let items = builtin_items();
        let found = filter_by_name(&items, "dragon");
        assert_eq!(names(&found), vec!["AWP | Dragon Lore".to_string()]);
    }

    #[test]
    fn test_filter_by_name_keeps_catalog_order() {
        let items = builtin_items();
        let found = filter_by_name(&items, "FADE");
        assert_eq!(
            names(&found),
            vec!["Karambit | Fade".to_string(), "Glock-18 | Fade".to_string()]
        );
    }

    #[test]
    fn test_filter_by_name_empty_query_matches_all() {
        let items = builtin_items();
        assert_eq!(filter_by_name(&items, "").len(), items.len());
        assert!(filter_by_name(&items, "no such skin").is_empty());
    }

    #[test]
    fn test_inventory_filters() {
        let items = builtin_items();
        let count = |f: InventoryFilter| items.iter().filter(|i| f.matches(i)).count();

        assert_eq!(count(InventoryFilter::All), 6);
        assert_eq!(count(InventoryFilter::Weapons), 5);
        assert_eq!(count(InventoryFilter::Knives), 1);
        // Dragon Lore, Karambit, Howl, Redline
        assert_eq!(count(InventoryFilter::Rare), 4);
    }

    #[test]
    fn test_inventory_filter_cycle_wraps() {
        let mut filter = InventoryFilter::All;
        for _ in 0..InventoryFilter::ALL.len() {
            filter = filter.next();
        }
        assert_eq!(filter, InventoryFilter::All);
    }
}
