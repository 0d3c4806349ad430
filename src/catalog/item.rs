//! Catalog item types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Item rarity tier.
///
/// Variants are ordered from least to most rare, so `rarity >= Rarity::Rare`
/// selects rare and legendary items.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl Rarity {
    /// All rarities, least rare first.
    pub const ALL: [Rarity; 4] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Legendary,
    ];

    /// Lowercase identifier used in badges and catalog files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Uncommon => "uncommon",
            Self::Rare => "rare",
            Self::Legendary => "legendary",
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tradeable item in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique item ID.
    pub id: u32,
    /// Display name (e.g., "AWP | Dragon Lore").
    pub name: String,
    /// Display glyph.
    #[serde(default)]
    pub icon: String,
    /// Rarity tier.
    pub rarity: Rarity,
    /// Price in dollars.
    pub price: Decimal,
    /// Category (e.g., "Weapon", "Knife").
    pub category: String,
}

impl Item {
    /// Create a new item.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        icon: impl Into<String>,
        rarity: Rarity,
        price: Decimal,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            icon: icon.into(),
            rarity,
            price,
            category: category.into(),
        }
    }

    /// Case-insensitive substring match on the item name.
    pub fn matches_query(&self, query: &str) -> bool {
        query.is_empty() || self.name.to_lowercase().contains(&query.to_lowercase())
    }

    /// Check if the item belongs to a category (ASCII case-insensitive).
    pub fn is_category(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category)
    }
}
