//! Built-in demo catalog.

use super::{Item, Rarity};
use rust_decimal_macros::dec;

/// The items shipped with the application when no catalog file is configured.
pub fn builtin_items() -> Vec<Item> {
    vec![
        Item::new(1, "AWP | Dragon Lore", "🎯", Rarity::Legendary, dec!(4500), "Weapon"),
        Item::new(2, "Karambit | Fade", "🔪", Rarity::Legendary, dec!(3200), "Knife"),
        Item::new(3, "M4A4 | Howl", "🔫", Rarity::Rare, dec!(2800), "Weapon"),
        Item::new(4, "AK-47 | Redline", "⚡", Rarity::Rare, dec!(180), "Weapon"),
        Item::new(5, "Desert Eagle | Blaze", "🔥", Rarity::Uncommon, dec!(450), "Weapon"),
        Item::new(6, "Glock-18 | Fade", "💎", Rarity::Uncommon, dec!(320), "Weapon"),
    ]
}
