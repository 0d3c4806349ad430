//! TUI widgets.

mod compare_panel;
mod help;
mod home;
mod inventory;
mod item_table;
mod notifications;
mod profile;
mod status_bar;
mod tab_bar;
mod trades;

pub use compare_panel::ComparePanel;
pub use help::{HelpPanel, KeyHints};
pub use home::HomeView;
pub use inventory::InventoryView;
pub use item_table::ItemTable;
pub use notifications::{render_error, render_notification};
pub use profile::ProfileView;
pub use status_bar::StatusBar;
pub use tab_bar::TabBar;
pub use trades::TradesView;

use crate::catalog::Rarity;
use ratatui::style::{Color, Modifier, Style};
use rust_decimal::Decimal;

/// Badge color for a rarity tier.
pub fn rarity_color(rarity: Rarity) -> Color {
    match rarity {
        Rarity::Common => Color::Gray,
        Rarity::Uncommon => Color::LightBlue,
        Rarity::Rare => Color::Magenta,
        Rarity::Legendary => Color::Yellow,
    }
}

/// Text style for a rarity badge.
pub fn rarity_style(rarity: Rarity) -> Style {
    let style = Style::default().fg(rarity_color(rarity));
    match rarity {
        Rarity::Common | Rarity::Uncommon => style,
        Rarity::Rare | Rarity::Legendary => style.add_modifier(Modifier::BOLD),
    }
}

/// Price as shown on cards, e.g. `$4500` or `$0.5`.
pub fn format_price(price: Decimal) -> String {
    format!("${}", price.normalize())
}

/// Shorten a string to `max_chars` characters, adding an ellipsis.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(dec!(4500)), "$4500");
        assert_eq!(format_price(dec!(0.50)), "$0.5");
        assert_eq!(format_price(dec!(233)), "$233");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("Karambit | Fade", 40), "Karambit | Fade");
        assert_eq!(truncate("Коллекционер", 5), "Колл…");
    }

    #[test]
    fn test_every_rarity_is_styled() {
        for rarity in Rarity::ALL {
            assert_ne!(rarity_style(rarity), Style::default());
        }
    }
}
