//! UI rendering using ratatui.
//!
//! This module contains all TUI components and rendering logic.

mod layout;
mod widgets;

pub use layout::Layout;
pub use widgets::{
    ComparePanel, HelpPanel, HomeView, InventoryView, ItemTable, KeyHints, ProfileView, StatusBar,
    TabBar, TradesView,
};

use crate::config::Config;
use crate::state::{Store, View};
use ratatui::Frame;

/// Main UI renderer.
pub struct Ui;

impl Ui {
    /// Render the entire UI.
    pub fn render(frame: &mut Frame, store: &Store, config: &Config) {
        let layout = Layout::new(
            frame.area(),
            &config.ui,
            ComparePanel::height(&store.compare),
        );

        if config.ui.show_status_bar {
            StatusBar::render(frame, layout.status_area, store);
        }

        TabBar::render(frame, layout.tab_area, store);

        match store.app.current_view {
            View::Home => HomeView::render(frame, layout.main_area, store),
            View::Inventory => {
                InventoryView::render(frame, layout.main_area, store, &config.keybindings)
            }
            View::Trades => TradesView::render(frame, layout.main_area, store),
            View::Profile => ProfileView::render(frame, layout.main_area, store),
        }

        // The panel stays docked across every view.
        ComparePanel::render(
            frame,
            layout.compare_area,
            &store.compare,
            &config.keybindings,
        );

        if config.ui.show_help_bar {
            KeyHints::render(frame, layout.hint_area, store, &config.keybindings);
        }

        if store.app.show_help {
            HelpPanel::render(frame, frame.area(), &config.keybindings);
        }

        if let Some(notification) = &store.app.notification {
            widgets::render_notification(frame, layout.notification_area, notification);
        }

        if let Some(error) = &store.app.error {
            widgets::render_error(frame, layout.notification_area, error);
        }
    }
}
