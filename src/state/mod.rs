//! State management for SteamTrade.
//!
//! This module provides centralized state management with a unidirectional
//! data flow pattern inspired by Redux/Elm architecture.

mod app_state;
mod catalog_state;
mod profile_state;
mod trade_state;

pub use app_state::{AppState, InputMode, View};
pub use catalog_state::CatalogState;
pub use profile_state::{ProfileState, format_usd};
pub use trade_state::{
    TradeKind, TradeOffer, TradeRecord, TradeState, TradeStatus, format_ago,
};

use crate::catalog::{InventoryFilter, Item};
use crate::compare::{CompareSession, MAX_COMPARE_ITEMS, ToggleOutcome};
use crate::error::Result;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Actions that can be dispatched to modify state.
#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    SetView(View),
    NextView,
    PrevView,
    SetInputMode(InputMode),

    // Catalog actions
    LoadCatalog,
    CatalogLoaded(Vec<Item>),
    SearchInput(char),
    SearchBackspace,
    SearchCursorLeft,
    SearchCursorRight,
    CancelSearch,
    SetInventoryFilter(InventoryFilter),
    NextInventoryFilter,

    // Comparison actions
    ToggleCompare,
    RemoveFromCompare(usize),
    ClearCompare,
    ToggleCompareSummary,

    // UI actions
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    GoToTop,
    GoToBottom,
    ToggleHelp,
    ShowNotification(Notification),
    DismissNotification,

    // Error handling
    SetError(String),
    ClearError,


    // Quit
    Quit,
}

/// A notification to display to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub duration_secs: u64,
    pub created_at: Instant,
}

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Warning,
}

impl Notification {
    fn new(message: impl Into<String>, level: NotificationLevel, duration_secs: u64) -> Self {
        Self {
            message: message.into(),
            level,
            duration_secs,
            created_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Success, 3)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Warning, 5)
    }

    /// Whether the notification has been shown long enough.
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= Duration::from_secs(self.duration_secs)
    }
}

/// The global state store.
#[derive(Debug)]
pub struct Store {
    /// Application state.
    pub app: AppState,
    /// Catalog state.
    pub catalog: CatalogState,
    /// Comparison session.
    pub compare: CompareSession,
    /// Trades view state.
    pub trades: TradeState,
    /// Profile view state.
    pub profile: ProfileState,
    /// Action sender for dispatching actions.
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Store {
    /// Create a new store with the given action sender.
    pub fn new(action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self {
            app: AppState::default(),
            catalog: CatalogState::default(),
            compare: CompareSession::new(),
            trades: TradeState::demo(chrono::Utc::now()),
            profile: ProfileState::default(),
            action_tx,
        }
    }

    /// Dispatch an action to the store.
    pub fn dispatch(&self, action: Action) -> Result<()> {
        self.action_tx
            .send(action)
            .map_err(|e| crate::Error::channel(e.to_string()))
    }

    /// Apply an action to update state.
    pub fn reduce(&mut self, action: Action) {
        match action {
            // Navigation
            Action::SetView(view) => self.app.current_view = view,
            Action::NextView => self.app.current_view = self.app.current_view.next(),
            Action::PrevView => self.app.current_view = self.app.current_view.prev(),
            Action::SetInputMode(mode) => {
                if mode == InputMode::Search {
                    self.app.current_view = View::Inventory;
                }
                self.app.input_mode = mode;
            }

            // Catalog actions
            Action::LoadCatalog => self.catalog.loading = true,
            Action::CatalogLoaded(items) => {
                self.catalog.items = items;
                self.catalog.loading = false;
                self.catalog.last_updated = Some(chrono::Utc::now());
                self.catalog.clamp_selection();
                // Selected items may no longer exist in the new catalog.
                self.compare.reset();
            }
            Action::SearchInput(c) => {
                self.app.push_char(c);
                self.sync_search();
            }
            Action::SearchBackspace => {
                self.app.pop_char();
                self.sync_search();
            }
            Action::SearchCursorLeft => self.app.cursor_left(),
            Action::SearchCursorRight => self.app.cursor_right(),
            Action::CancelSearch => {
                self.app.clear_input();
                self.app.input_mode = InputMode::Normal;
                self.sync_search();
            }
            Action::SetInventoryFilter(filter) => {
                self.catalog.filter = filter;
                self.catalog.clamp_selection();
            }
            Action::NextInventoryFilter => {
                self.catalog.filter = self.catalog.filter.next();
                self.catalog.clamp_selection();
            }

            // Comparison actions
            Action::ToggleCompare => self.toggle_compare(),
            Action::RemoveFromCompare(slot) => {
                self.compare.remove_slot(slot);
            }
            Action::ClearCompare => self.compare.clear(),
            Action::ToggleCompareSummary => {
                self.compare.toggle_summary();
            }

            // UI actions
            Action::ScrollUp => self.scroll(-1),
            Action::ScrollDown => self.scroll(1),
            Action::PageUp => self.scroll(-10),
            Action::PageDown => self.scroll(10),
            Action::GoToTop => self.go_to_top(),
            Action::GoToBottom => self.go_to_bottom(),
            Action::ToggleHelp => self.app.show_help = !self.app.show_help,
            Action::ShowNotification(notification) => {
                self.app.notification = Some(notification);
            }
            Action::DismissNotification => {
                self.app.notification = None;
            }

            // Error handling
            Action::SetError(error) => {
                self.app.error = Some(error);
                self.catalog.loading = false;
            }
            Action::ClearError => {
                self.app.error = None;
            }

            // Quit
            Action::Quit => {
                self.app.should_quit = true;
            }
        }
    }

    fn sync_search(&mut self) {
        self.catalog.search_query = self.app.input_buffer.clone();
        self.catalog.clamp_selection();
    }

    fn toggle_compare(&mut self) {
        let view = self.app.current_view;
        let Some(item) = self.catalog.selected_item(view).cloned() else {
            return;
        };

        // A full comparison ignores new items without telling the user.
        if self.compare.toggle(&item) == ToggleOutcome::Saturated {
            tracing::debug!(
                item_id = item.id,
                capacity = MAX_COMPARE_ITEMS,
                "comparison full, item not added"
            );
        }
    }

    fn scroll(&mut self, delta: i32) {
        let view = self.app.current_view;
        if !view.has_item_list() {
            return;
        }
        let current = self.catalog.selected_index(view).unwrap_or(0) as i32;
        let new_index = (current + delta).max(0) as usize;
        self.catalog.select(view, new_index);
    }

    fn go_to_top(&mut self) {
        let view = self.app.current_view;
        self.catalog.select(view, 0);
    }

    fn go_to_bottom(&mut self) {
        let view = self.app.current_view;
        let max = self.catalog.items_for(view).len().saturating_sub(1);
        self.catalog.select(view, max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_items;
    use crate::compare::VisibilityGate;
    use pretty_assertions::assert_eq;

    fn store() -> Store {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut store = Store::new(tx);
        store.reduce(Action::CatalogLoaded(builtin_items()));
        store
    }

    fn selected_ids(store: &Store) -> Vec<u32> {
        store
            .compare
            .selection()
            .items()
            .iter()
            .map(|i| i.id)
            .collect()
    }

    #[test]
    fn test_toggle_compare_uses_highlighted_item() {
        let mut store = store();
        store.reduce(Action::ToggleCompare);
        store.reduce(Action::ScrollDown);
        store.reduce(Action::ToggleCompare);
        assert_eq!(selected_ids(&store), vec![1, 2]);

        store.reduce(Action::ToggleCompare);
        assert_eq!(selected_ids(&store), vec![1]);
    }

    #[test]
    fn test_fourth_item_is_silently_ignored() {
        let mut store = store();
        for _ in 0..4 {
            store.reduce(Action::ToggleCompare);
            store.reduce(Action::ScrollDown);
        }
        assert_eq!(selected_ids(&store), vec![1, 2, 3]);
        assert!(store.app.notification.is_none());
        assert!(store.app.error.is_none());
    }

    #[test]
    fn test_clear_compare_hides_summary() {
        let mut store = store();
        store.reduce(Action::ToggleCompare);
        store.reduce(Action::ScrollDown);
        store.reduce(Action::ToggleCompare);
        store.reduce(Action::ToggleCompareSummary);
        assert!(store.compare.summary_visible());

        store.reduce(Action::ClearCompare);
        assert!(store.compare.is_empty());
        assert_eq!(store.compare.gate(), VisibilityGate::Hidden);
    }

    #[test]
    fn test_remove_from_compare_slot_keeps_gate() {
        let mut store = store();
        store.reduce(Action::ToggleCompare);
        store.reduce(Action::ScrollDown);
        store.reduce(Action::ToggleCompare);
        store.reduce(Action::ToggleCompareSummary);

        store.reduce(Action::RemoveFromCompare(0));
        assert_eq!(selected_ids(&store), vec![2]);
        assert_eq!(store.compare.gate(), VisibilityGate::Shown);
        assert!(!store.compare.summary_visible());
    }

    #[test]
    fn test_search_input_filters_inventory() {
        let mut store = store();
        store.reduce(Action::SetInputMode(InputMode::Search));
        assert_eq!(store.app.current_view, View::Inventory);

        for c in "DRAGON".chars() {
            store.reduce(Action::SearchInput(c));
        }
        let names: Vec<_> = store
            .catalog
            .inventory_items()
            .iter()
            .map(|i| i.name.clone())
            .collect();
        assert_eq!(names, vec!["AWP | Dragon Lore".to_string()]);

        store.reduce(Action::CancelSearch);
        assert_eq!(store.catalog.inventory_items().len(), 6);
        assert_eq!(store.app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_compare_from_filtered_inventory() {
        let mut store = store();
        store.reduce(Action::SetView(View::Inventory));
        store.reduce(Action::SetInventoryFilter(InventoryFilter::Knives));
        store.reduce(Action::ToggleCompare);
        assert_eq!(selected_ids(&store), vec![2]);
    }

    #[test]
    fn test_toggle_compare_with_empty_list_is_noop() {
        let mut store = store();
        store.reduce(Action::SetView(View::Inventory));
        store.reduce(Action::SearchInput('z'));
        store.reduce(Action::SearchInput('z'));
        store.reduce(Action::ToggleCompare);
        assert!(store.compare.is_empty());
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut store = store();
        store.reduce(Action::ScrollUp);
        assert_eq!(store.catalog.home_index, Some(0));
        store.reduce(Action::PageDown);
        assert_eq!(store.catalog.home_index, Some(5));
        store.reduce(Action::GoToTop);
        assert_eq!(store.catalog.home_index, Some(0));
        store.reduce(Action::GoToBottom);
        assert_eq!(store.catalog.home_index, Some(5));
    }

    #[test]
    fn test_catalog_reload_resets_comparison() {
        let mut store = store();
        store.reduce(Action::ToggleCompare);
        store.reduce(Action::CatalogLoaded(builtin_items()));
        assert!(store.compare.is_empty());
        assert!(!store.catalog.loading);
        assert!(store.catalog.last_updated.is_some());
    }

    #[test]
    fn test_view_navigation() {
        let mut store = store();
        store.reduce(Action::NextView);
        assert_eq!(store.app.current_view, View::Inventory);
        store.reduce(Action::PrevView);
        store.reduce(Action::PrevView);
        assert_eq!(store.app.current_view, View::Profile);
        // No list on the profile tab.
        store.reduce(Action::ToggleCompare);
        assert!(store.compare.is_empty());
    }

    #[test]
    fn test_summary_toggle_below_two_items_is_refused() {
        let mut store = store();
        store.reduce(Action::ToggleCompare);
        store.reduce(Action::ToggleCompareSummary);
        assert_eq!(store.compare.gate(), VisibilityGate::Hidden);
    }

    #[test]
    fn test_notification_expiry() {
        let notification = Notification::success("ok");
        assert!(!notification.is_expired(notification.created_at));
        assert!(notification.is_expired(notification.created_at + Duration::from_secs(3)));
    }

    #[test]
    fn test_dispatch_sends_on_channel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let store = Store::new(tx);
        store.dispatch(Action::LoadCatalog).unwrap();
        assert!(matches!(rx.try_recv(), Ok(Action::LoadCatalog)));
    }
}
