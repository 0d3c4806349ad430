//! Event handler for processing input events.

use super::{InputEvent, Key, KeyBinding};
use crate::config::{KeyBindings, UiConfig};
use crate::error::{Error, Result};
use crate::state::{Action, InputMode, Store, View};
use crossterm::event::{
    self, Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// Parsed key bindings.
#[derive(Debug, Clone)]
pub struct KeyMap {
    quit: KeyBinding,
    help: KeyBinding,
    up: KeyBinding,
    down: KeyBinding,
    back: KeyBinding,
    refresh: KeyBinding,
    search: KeyBinding,
    next_tab: KeyBinding,
    views: [(KeyBinding, View); 4],
    toggle_compare: KeyBinding,
    clear_compare: KeyBinding,
    toggle_summary: KeyBinding,
    next_filter: KeyBinding,
    remove_slot: [KeyBinding; 3],
}

impl KeyMap {
    /// Parse configured bindings, failing on the first invalid one.
    pub fn from_config(bindings: &KeyBindings) -> Result<Self> {
        let parse = |name: &str, value: &str| -> Result<KeyBinding> {
            value
                .parse::<KeyBinding>()
                .map_err(|e: Error| Error::config(format!("keybindings.{name}: {e}")))
        };

        Ok(Self {
            quit: parse("quit", &bindings.quit)?,
            help: parse("help", &bindings.help)?,
            up: parse("up", &bindings.up)?,
            down: parse("down", &bindings.down)?,
            back: parse("back", &bindings.back)?,
            refresh: parse("refresh", &bindings.refresh)?,
            search: parse("search", &bindings.search)?,
            next_tab: parse("next_tab", &bindings.next_tab)?,
            views: [
                (parse("home", &bindings.home)?, View::Home),
                (parse("inventory", &bindings.inventory)?, View::Inventory),
                (parse("trades", &bindings.trades)?, View::Trades),
                (parse("profile", &bindings.profile)?, View::Profile),
            ],
            toggle_compare: parse("toggle_compare", &bindings.toggle_compare)?,
            clear_compare: parse("clear_compare", &bindings.clear_compare)?,
            toggle_summary: parse("toggle_summary", &bindings.toggle_summary)?,
            next_filter: parse("next_filter", &bindings.next_filter)?,
            remove_slot: [
                parse("remove_slot[0]", &bindings.remove_slot[0])?,
                parse("remove_slot[1]", &bindings.remove_slot[1])?,
                parse("remove_slot[2]", &bindings.remove_slot[2])?,
            ],
        })
    }
}

/// Handles input events and produces actions.
pub struct EventHandler {
    /// Key bindings.
    keymap: KeyMap,
    /// How long to wait for input before yielding.
    poll_timeout: Duration,
    /// Whether mouse events are translated.
    mouse_support: bool,
    /// Store reference for state-aware handling.
    store_snapshot: Option<StoreSnapshot>,
}

/// Snapshot of relevant store state for event handling.
#[derive(Debug, Clone, Default)]
struct StoreSnapshot {
    input_mode: InputMode,
    current_view: View,
    show_help: bool,
    has_error: bool,
    has_notification: bool,
    compare_len: usize,
    can_toggle_summary: bool,
}

impl EventHandler {
    /// Create a new event handler.
    pub fn new(keymap: KeyMap, ui: &UiConfig) -> Self {
        Self {
            keymap,
            poll_timeout: Duration::from_millis(ui.tick_rate_ms.max(1)),
            mouse_support: ui.mouse_support,
            store_snapshot: None,
        }
    }

    /// Update the store snapshot for state-aware event handling.
    pub fn update_store_snapshot(&mut self, store: &Store) {
        self.store_snapshot = Some(StoreSnapshot {
            input_mode: store.app.input_mode,
            current_view: store.app.current_view,
            show_help: store.app.show_help,
            has_error: store.app.error.is_some(),
            has_notification: store.app.notification.is_some(),
            compare_len: store.compare.len(),
            can_toggle_summary: store.compare.can_toggle_summary(),
        });
    }

    /// Get the next action from user input.
    pub async fn next(&mut self) -> Result<Option<Action>> {
        if event::poll(self.poll_timeout)? {
            match event::read()? {
                CrosstermEvent::Key(key) => return Ok(self.handle_key(key)),
                CrosstermEvent::Mouse(mouse) => return Ok(self.handle_mouse(mouse)),
                // Terminal will automatically redraw
                CrosstermEvent::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(None)
    }

    /// Handle a key event and return an optional action.
    fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        // Only process key press events
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let snapshot = self.store_snapshot.as_ref()?;
        let input = InputEvent::from(key);

        match snapshot.input_mode {
            InputMode::Normal => self.handle_normal_mode(&input, snapshot),
            InputMode::Search => self.handle_search_mode(&input),
        }
    }

    /// Handle a mouse event and return an optional action.
    fn handle_mouse(&self, mouse: MouseEvent) -> Option<Action> {
        if !self.mouse_support {
            return None;
        }
        match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            _ => None,
        }
    }

    fn handle_normal_mode(&self, input: &InputEvent, snapshot: &StoreSnapshot) -> Option<Action> {
        let keys = &self.keymap;

        // The help popup swallows everything but its own close keys
        if snapshot.show_help {
            if keys.help.matches(input) || keys.back.matches(input) {
                return Some(Action::ToggleHelp);
            }
            return keys.quit.matches(input).then_some(Action::Quit);
        }

        if keys.back.matches(input) {
            if snapshot.has_error {
                return Some(Action::ClearError);
            }
            if snapshot.has_notification {
                return Some(Action::DismissNotification);
            }
            return None;
        }

        // Global shortcuts
        if keys.quit.matches(input) {
            return Some(Action::Quit);
        }
        if keys.help.matches(input) {
            return Some(Action::ToggleHelp);
        }
        if keys.refresh.matches(input) {
            return Some(Action::LoadCatalog);
        }
        if keys.search.matches(input) {
            return Some(Action::SetInputMode(InputMode::Search));
        }

        // Tab switching
        if keys.next_tab.matches(input) {
            return Some(Action::NextView);
        }
        if input.key == Key::BackTab {
            return Some(Action::PrevView);
        }
        if let Some((_, view)) = keys.views.iter().find(|(b, _)| b.matches(input)) {
            return Some(Action::SetView(*view));
        }

        // Comparison
        if let Some(slot) = keys.remove_slot.iter().position(|b| b.matches(input)) {
            return (slot < snapshot.compare_len).then_some(Action::RemoveFromCompare(slot));
        }
        if keys.clear_compare.matches(input) {
            return (snapshot.compare_len > 0).then_some(Action::ClearCompare);
        }
        if keys.toggle_summary.matches(input) {
            // The show/hide control only exists with two or more items.
            return snapshot
                .can_toggle_summary
                .then_some(Action::ToggleCompareSummary);
        }

        if snapshot.current_view.has_item_list() {
            return self.handle_item_list(input, snapshot);
        }

        None
    }

    fn handle_item_list(&self, input: &InputEvent, snapshot: &StoreSnapshot) -> Option<Action> {
        let keys = &self.keymap;

        if keys.toggle_compare.matches(input) {
            return Some(Action::ToggleCompare);
        }
        if snapshot.current_view == View::Inventory && keys.next_filter.matches(input) {
            return Some(Action::NextInventoryFilter);
        }

        // Navigation
        if keys.up.matches(input) || input.key == Key::Up {
            return Some(Action::ScrollUp);
        }
        if keys.down.matches(input) || input.key == Key::Down {
            return Some(Action::ScrollDown);
        }

        match input.key {
            Key::PageUp => Some(Action::PageUp),
            Key::PageDown => Some(Action::PageDown),
            Key::Home => Some(Action::GoToTop),
            Key::End => Some(Action::GoToBottom),
            _ => None,
        }
    }

    fn handle_search_mode(&self, input: &InputEvent) -> Option<Action> {
        match input.key {
            // Cancel search and clear
            Key::Escape => Some(Action::CancelSearch),
            // Keep the query
            Key::Enter => Some(Action::SetInputMode(InputMode::Normal)),
            Key::Backspace => Some(Action::SearchBackspace),
            Key::Left => Some(Action::SearchCursorLeft),
            Key::Right => Some(Action::SearchCursorRight),
            _ => input.text_char().map(Action::SearchInput),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_items;
    use crossterm::event::{KeyCode, KeyModifiers};
    use tokio::sync::mpsc;

    fn handler_for(store: &Store) -> EventHandler {
        let keymap = KeyMap::from_config(&KeyBindings::default()).unwrap();
        let mut handler = EventHandler::new(keymap, &UiConfig::default());
        handler.update_store_snapshot(store);
        handler
    }

    fn store() -> Store {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut store = Store::new(tx);
        store.reduce(Action::CatalogLoaded(builtin_items()));
        store
    }

    fn key_press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(handler: &EventHandler, c: char) -> Option<Action> {
        handler.handle_key(key_press(KeyCode::Char(c)))
    }

    #[test]
    fn test_default_keymap_parses() {
        assert!(KeyMap::from_config(&KeyBindings::default()).is_ok());
    }

    #[test]
    fn test_invalid_binding_names_the_key() {
        let bindings = KeyBindings {
            clear_compare: "Ctrl+".to_string(),
            ..Default::default()
        };
        let err = KeyMap::from_config(&bindings).unwrap_err();
        assert!(err.to_string().contains("keybindings.clear_compare"));
    }

    #[test]
    fn test_summary_key_only_offered_with_two_items() {
        let mut store = store();
        store.reduce(Action::ToggleCompare);
        let handler = handler_for(&store);
        assert!(press(&handler, 's').is_none());

        store.reduce(Action::ScrollDown);
        store.reduce(Action::ToggleCompare);
        let handler = handler_for(&store);
        assert!(matches!(
            press(&handler, 's'),
            Some(Action::ToggleCompareSummary)
        ));
    }

    #[test]
    fn test_remove_slot_requires_filled_slot() {
        let mut store = store();
        store.reduce(Action::ToggleCompare);
        let handler = handler_for(&store);

        let alt = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT);
        assert!(matches!(
            handler.handle_key(alt('1')),
            Some(Action::RemoveFromCompare(0))
        ));
        assert!(handler.handle_key(alt('2')).is_none());
    }

    #[test]
    fn test_clear_requires_selection() {
        let store = store();
        let handler = handler_for(&store);
        assert!(press(&handler, 'x').is_none());
    }

    #[test]
    fn test_tab_shortcuts() {
        let store = store();
        let handler = handler_for(&store);
        assert!(matches!(
            press(&handler, '3'),
            Some(Action::SetView(View::Trades))
        ));
        assert!(matches!(
            handler.handle_key(key_press(KeyCode::Tab)),
            Some(Action::NextView)
        ));
    }

    #[test]
    fn test_search_mode_edits_query() {
        let mut store = store();
        store.reduce(Action::SetInputMode(InputMode::Search));
        let handler = handler_for(&store);

        // 'q' is text while searching, not quit
        assert!(matches!(press(&handler, 'q'), Some(Action::SearchInput('q'))));
        assert!(matches!(
            handler.handle_key(key_press(KeyCode::Esc)),
            Some(Action::CancelSearch)
        ));
        assert!(matches!(
            handler.handle_key(key_press(KeyCode::Enter)),
            Some(Action::SetInputMode(InputMode::Normal))
        ));
    }

    #[test]
    fn test_filter_key_only_in_inventory() {
        let mut store = store();
        let handler = handler_for(&store);
        assert!(press(&handler, 'f').is_none());

        store.reduce(Action::SetView(View::Inventory));
        let handler = handler_for(&store);
        assert!(matches!(
            press(&handler, 'f'),
            Some(Action::NextInventoryFilter)
        ));
    }

    #[test]
    fn test_help_popup_captures_keys() {
        let mut store = store();
        store.reduce(Action::ToggleHelp);
        let handler = handler_for(&store);
        assert!(press(&handler, 'c').is_none());
        assert!(matches!(press(&handler, '?'), Some(Action::ToggleHelp)));
    }

    #[test]
    fn test_escape_dismisses_error_first() {
        let mut store = store();
        store.reduce(Action::SetError("boom".to_string()));
        let handler = handler_for(&store);
        assert!(matches!(
            handler.handle_key(key_press(KeyCode::Esc)),
            Some(Action::ClearError)
        ));
    }

    #[test]
    fn test_release_events_are_ignored() {
        let store = store();
        let handler = handler_for(&store);
        let mut key = key_press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert!(handler.handle_key(key).is_none());
    }
}
