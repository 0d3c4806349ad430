//! Application-level state.

use super::Notification;

/// The current tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Inventory,
    Trades,
    Profile,
}

impl View {
    /// Tabs in display order.
    pub const ALL: [View; 4] = [View::Home, View::Inventory, View::Trades, View::Profile];

    /// Tab title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Главная",
            Self::Inventory => "Инвентарь",
            Self::Trades => "Обмены",
            Self::Profile => "Профиль",
        }
    }

    pub fn next(&self) -> Self {
        let index = Self::ALL.iter().position(|v| v == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let index = Self::ALL.iter().position(|v| v == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Whether the view shows a selectable item list.
    pub fn has_item_list(&self) -> bool {
        matches!(self, Self::Home | Self::Inventory)
    }
}

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
}

/// Global application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Current view.
    pub current_view: View,
    /// Current input mode.
    pub input_mode: InputMode,
    /// Whether to show help overlay.
    pub show_help: bool,
    /// Current notification.
    pub notification: Option<Notification>,
    /// Current error message.
    pub error: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Current search input.
    pub input_buffer: String,
    /// Cursor position in input buffer (byte offset).
    pub cursor_position: usize,
}

impl AppState {
    /// Check if in an input mode.
    pub fn is_editing(&self) -> bool {
        matches!(self.input_mode, InputMode::Search)
    }

    /// Clear the input buffer.
    pub fn clear_input(&mut self) {
        self.input_buffer.clear();
        self.cursor_position = 0;
    }

    /// Add a character to the input buffer.
    pub fn push_char(&mut self, c: char) {
        self.input_buffer.insert(self.cursor_position, c);
        self.cursor_position += c.len_utf8();
    }

    /// Remove the character before the cursor.
    pub fn pop_char(&mut self) {
        if let Some((index, _)) = self.input_buffer[..self.cursor_position]
            .char_indices()
            .next_back()
        {
            self.input_buffer.remove(index);
            self.cursor_position = index;
        }
    }

    /// Move cursor left.
    pub fn cursor_left(&mut self) {
        if let Some((index, _)) = self.input_buffer[..self.cursor_position]
            .char_indices()
            .next_back()
        {
            self.cursor_position = index;
        }
    }

    /// Move cursor right.
    pub fn cursor_right(&mut self) {
        if let Some(c) = self.input_buffer[self.cursor_position..].chars().next() {
            self.cursor_position += c.len_utf8();
        }
    }
}
