//! Input event types and key bindings.

use crate::error::{Error, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::str::FromStr;

/// Simplified key representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
    Unknown,
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Unknown,
        }
    }
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Self {
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
            shift: mods.contains(KeyModifiers::SHIFT),
        }
    }
}

/// A processed input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        Self {
            key: Key::from(event.code),
            modifiers: Modifiers::from(event.modifiers),
        }
    }
}

impl InputEvent {
    /// Printable character typed without Ctrl/Alt, if any.
    pub fn text_char(&self) -> Option<char> {
        match self.key {
            Key::Char(c) if !self.modifiers.ctrl && !self.modifiers.alt => Some(c),
            _ => None,
        }
    }
}

/// A key binding parsed from a string such as `"q"`, `"Alt+1"` or `"Enter"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    key: Key,
    modifiers: Modifiers,
}

impl KeyBinding {
    /// Check if an input event triggers this binding.
    ///
    /// Character bindings ignore Shift and letter case, since terminals
    /// disagree on whether `?` or `G` carry the Shift modifier.
    pub fn matches(&self, input: &InputEvent) -> bool {
        if self.modifiers.ctrl != input.modifiers.ctrl || self.modifiers.alt != input.modifiers.alt
        {
            return false;
        }

        match (self.key, input.key) {
            (Key::Char(expected), Key::Char(actual)) => {
                expected.to_lowercase().eq(actual.to_lowercase())
            }
            (expected, actual) => {
                expected == actual && self.modifiers.shift == input.modifiers.shift
            }
        }
    }
}

impl FromStr for KeyBinding {
    type Err = Error;

    fn from_str(binding: &str) -> Result<Self> {
        let invalid = || Error::invalid_input(format!("unrecognized key binding {binding:?}"));

        // A trailing "+" after the separator is the plus key itself: "+", "Ctrl++".
        let binding = binding.trim();
        let (modifier_list, mut key_name) = match binding.strip_suffix('+') {
            Some("") => ("", Some("+")),
            Some(rest) if rest.ends_with('+') => (&rest[..rest.len() - 1], Some("+")),
            _ => (binding, None),
        };

        let mut modifiers = Modifiers::default();
        let parts = modifier_list
            .split('+')
            .map(str::trim)
            .filter(|_| !modifier_list.is_empty());

        for part in parts {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers.ctrl = true,
                "alt" => modifiers.alt = true,
                "shift" => modifiers.shift = true,
                _ if key_name.is_none() && !part.is_empty() => key_name = Some(part),
                _ => return Err(invalid()),
            }
        }

        let name = key_name.ok_or_else(invalid)?;
        let key = match name.to_lowercase().as_str() {
            "enter" => Key::Enter,
            "esc" | "escape" => Key::Escape,
            "backspace" => Key::Backspace,
            "delete" | "del" => Key::Delete,
            "tab" => Key::Tab,
            "backtab" => Key::BackTab,
            "up" => Key::Up,
            "down" => Key::Down,
            "left" => Key::Left,
            "right" => Key::Right,
            "home" => Key::Home,
            "end" => Key::End,
            "pageup" => Key::PageUp,
            "pagedown" => Key::PageDown,
            "space" => Key::Char(' '),
            s if s.len() > 1 && s.starts_with('f') => {
                Key::F(s[1..].parse::<u8>().map_err(|_| invalid())?)
            }
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => return Err(invalid()),
                }
            }
        };

        Ok(Self { key, modifiers })
    }
}
