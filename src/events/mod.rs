//! Event handling for SteamTrade.
//!
//! Terminal input is read by [`EventHandler`], matched against the
//! configured key bindings and turned into store [`Action`](crate::state::Action)s.

mod handler;
mod input;

pub use handler::{EventHandler, KeyMap};
pub use input::{InputEvent, Key, KeyBinding, Modifiers};
