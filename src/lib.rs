//! # SteamTrade
//!
//! A terminal storefront for Steam items: browse a catalog, search and
//! filter the inventory, and compare up to three items side by side.
//!
//! ## Architecture
//!
//! - **App**: terminal lifecycle and the event loop
//! - **Catalog**: item model, catalog providers and filters
//! - **Compare**: the comparison session (selection, summary, visibility)
//! - **State**: centralized store with actions and a reducer
//! - **Events**: key bindings and input handling
//! - **UI**: layout and rendering
//! - **Config**: layered configuration

pub mod app;
pub mod catalog;
pub mod compare;
pub mod config;
pub mod error;
pub mod events;
pub mod state;
pub mod ui;

pub use app::App;
pub use catalog::Item;
pub use compare::CompareSession;
pub use config::Config;
pub use error::{Error, Result};
