//! Main application module.
//!
//! This module contains the main `App` struct that coordinates
//! the event loop, state management, and rendering.

use crate::catalog::{CatalogProvider, load_validated, provider_for};
use crate::config::Config;
use crate::error::Result;
use crate::events::{EventHandler, KeyMap};
use crate::state::{Action, Notification, Store};
use crate::ui::Ui;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Instant;
use tokio::sync::mpsc;

/// The main application.
pub struct App {
    /// Terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application store.
    store: Store,
    /// Event handler.
    event_handler: EventHandler,
    /// Action receiver.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Where catalog items come from.
    provider: Box<dyn CatalogProvider>,
    /// Configuration.
    config: Config,
}

impl App {
    /// Create a new application.
    ///
    /// Key bindings are parsed before the terminal is touched so that a bad
    /// configuration is reported on a normal screen.
    pub fn new(config: Config) -> Result<Self> {
        let keymap = KeyMap::from_config(&config.keybindings)?;
        let event_handler = EventHandler::new(keymap, &config.ui);
        let provider = provider_for(config.catalog.path.clone());

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if config.ui.mouse_support {
            execute!(stdout, EnableMouseCapture)?;
        }
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let store = Store::new(action_tx);

        tracing::info!(source = %provider.source(), "application started");

        Ok(Self {
            terminal,
            store,
            event_handler,
            action_rx,
            provider,
            config,
        })
    }

    /// Run the application event loop.
    pub async fn run(&mut self) -> Result<()> {
        self.store.dispatch(Action::LoadCatalog)?;

        loop {
            self.expire_notification();
            self.event_handler.update_store_snapshot(&self.store);
            self.draw()?;

            tokio::select! {
                result = self.event_handler.next() => {
                    if let Some(action) = result? {
                        self.handle_action(action).await?;
                    }
                }

                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action).await?;
                }
            }

            if self.store.app.should_quit {
                break;
            }
        }

        tracing::info!("application exiting");
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let store = &self.store;
        let config = &self.config;
        self.terminal.draw(|frame| Ui::render(frame, store, config))?;
        Ok(())
    }

    fn expire_notification(&mut self) {
        let expired = self
            .store
            .app
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired(Instant::now()));
        if expired {
            self.store.reduce(Action::DismissNotification);
        }
    }

    /// Handle an action.
    async fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::LoadCatalog => self.load_catalog().await,
            action => {
                self.store.reduce(action);
                Ok(())
            }
        }
    }

    /// Reload the catalog from the configured provider.
    async fn load_catalog(&mut self) -> Result<()> {
        self.store.reduce(Action::LoadCatalog);
        self.draw()?;

        match load_validated(self.provider.as_ref()).await {
            Ok(items) => {
                let notification = if items.is_empty() {
                    Notification::warning("Каталог пуст")
                } else {
                    Notification::success(format!("Каталог загружен: {} предметов", items.len()))
                };
                self.store.reduce(Action::CatalogLoaded(items));
                self.store.reduce(Action::ShowNotification(notification));
                Ok(())
            }
            Err(e) if e.is_recoverable() => {
                tracing::warn!(error = %e, source = %self.provider.source(), "catalog load failed");
                self.store.reduce(Action::SetError(e.to_string()));
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}
