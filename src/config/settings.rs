//! Configuration settings for SteamTrade.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides, e.g. `STEAMTRADE__UI__TICK_RATE_MS=100`.
pub const ENV_PREFIX: &str = "STEAMTRADE";

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog configuration.
    pub catalog: CatalogConfig,
    /// UI configuration.
    pub ui: UiConfig,
    /// Key bindings.
    pub keybindings: KeyBindings,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    pub fn load_or_default() -> crate::Result<Self> {
        Self::load(None)
    }

    /// Load configuration: defaults, then the TOML file (if present), then
    /// `STEAMTRADE__*` environment variables.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = path.unwrap_or_else(default_config_path);

        let settings = ::config::Config::builder()
            .add_source(
                ::config::File::from(config_path.as_path())
                    .format(::config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| crate::Error::config(e.to_string()))?;

        let config: Self = settings
            .try_deserialize()
            .map_err(|e| crate::Error::config(e.to_string()))?;

        tracing::debug!(path = %config_path.display(), "configuration loaded");
        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self, path: Option<PathBuf>) -> crate::Result<()> {
        let config_path = path.unwrap_or_else(default_config_path);

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

fn default_config_path() -> PathBuf {
    super::config_dir()
        .map(|p| p.join("config.toml"))
        .unwrap_or_else(|_| PathBuf::from("config.toml"))
}

/// Catalog configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON file with catalog items. The built-in catalog is used when unset.
    pub path: Option<PathBuf>,
}

/// UI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Input poll interval in milliseconds.
    pub tick_rate_ms: u64,
    /// Enable mouse support.
    pub mouse_support: bool,
    /// Show the header bar.
    pub show_status_bar: bool,
    /// Show the key hint line at the bottom.
    pub show_help_bar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            mouse_support: true,
            show_status_bar: true,
            show_help_bar: true,
        }
    }
}

/// Key bindings configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Quit the application.
    pub quit: String,
    /// Show help.
    pub help: String,
    /// Navigate up.
    pub up: String,
    /// Navigate down.
    pub down: String,
    /// Cancel/back.
    pub back: String,
    /// Reload the catalog.
    pub refresh: String,
    /// Focus the inventory search box.
    pub search: String,
    /// Cycle to the next tab.
    pub next_tab: String,
    /// Switch to home view.
    pub home: String,
    /// Switch to inventory view.
    pub inventory: String,
    /// Switch to trades view.
    pub trades: String,
    /// Switch to profile view.
    pub profile: String,
    /// Add/remove the highlighted item from the comparison.
    pub toggle_compare: String,
    /// Clear the comparison.
    pub clear_compare: String,
    /// Show/hide the comparison summary.
    pub toggle_summary: String,
    /// Cycle the inventory category tab.
    pub next_filter: String,
    /// Remove the item in each comparison slot.
    pub remove_slot: [String; 3],
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            help: "?".to_string(),
            up: "k".to_string(),
            down: "j".to_string(),
            back: "Esc".to_string(),
            refresh: "r".to_string(),
            search: "/".to_string(),
            next_tab: "Tab".to_string(),
            home: "1".to_string(),
            inventory: "2".to_string(),
            trades: "3".to_string(),
            profile: "4".to_string(),
            toggle_compare: "c".to_string(),
            clear_compare: "x".to_string(),
            toggle_summary: "s".to_string(),
            next_filter: "f".to_string(),
            remove_slot: [
                "Alt+1".to_string(),
                "Alt+2".to_string(),
                "Alt+3".to_string(),
            ],
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    /// Directory for log files. Defaults to the platform data directory.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "steamtrade=info".to_string(),
            directory: None,
        }
    }
}

impl LoggingConfig {
    /// Resolve the directory log files are written to.
    pub fn resolve_directory(&self) -> PathBuf {
        self.directory
            .clone()
            .or_else(|| super::log_dir().ok())
            .unwrap_or_else(|| Path::new(".").join("logs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("steamtrade-{}", uuid::Uuid::new_v4()))
            .join(name)
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.ui.tick_rate_ms, 250);
        assert_eq!(config.catalog.path, None);
        assert_eq!(config.keybindings.toggle_compare, "c");
        assert_eq!(config.logging.level, "steamtrade=info");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = Config::load(Some(temp_path("absent.toml"))).unwrap();
        assert_eq!(config.ui, UiConfig::default());
        assert_eq!(config.keybindings, KeyBindings::default());
    }

    #[test]
    fn test_partial_file_overrides_only_given_keys() {
        let path = temp_path("config.toml");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(
            &path,
            r#"
[catalog]
path = "/srv/items.json"

[ui]
tick_rate_ms = 100

[keybindings]
toggle_compare = "Space"
"#,
        )
        .unwrap();

        let config = Config::load(Some(path.clone())).unwrap();
        let _ = std::fs::remove_dir_all(path.parent().unwrap());

        assert_eq!(config.catalog.path, Some(PathBuf::from("/srv/items.json")));
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert!(config.ui.mouse_support);
        assert_eq!(config.keybindings.toggle_compare, "Space");
        assert_eq!(config.keybindings.quit, "q");
    }

    #[test]
    fn test_saved_config_loads_back() {
        let path = temp_path("saved.toml");
        let mut config = Config::default();
        config.ui.show_help_bar = false;
        config.logging.directory = Some(PathBuf::from("/tmp/steamtrade-logs"));

        config.save(Some(path.clone())).unwrap();
        let loaded = Config::load(Some(path.clone())).unwrap();
        let _ = std::fs::remove_dir_all(path.parent().unwrap());

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_explicit_log_directory_wins() {
        let logging = LoggingConfig {
            directory: Some(PathBuf::from("/var/log/steamtrade")),
            ..Default::default()
        };
        assert_eq!(
            logging.resolve_directory(),
            PathBuf::from("/var/log/steamtrade")
        );
    }
}
