//! Configuration management

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::messages::Messages;
use crate::ui::ThemeConfig;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Drive API connection settings
    pub api: ApiConfig,
    /// Display settings
    pub display: DisplayConfig,
    /// Row action capabilities
    pub actions: ActionConfig,
    /// Theme settings
    pub theme: ThemeConfig,
    /// Message catalog overrides (translations)
    pub messages: Messages,
}

/// Connection settings for the remote drive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the content API
    pub base_url: String,
    /// Bearer token; unauthenticated when empty
    pub token: Option<String>,
    /// Identifier of the drive root folder
    pub root_folder_id: String,
    /// Display name of the drive root
    pub root_name: String,
    /// Account label shown in the status bar
    pub account: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://drive.example.com/api/2".to_string(),
            token: None,
            root_folder_id: "0".to_string(),
            root_name: "All Files".to_string(),
            account: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Compact row action menus (fewer labels, for narrow terminals)
    pub compact: bool,
    /// Show the shared-with-collaborators marker in listings
    pub show_shared_marker: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            compact: false,
            show_shared_marker: true,
        }
    }
}

/// Which actions the row menu offers. Mirrors the account's permissions;
/// flags are fixed for the lifetime of the app.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionConfig {
    pub can_preview: bool,
    pub can_share: bool,
    pub can_move_or_copy: bool,
    pub can_download: bool,
    pub can_delete: bool,
    pub can_rename: bool,
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self {
            can_preview: true,
            can_share: true,
            can_move_or_copy: true,
            can_download: true,
            can_delete: true,
            can_rename: true,
        }
    }
}

/// Get the configuration directory path
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        std::env::var("APPDATA")
            .ok()
            .map(|p| PathBuf::from(p).join("skiff"))
    }

    #[cfg(not(windows))]
    {
        std::env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var("HOME")
                    .ok()
                    .map(|p| PathBuf::from(p).join(".config"))
            })
            .map(|p| p.join("skiff"))
    }
}

/// Get the config file path
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

impl Config {
    /// Load configuration, creating a commented default file on first run.
    /// Any failure falls back to defaults; the app must start regardless.
    pub fn load() -> Self {
        let Some(config_path) = config_file() else {
            return Config::default();
        };

        if let Some(dir) = config_path.parent()
            && !dir.exists()
            && let Err(e) = fs::create_dir_all(dir)
        {
            tracing::warn!(error = %e, "could not create config directory");
            return Config::default();
        }

        if !config_path.exists()
            && let Err(e) = fs::write(&config_path, default_config())
        {
            tracing::warn!(error = %e, "could not write default config");
            return Config::default();
        }

        match fs::read_to_string(&config_path) {
            Ok(content) => match toml_edit::de::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(error = %e, "config file is invalid, using defaults");
                    Config::default()
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "could not read config file, using defaults");
                Config::default()
            }
        }
    }
}

/// Default config file content with comments
fn default_config() -> String {
    r##"# Skiff Configuration
# This file is auto-generated. Edit as needed.

[api]
# Base URL of the drive content API
base_url = "https://drive.example.com/api/2"

# Bearer token for the API (leave out for unauthenticated access)
# token = ""

# Root folder of the drive
root_folder_id = "0"
root_name = "All Files"

# Account label shown in the status bar
account = ""

[display]
# Compact row action menus for narrow terminals
compact = false

# Show the shared-with-collaborators marker in listings
show_shared_marker = true

[actions]
# Which actions the row menu offers
can_preview = true
can_share = true
can_move_or_copy = true
can_download = true
can_delete = true
can_rename = true

# [theme]
# Colors accept names (e.g. "blue") or hex values (e.g. "#1e90ff")
# dialog_bg = "blue"

# [messages]
# Override any user-facing message; "{name}" interpolates the item name
# move_copy_name_in_use = "An item named \"{name}\" already exists in this folder."
"##
    .to_string()
}
