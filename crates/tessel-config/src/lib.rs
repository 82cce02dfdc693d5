//! Tessel configuration system.
//!
//! Provides TOML-based configuration for hotkeys, layout and content
//! surfaces, with live reload and validation. All sections use defaults so
//! partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tessel_config::{config_to_json, load_config};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod keybinds;
pub mod keymap;
pub mod reload;
pub mod schema;
pub mod settings;
pub mod toml_loader;
pub mod validation;
pub mod watcher;

pub use keymap::{normalize_key_name, parse_keybind, KeyBind, Modifier};
pub use reload::ReloadManager;
pub use schema::{ShellConfig, CONFIG_SCHEMA_VERSION};
pub use settings::{SettingsService, SETTINGS_KEYS};
pub use watcher::ConfigWatcher;

use std::path::{Path, PathBuf};
use tessel_common::ConfigError;

/// Resolve the config file location: an explicit path wins over the
/// platform default.
pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => toml_loader::default_config_path(),
    }
}

/// Load and strictly validate the config at `path`, or at the platform
/// default path when `None`. A missing file is created from the template.
pub fn load_config(path: Option<&Path>) -> Result<ShellConfig, ConfigError> {
    let config = toml_loader::load_or_create(&config_path(path)?)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ShellConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&ShellConfig::default());
        for section in ["hotkeys", "features", "window", "layout", "surfaces", "logging"] {
            assert!(json.contains(&format!("\"{section}\"")), "missing {section}");
        }
        assert!(json.contains("\"toggle_dev_tools\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&ShellConfig::default());
        let parsed: ShellConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.hotkeys.browser.blur_tab, "Meta+Escape");
        assert_eq!(parsed.layout.default_url, "about:blank");
    }

    #[test]
    fn explicit_path_wins() {
        let path = Path::new("/tmp/tessel-explicit.toml");
        assert_eq!(config_path(Some(path)).unwrap(), path);
    }

    #[test]
    fn load_config_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = load_config(Some(&path)).unwrap();
        assert!(path.exists());
        assert_eq!(config.hotkeys.browser.reload, "F5");
    }

    #[test]
    fn load_config_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[surfaces]\nmax_creation_attempts = 0\n").unwrap();
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
