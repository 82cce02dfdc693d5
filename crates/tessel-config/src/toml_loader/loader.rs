//! Core TOML config loading: read from a path or the platform default.

use crate::schema::ShellConfig;
use crate::validation;
use std::path::Path;
use tessel_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. A config that parses but fails
/// validation is logged and returned as-is.
pub fn load_from_path(path: &Path) -> Result<ShellConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: ShellConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), error = %e, "config has invalid values");
    }

    info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Load config from `path`, writing the commented default template there
/// first when the file does not exist yet.
pub fn load_or_create(path: &Path) -> Result<ShellConfig, ConfigError> {
    match load_from_path(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!(path = %path.display(), "no config found, creating default");
            create_default_config(path)?;
            Ok(ShellConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/tessel/config.toml`
/// On Linux: `~/.config/tessel/config.toml`
pub fn load_default() -> Result<ShellConfig, ConfigError> {
    load_or_create(&default_config_path()?)
}
