//! Full configuration validation.
//!
//! Each section has its own check; this orchestrator calls them all and
//! collects errors into a single `ConfigError`.

mod helpers;
mod sections;


use crate::keybinds;
use crate::schema::ShellConfig;
use tessel_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ShellConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = keybinds::validate_hotkeys(&config.hotkeys.browser) {
        errors.push(e.to_string());
    }

    sections::validate_window(&mut errors, config);
    sections::validate_layout(&mut errors, config);
    sections::validate_surfaces(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
