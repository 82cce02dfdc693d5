//! Hotkey validation utilities.

use tessel_common::ConfigError;

use crate::keymap::{parse_keybind, KeyBind};
use crate::schema::BrowserHotkeys;

/// Returns all browser hotkeys as `(name, binding)` pairs.
pub fn all_hotkeys(config: &BrowserHotkeys) -> Vec<(&str, &str)> {
    vec![
        ("toggle_dev_tools", &config.toggle_dev_tools),
        ("reload", &config.reload),
        ("undo", &config.undo),
        ("redo", &config.redo),
        ("open_new_tab", &config.open_new_tab),
        ("split_row", &config.split_row),
        ("split_column", &config.split_column),
        ("close_pane", &config.close_pane),
        ("blur_tab", &config.blur_tab),
        ("focus_next_pane", &config.focus_next_pane),
        ("focus_prev_pane", &config.focus_prev_pane),
        ("next_tab", &config.next_tab),
        ("prev_tab", &config.prev_tab),
    ]
}

/// Validate that every hotkey parses and no two fire on the same chord.
pub fn validate_hotkeys(config: &BrowserHotkeys) -> Result<(), ConfigError> {
    let mut seen: Vec<(&str, KeyBind)> = Vec::new();

    for (name, binding) in all_hotkeys(config) {
        let parsed = parse_keybind(binding)?;
        if let Some((existing, _)) = seen.iter().find(|(_, kb)| kb.same_chord(&parsed)) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate hotkey '{binding}': assigned to both '{existing}' and '{name}'"
            )));
        }
        seen.push((name, parsed));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_hotkeys_are_valid() {
        assert!(validate_hotkeys(&BrowserHotkeys::default()).is_ok());
    }

    #[test]
    fn all_hotkeys_returns_13_entries() {
        assert_eq!(all_hotkeys(&BrowserHotkeys::default()).len(), 13);
    }

    #[test]
    fn detects_duplicate_hotkeys() {
        let config = BrowserHotkeys {
            reload: "Cmd+R".into(),
            toggle_dev_tools: "Cmd+R".into(),
            ..Default::default()
        };
        let err = validate_hotkeys(&config).unwrap_err().to_string();
        assert!(err.contains("duplicate hotkey"));
        assert!(err.contains("Cmd+R"));
    }

    #[test]
    fn detects_duplicates_written_differently() {
        let config = BrowserHotkeys {
            split_row: "Shift+Alt+S".into(),
            split_column: "alt+shift+s".into(),
            ..Default::default()
        };
        assert!(validate_hotkeys(&config).is_err());
    }

    #[test]
    fn reports_unparseable_hotkey() {
        let config = BrowserHotkeys {
            reload: "Hyper+R".into(),
            ..Default::default()
        };
        let err = validate_hotkeys(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHotkey { .. }));
    }
}
