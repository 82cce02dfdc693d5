//! Read-only dotted-key access to settings.

use crate::schema::ShellConfig;

/// Key lookup used by components that only need a few values and should not
/// depend on the config layout.
pub trait SettingsService {
    /// Value for a dotted key such as `Browser.reload`, or `None` when the key
    /// is unknown.
    fn get(&self, key: &str) -> Option<String>;

    /// Boolean view of a setting. Anything but `"true"` is false.
    fn get_bool(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| v == "true")
    }
}

/// Every key [`ShellConfig`] answers.
pub const SETTINGS_KEYS: [&str; 14] = [
    "Browser.toggleDevTools",
    "Browser.reload",
    "Browser.undo",
    "Browser.redo",
    "Browser.openNewTab",
    "Browser.splitRow",
    "Browser.splitColumn",
    "Browser.closePane",
    "Browser.blurTab",
    "Browser.focusNextPane",
    "Browser.focusPrevPane",
    "Browser.nextTab",
    "Browser.prevTab",
    "settings.adBlocker",
];

impl SettingsService for ShellConfig {
    fn get(&self, key: &str) -> Option<String> {
        let keys = &self.hotkeys.browser;
        let value = match key {
            "Browser.toggleDevTools" => &keys.toggle_dev_tools,
            "Browser.reload" => &keys.reload,
            "Browser.undo" => &keys.undo,
            "Browser.redo" => &keys.redo,
            "Browser.openNewTab" => &keys.open_new_tab,
            "Browser.splitRow" => &keys.split_row,
            "Browser.splitColumn" => &keys.split_column,
            "Browser.closePane" => &keys.close_pane,
            "Browser.blurTab" => &keys.blur_tab,
            "Browser.focusNextPane" => &keys.focus_next_pane,
            "Browser.focusPrevPane" => &keys.focus_prev_pane,
            "Browser.nextTab" => &keys.next_tab,
            "Browser.prevTab" => &keys.prev_tab,
            "settings.adBlocker" => return Some(self.features.ad_blocker.to_string()),
            _ => return None,
        };
        Some(value.clone())
    }
}
