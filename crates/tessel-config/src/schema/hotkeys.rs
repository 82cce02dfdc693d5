//! Hotkey configuration types.

use serde::{Deserialize, Serialize};

/// Hotkey groups. Only the browser surface group exists today.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HotkeysConfig {
    pub browser: BrowserHotkeys,
}

/// Keys handled while a content surface has focus.
///
/// Format: "Modifier+Key" where Modifier is one of: Cmd, Option, Alt,
/// Control, Shift, Meta. Multiple modifiers: "Cmd+Shift+D".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserHotkeys {
    pub toggle_dev_tools: String,
    pub reload: String,
    /// History back.
    pub undo: String,
    /// History forward.
    pub redo: String,
    pub open_new_tab: String,
    pub split_row: String,
    pub split_column: String,
    pub close_pane: String,
    pub blur_tab: String,
    pub focus_next_pane: String,
    pub focus_prev_pane: String,
    pub next_tab: String,
    pub prev_tab: String,
}

impl Default for BrowserHotkeys {
    fn default() -> Self {
        Self {
            toggle_dev_tools: "F12".into(),
            reload: "F5".into(),
            undo: "Alt+Left".into(),
            redo: "Alt+Right".into(),
            open_new_tab: "Cmd+T".into(),
            split_row: "Cmd+D".into(),
            split_column: "Cmd+Shift+D".into(),
            close_pane: "Cmd+W".into(),
            blur_tab: "Meta+Escape".into(),
            focus_next_pane: "Cmd+]".into(),
            focus_prev_pane: "Cmd+[".into(),
            next_tab: "Control+Tab".into(),
            prev_tab: "Control+Shift+Tab".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_hotkey_defaults() {
        let keys = BrowserHotkeys::default();
        assert_eq!(keys.toggle_dev_tools, "F12");
        assert_eq!(keys.reload, "F5");
        assert_eq!(keys.undo, "Alt+Left");
        assert_eq!(keys.redo, "Alt+Right");
        assert_eq!(keys.blur_tab, "Meta+Escape");
    }

    #[test]
    fn partial_hotkeys_keep_defaults() {
        let toml_str = r#"
[browser]
reload = "Cmd+R"
"#;
        let config: HotkeysConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.browser.reload, "Cmd+R");
        assert_eq!(config.browser.toggle_dev_tools, "F12");
    }
}
