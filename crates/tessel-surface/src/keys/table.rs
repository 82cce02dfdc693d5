use std::collections::HashMap;

use tessel_common::Action;
use tessel_config::{parse_keybind, SettingsService};
use tracing::warn;

use super::combo::KeyCombo;

/// Settings keys and the action each one binds.
pub const KEY_ACTIONS: [(&str, Action); 13] = [
    ("Browser.toggleDevTools", Action::ToggleDevTools),
    ("Browser.reload", Action::Reload),
    ("Browser.undo", Action::GoBack),
    ("Browser.redo", Action::GoForward),
    ("Browser.blurTab", Action::BlurTab),
    ("Browser.focusNextPane", Action::FocusNextPane),
    ("Browser.focusPrevPane", Action::FocusPrevPane),
    ("Browser.nextTab", Action::NextTab),
    ("Browser.prevTab", Action::PrevTab),
    ("Browser.openNewTab", Action::NewTab),
    ("Browser.splitRow", Action::SplitRow),
    ("Browser.splitColumn", Action::SplitColumn),
    ("Browser.closePane", Action::ClosePane),
];

/// Maps key chords pressed inside a surface to [`Action`]s.
///
/// Built from the settings service at startup and rebuilt on config reload.
#[derive(Debug, Clone, Default)]
pub struct KeyTable {
    bindings: HashMap<KeyCombo, Action>,
}

impl KeyTable {
    /// Build the table from hotkey settings.
    ///
    /// Missing or unparseable bindings are logged and skipped. When two
    /// settings share a chord the first one listed in [`KEY_ACTIONS`] wins.
    pub fn from_settings(settings: &dyn SettingsService) -> Self {
        let mut bindings = HashMap::new();

        for (key, action) in KEY_ACTIONS {
            let Some(binding) = settings.get(key) else {
                warn!(setting = key, "hotkey setting missing");
                continue;
            };
            match parse_keybind(&binding) {
                Ok(kb) => {
                    bindings.entry(KeyCombo::from_keybind(&kb)).or_insert(action);
                }
                Err(e) => warn!(setting = key, error = %e, "skipping hotkey"),
            }
        }

        Self { bindings }
    }

    pub fn lookup(&self, combo: &KeyCombo) -> Option<Action> {
        self.bindings.get(combo).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
