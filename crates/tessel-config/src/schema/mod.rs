//! Configuration schema types for Tessel.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod hotkeys;
mod layout;
mod system;
mod window;

pub use hotkeys::*;
pub use layout::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ShellConfig {
    pub hotkeys: HotkeysConfig,
    pub features: FeaturesConfig,
    pub window: WindowConfig,
    pub layout: LayoutConfig,
    pub surfaces: SurfacesConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: ShellConfig = toml::from_str("").unwrap();
        assert_eq!(config.hotkeys.browser.reload, "F5");
        assert_eq!(config.layout.gap, 4);
        assert_eq!(config.layout.default_url, "about:blank");
        assert_eq!(config.surfaces.max_creation_attempts, 3);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn sections_override_independently() {
        let toml_str = r#"
[hotkeys.browser]
undo = "Cmd+Left"

[features]
ad_blocker = true

[layout]
gap = 0
"#;
        let config: ShellConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.hotkeys.browser.undo, "Cmd+Left");
        assert_eq!(config.hotkeys.browser.redo, "Alt+Right");
        assert!(config.features.ad_blocker);
        assert_eq!(config.layout.gap, 0);
        assert_eq!(config.window.width, 1200);
    }

    #[test]
    fn unknown_sections_are_ignored() {
        let config: ShellConfig = toml::from_str("[sidebar]\nwidth = 300\n").unwrap();
        assert_eq!(config.layout.gap, 4);
    }
}
