//! Window and content surface configuration types.

use serde::{Deserialize, Serialize};

/// Desktop Chromium user agent sent by every content surface.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";

/// Host window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner width in logical pixels (valid range: 400-10000).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 300-10000).
    pub height: u32,
    pub user_agent: String,
    /// Allow opening devtools on content surfaces.
    pub devtools: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Tessel".into(),
            width: 1200,
            height: 900,
            user_agent: DEFAULT_USER_AGENT.into(),
            devtools: cfg!(debug_assertions),
        }
    }
}

/// Content surface lifecycle settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfacesConfig {
    /// Creation attempts per pane before the slot stays failed until a
    /// manual retry (valid range: 1-10).
    pub max_creation_attempts: u32,
}

impl Default for SurfacesConfig {
    fn default() -> Self {
        Self {
            max_creation_attempts: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "Tessel");
        assert_eq!(config.width, 1200);
        assert_eq!(config.height, 900);
        assert!(config.user_agent.contains("Chrome/"));
    }

    #[test]
    fn window_config_partial_toml() {
        let toml_str = r#"
width = 1600
devtools = true
"#;
        let config: WindowConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.width, 1600);
        assert!(config.devtools);
        assert_eq!(config.height, 900);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn surfaces_default_attempts() {
        assert_eq!(SurfacesConfig::default().max_creation_attempts, 3);
    }
}
