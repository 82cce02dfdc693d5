//! Per-surface webview settings.

use tessel_config::schema::WindowConfig;
use tessel_config::ShellConfig;

/// Settings applied to every webview the host builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceConfig {
    pub devtools: bool,
    pub user_agent: String,
    /// Whether pages may use the system clipboard.
    pub clipboard: bool,
}

impl SurfaceConfig {
    pub fn from_window(window: &WindowConfig) -> Self {
        Self {
            devtools: window.devtools,
            user_agent: window.user_agent.clone(),
            clipboard: true,
        }
    }
}

impl From<&ShellConfig> for SurfaceConfig {
    fn from(config: &ShellConfig) -> Self {
        Self::from_window(&config.window)
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self::from_window(&WindowConfig::default())
    }
}
