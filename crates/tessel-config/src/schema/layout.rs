//! Pane layout configuration types.

use serde::{Deserialize, Serialize};

/// Pane layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Gap between panes in pixels (valid range: 0-20).
    pub gap: u32,
    /// Window-edge padding in pixels (valid range: 0-40).
    pub outer_padding: u32,
    /// URL loaded by new tabs opened without one.
    pub default_url: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            gap: 4,
            outer_padding: 0,
            default_url: "about:blank".into(),
        }
    }
}
