//! Per-section validation: window, layout, surfaces.

use crate::schema::ShellConfig;

use super::helpers::validate_range;

/// Validate window size constraints.
pub(crate) fn validate_window(errors: &mut Vec<String>, config: &ShellConfig) {
    validate_range(errors, "window.width", config.window.width, 400, 10_000);
    validate_range(errors, "window.height", config.window.height, 300, 10_000);
    if config.window.user_agent.trim().is_empty() {
        errors.push("window.user_agent must not be empty".into());
    }
}

/// Validate layout constraints.
pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &ShellConfig) {
    validate_range(errors, "layout.gap", config.layout.gap, 0, 20);
    validate_range(
        errors,
        "layout.outer_padding",
        config.layout.outer_padding,
        0,
        40,
    );
    if config.layout.default_url.trim().is_empty() {
        errors.push("layout.default_url must not be empty".into());
    }
}

/// Validate surface lifecycle constraints.
pub(crate) fn validate_surfaces(errors: &mut Vec<String>, config: &ShellConfig) {
    validate_range(
        errors,
        "surfaces.max_creation_attempts",
        config.surfaces.max_creation_attempts,
        1,
        10,
    );
}
