//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Tessel Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[hotkeys.browser]
# Modifiers: Cmd, Option/Alt, Control, Shift, Meta. Cmd is Ctrl off macOS.
# toggle_dev_tools = "F12"
# reload = "F5"
# undo = "Alt+Left"            # history back
# redo = "Alt+Right"           # history forward
# open_new_tab = "Cmd+T"
# split_row = "Cmd+D"          # new pane to the right
# split_column = "Cmd+Shift+D" # new pane below
# close_pane = "Cmd+W"
# blur_tab = "Meta+Escape"
# focus_next_pane = "Cmd+]"
# focus_prev_pane = "Cmd+["
# next_tab = "Control+Tab"
# prev_tab = "Control+Shift+Tab"

[features]
# ad_blocker = false

[window]
# title = "Tessel"
# width = 1200                 # 400-10000
# height = 900                 # 300-10000
# user_agent = "Mozilla/5.0 ..."
# devtools = false

[layout]
# gap = 4                      # 0-20
# outer_padding = 0            # 0-40
# default_url = "about:blank"

[surfaces]
# max_creation_attempts = 3    # 1-10

[logging]
# level = "info"               # trace, debug, info, warn, error
"##
    .to_string()
}
