use tessel_common::ConfigError;

use super::types::{KeyBind, Modifier};

/// Parses a hotkey string like `"Cmd+T"`, `"Alt+Left"` or `"F12"` into a
/// [`KeyBind`].
///
/// Normalization rules:
/// - `"Cmd"` / `"Command"` -> `Super` on macOS, `Ctrl` elsewhere
/// - `"Option"` / `"Alt"` -> `Alt`
/// - `"Control"` / `"Ctrl"` -> `Ctrl`
/// - `"Meta"` / `"Super"` / `"Win"` -> `Super`
///
/// The last token becomes the key, even when it names a modifier.
pub fn parse_keybind(s: &str) -> Result<KeyBind, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidHotkey {
        binding: s.to_string(),
        reason: reason.to_string(),
    };

    let tokens: Vec<&str> = s.split('+').map(str::trim).collect();
    let Some((last, mods)) = tokens.split_last() else {
        return Err(invalid("empty hotkey"));
    };
    if last.is_empty() {
        return Err(invalid("hotkey has no key component"));
    }

    let mut modifiers = Vec::new();
    for token in mods {
        let modifier =
            normalize_modifier(token).ok_or_else(|| invalid(&format!("unknown modifier {token}")))?;
        if !modifiers.contains(&modifier) {
            modifiers.push(modifier);
        }
    }

    Ok(KeyBind {
        modifiers,
        key: normalize_key_name(last),
    })
}

pub(super) fn normalize_modifier(token: &str) -> Option<Modifier> {
    match token.to_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifier::Ctrl),
        "alt" | "option" | "opt" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        "cmd" | "command" => {
            if cfg!(target_os = "macos") {
                Some(Modifier::Super)
            } else {
                Some(Modifier::Ctrl)
            }
        }
        "super" | "win" | "meta" => Some(Modifier::Super),
        _ => None,
    }
}

/// Canonical spelling of a key name, shared with key events coming from
/// content surfaces.
pub fn normalize_key_name(token: &str) -> String {
    let lower = token.to_lowercase();
    match lower.as_str() {
        "period" => ".".into(),
        "comma" => ",".into(),
        "slash" => "/".into(),
        "backslash" => "\\".into(),
        "space" | " " => "Space".into(),
        "enter" | "return" => "Enter".into(),
        "escape" | "esc" => "Escape".into(),
        "tab" => "Tab".into(),
        "backspace" => "Backspace".into(),
        "delete" | "del" => "Delete".into(),
        "up" | "arrowup" => "Up".into(),
        "down" | "arrowdown" => "Down".into(),
        "left" | "arrowleft" => "Left".into(),
        "right" | "arrowright" => "Right".into(),
        "home" => "Home".into(),
        "end" => "End".into(),
        "pageup" => "PageUp".into(),
        "pagedown" => "PageDown".into(),
        _ => {
            if token.chars().count() == 1 {
                token.to_uppercase()
            } else {
                let mut chars = lower.chars();
                match chars.next() {
                    Some(c) => {
                        let upper: String = c.to_uppercase().collect();
                        format!("{upper}{}", chars.as_str())
                    }
                    None => lower,
                }
            }
        }
    }
}
