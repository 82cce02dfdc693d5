use tessel_config::{normalize_key_name, KeyBind, Modifier};

use crate::events::KeyInput;

pub(super) const MOD_CTRL: u8 = 0b0001;
pub(super) const MOD_ALT: u8 = 0b0010;
pub(super) const MOD_SHIFT: u8 = 0b0100;
pub(super) const MOD_SUPER: u8 = 0b1000;

/// A canonical key chord for hash lookup.
///
/// Modifiers are a bitmask so comparison does not depend on the order they
/// were written in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// Bitmask: Ctrl=1, Alt=2, Shift=4, Super=8.
    pub mods: u8,
    /// Normalized key name (e.g. "T", "Left", "F12").
    pub key: String,
}

impl KeyCombo {
    /// Build from a parsed [`KeyBind`].
    pub fn from_keybind(kb: &KeyBind) -> Self {
        let mut mods = 0u8;
        for m in &kb.modifiers {
            mods |= match m {
                Modifier::Ctrl => MOD_CTRL,
                Modifier::Alt => MOD_ALT,
                Modifier::Shift => MOD_SHIFT,
                Modifier::Super => MOD_SUPER,
            };
        }
        Self {
            mods,
            key: kb.key.clone(),
        }
    }

    /// Build from a key event reported by a surface. The DOM `metaKey` is
    /// the Super modifier.
    pub fn from_key_input(input: &KeyInput) -> Self {
        let mut mods = 0u8;
        if input.ctrl {
            mods |= MOD_CTRL;
        }
        if input.alt {
            mods |= MOD_ALT;
        }
        if input.shift {
            mods |= MOD_SHIFT;
        }
        if input.meta {
            mods |= MOD_SUPER;
        }
        Self {
            mods,
            key: normalize_key_name(&input.key),
        }
    }
}
