use serde::{Deserialize, Serialize};

/// A keyboard modifier key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Modifier {
    Ctrl,
    /// Option on macOS.
    Alt,
    Shift,
    /// Cmd on macOS, Win on Windows, Super on Linux.
    Super,
}

/// A hotkey: zero or more modifiers and a normalized key name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBind {
    pub modifiers: Vec<Modifier>,
    pub key: String,
}

impl KeyBind {
    /// Whether two bindings fire on the same key press, regardless of the
    /// order their modifiers were written in.
    pub fn same_chord(&self, other: &KeyBind) -> bool {
        if self.key != other.key {
            return false;
        }
        let mut a = self.modifiers.clone();
        let mut b = other.modifiers.clone();
        a.sort();
        b.sort();
        a == b
    }
}
