//! Hotkey lookup for key events coming from content surfaces.

mod combo;
mod table;

pub use combo::KeyCombo;
pub use table::{KeyTable, KEY_ACTIONS};
