//! Hotkey strings: parsing and key name normalization.

mod parse;
mod types;

pub use parse::{normalize_key_name, parse_keybind};
pub use types::{KeyBind, Modifier};
