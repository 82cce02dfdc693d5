//! File watcher for live config reload.
//!
//! Uses the `notify` crate to watch the config file for changes, with a
//! debounce so editor save sequences produce one reload.

mod config_watcher;

#[cfg(test)]
mod tests;

pub use config_watcher::{ConfigWatcher, DEBOUNCE};
