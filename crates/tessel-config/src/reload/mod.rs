//! Live config reload manager.
//!
//! Combines the file watcher with config loading so a running shell picks
//! up edited hotkeys without a restart.

mod manager;


pub use manager::ReloadManager;
